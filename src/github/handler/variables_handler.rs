use crate::github::{response::Variable, GithubClient};
use anyhow::Result;

pub struct VariablesHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> VariablesHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        VariablesHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn get(&self, name: &str) -> Result<Option<Variable>> {
        self.client
            .get_variable(&self.owner, &self.repo, name)
            .await
    }

    pub async fn update(&self, name: &str, value: &str) -> Result<()> {
        self.client
            .update_variable(&self.owner, &self.repo, name, value)
            .await
    }
}
