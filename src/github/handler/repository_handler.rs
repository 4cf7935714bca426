use super::{commit_handler::CommitHandler, variables_handler::VariablesHandler};
use crate::github::GithubClient;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn commit(&self, sha: impl Into<String>) -> CommitHandler<'a> {
        CommitHandler::new(self.client, &self.owner, &self.repo, sha)
    }

    pub fn variables(&self) -> VariablesHandler<'a> {
        VariablesHandler::new(self.client, &self.owner, &self.repo)
    }
}
