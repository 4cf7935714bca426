use super::store::{CounterStore, PullRequestSource};
use crate::github::{response::PullRequest, GithubClient};
use anyhow::Result;

/// Counter kept in a repository variable.
pub struct VariableStore {
    client: GithubClient,
    owner: String,
    repo: String,
}

impl VariableStore {
    pub fn new(client: GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        VariableStore {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl CounterStore for VariableStore {
    async fn get(&self, name: &str) -> Result<Option<String>> {
        let variable = self
            .client
            .repo(&self.owner, &self.repo)
            .variables()
            .get(name)
            .await?;

        Ok(variable
            .map(|variable| variable.value)
            .filter(|value| !value.is_empty()))
    }

    async fn set(&self, name: &str, value: &str) -> Result<()> {
        self.client
            .repo(&self.owner, &self.repo)
            .variables()
            .update(name, value)
            .await
    }
}

pub struct RepositoryPullRequests {
    client: GithubClient,
    owner: String,
    repo: String,
}

impl RepositoryPullRequests {
    pub fn new(client: GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryPullRequests {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl PullRequestSource for RepositoryPullRequests {
    async fn associated_with_commit(&self, commit_sha: &str) -> Result<Vec<PullRequest>> {
        self.client
            .repo(&self.owner, &self.repo)
            .commit(commit_sha)
            .pull_requests()
            .await
    }
}
