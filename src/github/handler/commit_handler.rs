use crate::github::{response::PullRequest, GithubClient};
use anyhow::Result;

pub struct CommitHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    sha: String,
}

impl<'a> CommitHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        sha: impl Into<String>,
    ) -> Self {
        CommitHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            sha: sha.into(),
        }
    }

    pub async fn pull_requests(&self) -> Result<Vec<PullRequest>> {
        self.client
            .list_pull_requests_for_commit(&self.owner, &self.repo, &self.sha)
            .await
    }
}
