use super::{
    handler::repository_handler::RepositoryHandler,
    request::{SerializeRequest, UpdateVariableRequest},
    response::{PullRequest, Variable},
};
use crate::{get, http, http::HttpClient, patch};
use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Clone)]
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Appends `segments` to the API base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .with_context(|| format!("Invalid API url {}", self.api_url))?;

        url.path_segments_mut()
            .map_err(|_| anyhow!("API url {} cannot be a base", self.api_url))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub(super) async fn list_pull_requests_for_commit(
        &self,
        owner: &str,
        repo: &str,
        commit_sha: &str,
    ) -> Result<Vec<PullRequest>> {
        let uri = self.endpoint(&["repos", owner, repo, "commits", commit_sha, "pulls"])?;

        log::debug!("Fetching pull requests for commit {}", commit_sha);
        let response = get!(self, uri).context("Cannot list pull requests for the commit")?;

        let pull_requests = http::parse::<Vec<PullRequest>>(&response)?;

        Ok(pull_requests)
    }

    /// `None` when the variable does not exist.
    pub(super) async fn get_variable(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Option<Variable>> {
        let uri = self.endpoint(&["repos", owner, repo, "actions", "variables", name])?;

        match get!(self, uri) {
            Ok(response) => {
                let variable = http::parse::<Variable>(&response)?;
                Ok(Some(variable))
            }
            Err(err) if err.is_not_found() => {
                log::warn!(
                    "Repository variable {} not found in {}/{}, treating it as uninitialized \
                     (a token without access to the repository also gets a 404)",
                    name,
                    owner,
                    repo
                );
                Ok(None)
            }
            Err(err) => Err(err).context(format!("Cannot read repository variable {}", name)),
        }
    }

    pub(super) async fn update_variable(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        value: &str,
    ) -> Result<()> {
        let uri = self.endpoint(&["repos", owner, repo, "actions", "variables", name])?;

        let body = UpdateVariableRequest::new(value).into_request()?;

        log::debug!("Updating repository variable {} to {}", name, value);
        patch!(self, uri, body)
            .with_context(|| format!("Cannot update repository variable {}", name))?;

        Ok(())
    }
}

impl fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_url", &self.api_url)
            .field("token", &"***")
            .finish()
    }
}
