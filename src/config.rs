use crate::{action::Inputs, github::DEFAULT_API_URL};
use anyhow::{anyhow, bail, Result};
use std::fmt;

pub const OUTPUT_NAME: &str = "force_update_build_count";

const DEFAULT_VERSION_URL: &str = "https://app.carepatron.com/version.json";

/// Where the current build count lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountSource {
    /// Repository variable, read and written back through the API.
    Variable { name: String },
    /// Read-only JSON document served over HTTP.
    Document { url: String },
}

#[derive(Clone)]
pub struct Config {
    pub commit_sha: String,
    pub owner: String,
    pub repo: String,
    pub label: String,
    pub token: String,
    pub source: CountSource,
    pub skip_merged_pr_check: bool,
    pub api_url: String,
}

impl Config {
    pub fn load(inputs: &Inputs) -> Result<Config> {
        let (owner, repo) = owner_and_repo(inputs)?;

        let commit_sha = required(
            inputs.input("commit_sha").or_else(|| inputs.env("GITHUB_SHA")),
            "commit_sha",
        )?;

        let token = required(
            inputs
                .input("personal_access_token")
                .or_else(|| inputs.input("github_token"))
                .or_else(|| inputs.env("GITHUB_TOKEN")),
            "personal_access_token",
        )?;

        let config = Config {
            commit_sha,
            owner,
            repo,
            label: required(inputs.input("label"), "label")?,
            token,
            source: count_source(inputs)?,
            skip_merged_pr_check: inputs.boolean_input("skip_merged_pr_check"),
            api_url: inputs
                .env("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        };

        config.log();

        Ok(config)
    }

    fn log(&self) {
        log::debug!("Commit SHA: {}", self.commit_sha);
        log::debug!("Owner: {}", self.owner);
        log::debug!("Repo: {}", self.repo);
        log::debug!("Label: {}", self.label);
        match &self.source {
            CountSource::Variable { name } => {
                log::debug!("Force Update Build Count Name: {}", name)
            }
            CountSource::Document { url } => log::debug!("Version document: {}", url),
        }
        log::debug!("Skip merged PR check: {}", self.skip_merged_pr_check);
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("commit_sha", &self.commit_sha)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("label", &self.label)
            .field("token", &"***")
            .field("source", &self.source)
            .field("skip_merged_pr_check", &self.skip_merged_pr_check)
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    value.ok_or_else(|| anyhow!("Input required and not supplied: {}", name))
}

fn owner_and_repo(inputs: &Inputs) -> Result<(String, String)> {
    let (fallback_owner, fallback_repo) = inputs
        .env("GITHUB_REPOSITORY")
        .and_then(|repository| {
            repository
                .split_once('/')
                .map(|(owner, repo)| (owner.to_owned(), repo.to_owned()))
        })
        .unzip();

    let owner = required(inputs.input("owner").or(fallback_owner), "owner")?;
    let repo = required(inputs.input("repo").or(fallback_repo), "repo")?;

    Ok((owner, repo))
}

fn count_source(inputs: &Inputs) -> Result<CountSource> {
    let kind = inputs
        .input("count_source")
        .map(|kind| kind.to_ascii_lowercase());

    match kind.as_deref() {
        None | Some("variable") => Ok(CountSource::Variable {
            name: required(
                inputs.input("force_update_build_count_name"),
                "force_update_build_count_name",
            )?,
        }),
        Some("document") => Ok(CountSource::Document {
            url: inputs
                .input("version_url")
                .unwrap_or_else(|| DEFAULT_VERSION_URL.to_owned()),
        }),
        Some(other) => bail!("Unsupported count_source: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(extra: &[(&str, &str)]) -> Inputs {
        let mut vars = vec![
            ("INPUT_COMMIT_SHA", "abc123"),
            ("INPUT_PERSONAL_ACCESS_TOKEN", "token123"),
            ("INPUT_OWNER", "carepatron"),
            ("INPUT_REPO", "test-repo"),
            ("INPUT_LABEL", "force-update"),
            ("INPUT_FORCE_UPDATE_BUILD_COUNT_NAME", "FORCE_UPDATE_BUILD_COUNT"),
        ];
        vars.extend_from_slice(extra);
        vars.into_iter().collect()
    }

    #[test]
    fn should_load_a_variable_backed_config() {
        let config = Config::load(&inputs(&[])).unwrap();

        assert_eq!(config.commit_sha, "abc123");
        assert_eq!(config.owner, "carepatron");
        assert_eq!(config.repo, "test-repo");
        assert_eq!(config.label, "force-update");
        assert_eq!(config.token, "token123");
        assert_eq!(
            config.source,
            CountSource::Variable {
                name: "FORCE_UPDATE_BUILD_COUNT".to_owned()
            }
        );
        assert!(!config.skip_merged_pr_check);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn should_load_a_document_backed_config() {
        let config = Config::load(&inputs(&[("INPUT_COUNT_SOURCE", "Document")])).unwrap();

        assert_eq!(
            config.source,
            CountSource::Document {
                url: DEFAULT_VERSION_URL.to_owned()
            }
        );
    }

    #[test]
    fn should_override_the_version_url() {
        let config = Config::load(&inputs(&[
            ("INPUT_COUNT_SOURCE", "document"),
            ("INPUT_VERSION_URL", "http://localhost/version.json"),
        ]))
        .unwrap();

        assert_eq!(
            config.source,
            CountSource::Document {
                url: "http://localhost/version.json".to_owned()
            }
        );
    }

    #[test]
    fn should_not_require_a_counter_name_for_documents() {
        let vars: Inputs = [
            ("INPUT_COMMIT_SHA", "abc123"),
            ("INPUT_GITHUB_TOKEN", "token123"),
            ("INPUT_OWNER", "carepatron"),
            ("INPUT_REPO", "test-repo"),
            ("INPUT_LABEL", "force-update"),
            ("INPUT_COUNT_SOURCE", "document"),
        ]
        .into_iter()
        .collect();

        assert!(Config::load(&vars).is_ok());
    }

    #[test]
    fn should_reject_an_unknown_count_source() {
        let err = Config::load(&inputs(&[("INPUT_COUNT_SOURCE", "redis")])).unwrap_err();

        assert_eq!(err.to_string(), "Unsupported count_source: redis");
    }

    #[test]
    fn should_fail_when_the_label_is_missing() {
        let vars: Inputs = [
            ("INPUT_COMMIT_SHA", "abc123"),
            ("INPUT_PERSONAL_ACCESS_TOKEN", "token123"),
            ("INPUT_OWNER", "carepatron"),
            ("INPUT_REPO", "test-repo"),
            ("INPUT_FORCE_UPDATE_BUILD_COUNT_NAME", "FORCE_UPDATE_BUILD_COUNT"),
        ]
        .into_iter()
        .collect();

        let err = Config::load(&vars).unwrap_err();

        assert_eq!(err.to_string(), "Input required and not supplied: label");
    }

    #[test]
    fn should_fail_when_the_counter_name_is_missing() {
        let vars: Inputs = [
            ("INPUT_COMMIT_SHA", "abc123"),
            ("INPUT_PERSONAL_ACCESS_TOKEN", "token123"),
            ("INPUT_OWNER", "carepatron"),
            ("INPUT_REPO", "test-repo"),
            ("INPUT_LABEL", "force-update"),
        ]
        .into_iter()
        .collect();

        assert!(Config::load(&vars).is_err());
    }

    #[test]
    fn should_fall_back_to_runner_variables() {
        let vars: Inputs = [
            ("GITHUB_SHA", "def456"),
            ("GITHUB_REPOSITORY", "carepatron/app"),
            ("GITHUB_TOKEN", "runner-token"),
            ("GITHUB_API_URL", "https://github.example.com/api/v3"),
            ("INPUT_LABEL", "force-update"),
            ("INPUT_FORCE_UPDATE_BUILD_COUNT_NAME", "FORCE_UPDATE_BUILD_COUNT"),
        ]
        .into_iter()
        .collect();

        let config = Config::load(&vars).unwrap();

        assert_eq!(config.commit_sha, "def456");
        assert_eq!(config.owner, "carepatron");
        assert_eq!(config.repo, "app");
        assert_eq!(config.token, "runner-token");
        assert_eq!(config.api_url, "https://github.example.com/api/v3");
    }

    #[test]
    fn should_prefer_explicit_inputs_over_runner_variables() {
        let config = Config::load(&inputs(&[
            ("GITHUB_SHA", "def456"),
            ("GITHUB_REPOSITORY", "someone/else"),
            ("INPUT_GITHUB_TOKEN", "workflow-token"),
        ]))
        .unwrap();

        assert_eq!(config.commit_sha, "abc123");
        assert_eq!(config.owner, "carepatron");
        assert_eq!(config.repo, "test-repo");
        assert_eq!(config.token, "token123");
    }

    #[test]
    fn should_parse_the_skip_merged_pr_check_flag() {
        let config = Config::load(&inputs(&[("INPUT_SKIP_MERGED_PR_CHECK", "TRUE")])).unwrap();

        assert!(config.skip_merged_pr_check);
    }

    #[test]
    fn should_hide_the_token_in_debug_output() {
        let config = Config::load(&inputs(&[])).unwrap();

        assert!(!format!("{:?}", config).contains("token123"));
    }
}
