//! Resolves the force-update build count for a commit.
//!
//! The count is read from a [`CounterStore`], bumped by one when a pull
//! request associated with the commit carries the configured label, and
//! written back before it is reported. Failures never escape [`run`]: each
//! [`Error`] kind maps to the value reported in its place.

mod count;
mod document_store;
mod error;
mod filter;
mod store;
mod variable_store;

pub use count::{BuildCount, Count};
pub use document_store::{DocumentStore, DOCUMENT_COUNT_FIELD};
pub use error::Error;
pub use store::{CounterStore, PullRequestSource, Store};
pub use variable_store::{RepositoryPullRequests, VariableStore};

use crate::{
    action,
    config::{Config, CountSource},
};
use itertools::Itertools;

#[derive(Debug, Clone)]
pub struct Settings {
    pub counter_name: String,
    pub commit_sha: String,
    pub label: String,
    pub require_merged: bool,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        let counter_name = match &config.source {
            CountSource::Variable { name } => name.to_owned(),
            CountSource::Document { .. } => DOCUMENT_COUNT_FIELD.to_owned(),
        };

        Settings {
            counter_name,
            commit_sha: config.commit_sha.to_owned(),
            label: config.label.to_owned(),
            require_merged: !config.skip_merged_pr_check,
        }
    }
}

pub async fn run<S, P>(store: &S, pulls: &P, settings: &Settings) -> BuildCount
where
    S: CounterStore,
    P: PullRequestSource,
{
    match resolve(store, pulls, settings).await {
        Ok(count) => count,
        Err(err) => report(err),
    }
}

/// Logs `err` and returns the value to emit in its place.
pub fn report(err: Error) -> BuildCount {
    let fallback = err.fallback();
    action::error(format!("{:#}", anyhow::Error::from(err)));
    fallback
}

async fn resolve<S, P>(store: &S, pulls: &P, settings: &Settings) -> Result<BuildCount, Error>
where
    S: CounterStore,
    P: PullRequestSource,
{
    let name = &settings.counter_name;

    let stored = store
        .get(name)
        .await
        .map_err(|cause| Error::CountSource { cause })?;

    let current = match stored {
        Some(value) => value
            .parse::<Count>()
            .map_err(|cause| Error::InvalidCount { cause })?,
        None => {
            log::info!("Counter {} is not initialized, reporting 0", name);
            return Ok(BuildCount::Known(Count::default()));
        }
    };
    log::debug!("Force update build count: {} (from {})", current, name);

    let pull_requests = pulls
        .associated_with_commit(&settings.commit_sha)
        .await
        .map_err(|cause| Error::PullRequestLookup { current, cause })?;
    log::debug!(
        "Found {} pull requests associated with the commit",
        pull_requests.len()
    );

    let matching = filter::eligible(&pull_requests, &settings.label, settings.require_merged);
    if matching.is_empty() {
        log::info!(
            "No pull request labeled {} for commit {}, keeping {}",
            settings.label,
            settings.commit_sha,
            current
        );
        return Ok(current.into());
    }

    log::info!(
        "Pull requests labeled {}: {}",
        settings.label,
        matching.iter().map(|pr| format!("#{}", pr.number)).join(", ")
    );

    let next = current.increment().ok_or(Error::Overflow { current })?;
    store
        .set(name, &next.to_string())
        .await
        .map_err(|cause| Error::Persist {
            current,
            attempted: next,
            cause,
        })?;
    log::info!("Force update build count bumped from {} to {}", current, next);

    Ok(next.into())
}
