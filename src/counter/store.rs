use super::{document_store::DocumentStore, variable_store::VariableStore};
use crate::github::response::PullRequest;
use anyhow::Result;

/// Named counter persisted outside the run, kept as text.
pub trait CounterStore {
    /// `None` when the counter has not been initialized yet.
    async fn get(&self, name: &str) -> Result<Option<String>>;

    async fn set(&self, name: &str, value: &str) -> Result<()>;
}

pub trait PullRequestSource {
    async fn associated_with_commit(&self, commit_sha: &str) -> Result<Vec<PullRequest>>;
}

pub enum Store {
    Variable(VariableStore),
    Document(DocumentStore),
}

impl CounterStore for Store {
    async fn get(&self, name: &str) -> Result<Option<String>> {
        match self {
            Store::Variable(store) => store.get(name).await,
            Store::Document(store) => store.get(name).await,
        }
    }

    async fn set(&self, name: &str, value: &str) -> Result<()> {
        match self {
            Store::Variable(store) => store.set(name, value).await,
            Store::Document(store) => store.set(name, value).await,
        }
    }
}
