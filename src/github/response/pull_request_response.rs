use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub merged_at: Option<String>,
}

impl PullRequest {
    /// Exact, case-sensitive match against the label names.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }

    pub fn is_merged(&self) -> bool {
        self.merged_at
            .as_deref()
            .is_some_and(|merged_at| !merged_at.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}
