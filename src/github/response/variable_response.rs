use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
    #[serde(default)]
    pub value: String,
}
