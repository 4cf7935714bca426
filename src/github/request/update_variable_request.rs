use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateVariableRequest {
    pub value: String,
}

impl UpdateVariableRequest {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
