mod update_variable_request;

pub use update_variable_request::UpdateVariableRequest;

use anyhow::Result;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String>
    where
        Self: Serialize + Sized,
    {
        let body = serde_json::to_string(&self)?;

        Ok(body)
    }
}

impl SerializeRequest for UpdateVariableRequest {}
