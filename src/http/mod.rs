use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Unexpected response status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::GenericResponseError { status, .. } if *status == StatusCode::NOT_FOUND.as_u16()
        )
    }
}

/// Turns the outcome of `RequestBuilder::send` into the response body text.
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Err(Error::GenericResponseError {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(text)
    }
}

pub fn parse<T>(text: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(|cause| Error::ParseResponseError { cause })
}
