use super::store::CounterStore;
use crate::http::{self, HttpClient, ResponseHandler};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use serde_json::Value;

/// Field holding the count in the version document.
pub const DOCUMENT_COUNT_FIELD: &str = "forceUpdateBuildCount";

static DOCUMENT_HEADERS: Lazy<HeaderMap> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(
        REFERER,
        HeaderValue::from_static("https://app.carepatron.com/"),
    );
    headers
});

/// Counter read from a JSON document this action does not own.
pub struct DocumentStore {
    http: HttpClient,
    url: String,
}

impl DocumentStore {
    pub fn new(url: impl Into<String>) -> Self {
        DocumentStore {
            http: HttpClient::new(),
            url: url.into(),
        }
    }
}

impl CounterStore for DocumentStore {
    async fn get(&self, name: &str) -> Result<Option<String>> {
        log::debug!("Fetching version document {}", self.url);
        let response = self
            .http
            .get(&self.url)
            .headers(DOCUMENT_HEADERS.clone())
            .send()
            .await
            .handle()
            .await
            .with_context(|| format!("Cannot fetch version document {}", self.url))?;

        let document = http::parse::<Value>(&response)?;
        let count = document.get(name).and_then(numeric_count).unwrap_or(0);

        Ok(Some(count.to_string()))
    }

    async fn set(&self, name: &str, value: &str) -> Result<()> {
        log::debug!(
            "{} is read-only, not persisting {}={}",
            self.url,
            name,
            value
        );

        Ok(())
    }
}

fn numeric_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0)
            .map(|n| n as u64)
    })
}
