//! Pass-through client for the third-party APIs relayed by the server.
//!
//! Holds no state besides the HTTP client; nothing here is retried or cached.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::CoreError;

#[derive(Debug, Clone)]
pub struct UpstreamEndpoints {
    pub quote_url: String,
    pub univ_url: String,
    pub countries_url: String,
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    endpoints: UpstreamEndpoints,
}

impl UpstreamClient {
    /// Build the client; `timeout` of `None` keeps reqwest's default (no timeout).
    pub fn new(endpoints: UpstreamEndpoints, timeout: Option<Duration>) -> Result<Self, CoreError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build().map_err(|e| CoreError::Network(e.to_string()))?;
        Ok(Self { http, endpoints })
    }

    async fn fetch_text(&self, url: &str) -> Result<String, CoreError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CoreError::Network(e.to_string()))?;
        resp.text().await.map_err(|e| CoreError::Network(e.to_string()))
    }

    /// Random quote, relayed as parsed JSON.
    pub async fn quote(&self) -> Result<Value, CoreError> {
        let body = self.fetch_text(&self.endpoints.quote_url).await?;
        let root: Value = serde_json::from_str(&body).map_err(|e| CoreError::Parse(e.to_string()))?;
        let author = root.get("author").and_then(Value::as_str).unwrap_or_default();
        let content = root.get("content").and_then(Value::as_str).unwrap_or_default();
        info!(%author, %content, "quote received");
        Ok(root)
    }

    /// University search results, relayed as parsed JSON.
    pub async fn universities(&self) -> Result<Value, CoreError> {
        let body = self.fetch_text(&self.endpoints.univ_url).await?;
        let root: Value = serde_json::from_str(&body).map_err(|e| CoreError::Parse(e.to_string()))?;
        if let Some(items) = root.as_array() {
            for item in items {
                let name = item.get("name").and_then(Value::as_str).unwrap_or_default();
                let country = item.get("country").and_then(Value::as_str).unwrap_or_default();
                debug!("{}: {}", name, country);
            }
        }
        Ok(root)
    }

    /// The countries upstream is not a JSON API; its raw body is wrapped in a one-element array.
    pub async fn countries(&self) -> Result<Vec<Value>, CoreError> {
        let body = self.fetch_text(&self.endpoints.countries_url).await?;
        Ok(vec![Value::String(body)])
    }
}
