//! HTTP transport for the Navigable AI API.

use async_trait::async_trait;

use navai_core::{NavError, NavResult, RequestMethod};

/// Transport collaborator: issues a single HTTP request and returns the
/// response body parsed as JSON, together with the numeric status code.
///
/// The default implementation is [`HttpTransport`]; tests and embedders can
/// substitute their own.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: RequestMethod,
        path: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> NavResult<(u16, serde_json::Value)>;
}

/// reqwest-backed transport against a fixed base URL.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> NavResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NavError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: RequestMethod,
        path: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> NavResult<(u16, serde_json::Value)> {
        let url = format!("{}{}", self.base_url, path);
        let method = match method {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
        };

        let mut req = self.client.request(method, &url);
        if !query.is_empty() {
            req = req.query(query);
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req
            .send()
            .await
            .map_err(|e| NavError::Transport(format!("request to {path} failed: {e}")))?;
        let status = res.status().as_u16();
        let body = res
            .json()
            .await
            .map_err(|e| NavError::Transport(format!("failed to parse response body: {e}")))?;

        Ok((status, body))
    }
}
