//! Client configuration.

use std::time::Duration;

use navai_core::{DispatchPolicy, NavError, NavResult, DEFAULT_TIMEOUT, HOSTNAME};

/// Configuration for a [`NavigableAi`](crate::NavigableAi) client instance.
///
/// Immutable once the client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: String,
    shared_secret_key: Option<String>,
    base_url: String,
    timeout: Duration,
    dispatch_policy: DispatchPolicy,
}

impl ClientConfig {
    /// Create a config for the given model API key.
    ///
    /// Fails when the key is empty or all-whitespace.
    pub fn new(api_key: impl Into<String>) -> NavResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(NavError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            shared_secret_key: None,
            base_url: format!("https://{HOSTNAME}"),
            timeout: DEFAULT_TIMEOUT,
            dispatch_policy: DispatchPolicy::default(),
        })
    }

    /// Enable request signing. Every subsequent call must carry a signature
    /// over its canonical payload.
    pub fn with_shared_secret_key(mut self, secret: impl Into<String>) -> Self {
        self.shared_secret_key = Some(secret.into());
        self
    }

    /// Override the API base URL. Intended for tests and self-hosted proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how action-handler failures are treated.
    pub fn with_dispatch_policy(mut self, policy: DispatchPolicy) -> Self {
        self.dispatch_policy = policy;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn shared_secret_key(&self) -> Option<&str> {
        self.shared_secret_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn dispatch_policy(&self) -> DispatchPolicy {
        self.dispatch_policy
    }
}
