//! Error types for the Navigable AI client SDK.

use thiserror::Error;

/// Errors produced by the Navigable AI client.
#[derive(Debug, Error)]
pub enum NavError {
    /// Invalid client configuration (missing or blank API key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A shared secret key is configured but the call carried no signature.
    #[error("signature required: a shared secret key is configured for this client")]
    SignatureRequired,

    /// The supplied signature did not match the expected HMAC digest.
    #[error("invalid signature")]
    SignatureInvalid,

    /// Transport error (connection, TLS, HTTP I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An action handler returned an error during dispatch.
    #[error("action handler '{action}' failed: {source}")]
    Handler {
        action: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias for Navigable AI operations.
pub type NavResult<T> = Result<T, NavError>;
