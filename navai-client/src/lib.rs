//! Navigable AI client SDK.
//!
//! # Example
//!
//! ```no_run
//! use navai_client::{ClientConfig, NavigableAi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NavigableAi::new("my-api-key")?;
//!
//!     client.register_action_handler("redirect", |action, identifier| {
//!         println!("assistant suggested {action} for {identifier}");
//!         Ok(())
//!     });
//!
//!     let res = client
//!         .send_message("How do I upgrade my plan?", Default::default())
//!         .await?;
//!     println!("{}", res.data.assistant_message);
//!
//!     Ok(())
//! }
//! ```

mod config;
mod transport;

pub use config::ClientConfig;
pub use transport::{HttpTransport, Transport};

pub use navai_core::{
    ActionRegistry, ApiResponse, ChatMessage, ChatSession, DispatchPolicy, NavError, NavResult,
    SendMessageData, SendMessageOptions, Sender, ToolCall,
};

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;

use navai_core::{verify_signature, Endpoint, API_KEY_HEADER};

/// Client for a single Navigable AI model.
///
/// Operations sharing one shape: an optional signature gate, one HTTP round
/// trip, and (for [`send_message`](Self::send_message)) action-handler
/// dispatch on the response.
pub struct NavigableAi {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    actions: RwLock<ActionRegistry>,
}

impl NavigableAi {
    /// Create a client for the given model API key, using the default HTTP
    /// transport against the Navigable AI API.
    pub fn new(api_key: impl Into<String>) -> NavResult<Self> {
        Self::from_config(ClientConfig::new(api_key)?)
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> NavResult<Self> {
        let transport = HttpTransport::new(config.base_url(), config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with a custom transport. Primarily a seam for tests.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            actions: RwLock::new(ActionRegistry::new()),
        }
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Register an action handler.
    ///
    /// The handler runs when the assistant responds with the named action.
    /// Registering again under the same name replaces the handler.
    pub fn register_action_handler<F>(&self, action_name: impl Into<String>, handler: F)
    where
        F: Fn(&str, &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
            + Send
            + Sync
            + 'static,
    {
        self.registry_write().register(action_name, handler);
    }

    /// Send a message to the assistant.
    ///
    /// When the client is configured with a shared secret key,
    /// `options.signature` must carry the HMAC signature over `message`.
    /// On a 200 response carrying an action, the registered handler is
    /// dispatched with `(action, identifier)` unless
    /// `options.omit_action_handler` is set.
    pub async fn send_message(
        &self,
        message: &str,
        options: SendMessageOptions,
    ) -> NavResult<ApiResponse<SendMessageData>> {
        let res = self.send_message_inner(message, options).await;
        if let Err(err) = &res {
            tracing::error!(user_message = message, error = %err, "send_message failed");
        }
        res
    }

    async fn send_message_inner(
        &self,
        message: &str,
        options: SendMessageOptions,
    ) -> NavResult<ApiResponse<SendMessageData>> {
        self.check_signature(message, options.signature.as_deref())?;

        let mut body = serde_json::to_value(&options)?;
        if let serde_json::Value::Object(map) = &mut body {
            map.insert("message".to_string(), message.into());
        }

        let params = Endpoint::SendMessage.params();
        let (status, raw) = self
            .transport
            .request(
                params.method,
                params.path,
                &[],
                &[(API_KEY_HEADER, self.config.api_key())],
                Some(&body),
            )
            .await?;
        let res: ApiResponse<SendMessageData> = parse_response(status, raw)?;

        if res.status_code == 200 && !options.omit_action_handler {
            if let Some(action) = res.data.action.clone() {
                self.dispatch_action(&action, &res.data.identifier)?;
            }
        }

        Ok(res)
    }

    /// Get the last messages in the user's latest conversation.
    ///
    /// When the client is configured with a shared secret key, `signature`
    /// must carry the HMAC signature over `identifier`.
    pub async fn get_messages(
        &self,
        identifier: &str,
        signature: Option<&str>,
    ) -> NavResult<ApiResponse<Vec<ChatMessage>>> {
        let res = self
            .get_endpoint(Endpoint::GetMessages, None, identifier, signature)
            .await;
        if let Err(err) = &res {
            tracing::error!(identifier, error = %err, "get_messages failed");
        }
        res
    }

    /// List the user's chat sessions.
    pub async fn list_chat_sessions(
        &self,
        identifier: &str,
        signature: Option<&str>,
    ) -> NavResult<ApiResponse<Vec<ChatSession>>> {
        let res = self
            .get_endpoint(Endpoint::GetChatSessions, None, identifier, signature)
            .await;
        if let Err(err) = &res {
            tracing::error!(identifier, error = %err, "list_chat_sessions failed");
        }
        res
    }

    /// Get the messages of one chat session.
    pub async fn get_messages_by_session_id(
        &self,
        session_id: &str,
        identifier: &str,
        signature: Option<&str>,
    ) -> NavResult<ApiResponse<Vec<ChatMessage>>> {
        let res = self
            .get_endpoint(
                Endpoint::GetSessionMessages,
                Some(session_id),
                identifier,
                signature,
            )
            .await;
        if let Err(err) = &res {
            tracing::error!(session_id, identifier, error = %err, "get_messages_by_session_id failed");
        }
        res
    }

    /// Shared shape of the read operations: signature gate over the
    /// identifier, then one GET with `?identifier=`.
    async fn get_endpoint<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        session_id: Option<&str>,
        identifier: &str,
        signature: Option<&str>,
    ) -> NavResult<ApiResponse<T>> {
        self.check_signature(identifier, signature)?;

        let params = endpoint.params();
        let path = match session_id {
            Some(session_id) => format!("{}{}", params.path, session_id),
            None => params.path.to_string(),
        };

        let (status, raw) = self
            .transport
            .request(
                params.method,
                &path,
                &[("identifier", identifier)],
                &[(API_KEY_HEADER, self.config.api_key())],
                None,
            )
            .await?;
        parse_response(status, raw)
    }

    /// Signature gate. A client without a shared secret key passes
    /// unconditionally; one with a secret requires a matching signature
    /// before any transport call is made.
    fn check_signature(&self, payload: &str, signature: Option<&str>) -> NavResult<()> {
        let Some(secret) = self.config.shared_secret_key() else {
            return Ok(());
        };
        let Some(signature) = signature else {
            return Err(NavError::SignatureRequired);
        };
        if verify_signature(payload, signature, Some(secret)) {
            Ok(())
        } else {
            Err(NavError::SignatureInvalid)
        }
    }

    fn dispatch_action(&self, action: &str, identifier: &str) -> NavResult<()> {
        let dispatched = self.registry_read().dispatch(action, identifier);
        match dispatched {
            Ok(ran) => {
                tracing::debug!(action, identifier, ran, "action dispatch");
                Ok(())
            }
            Err(err) => match self.config.dispatch_policy() {
                DispatchPolicy::Propagate => Err(err),
                DispatchPolicy::CatchAndLog => {
                    tracing::warn!(action, identifier, error = %err, "action handler failed");
                    Ok(())
                }
            },
        }
    }

    fn registry_read(&self) -> std::sync::RwLockReadGuard<'_, ActionRegistry> {
        // A panicking handler must not wedge the registry for later calls.
        self.actions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn registry_write(&self) -> std::sync::RwLockWriteGuard<'_, ActionRegistry> {
        self.actions.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Inject the HTTP status into the parsed body and deserialize the envelope.
/// The injected status overwrites whatever the body claimed.
fn parse_response<T: DeserializeOwned>(
    status: u16,
    mut body: serde_json::Value,
) -> NavResult<ApiResponse<T>> {
    if let serde_json::Value::Object(map) = &mut body {
        map.insert("statusCode".to_string(), status.into());
    }
    Ok(serde_json::from_value(body)?)
}
