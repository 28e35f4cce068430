//! Action-handler registry.
//!
//! The assistant may respond with a named action (for example, a page the
//! user should be redirected to). Applications register a handler per action
//! name; the client dispatches the handler when a send-message response
//! carries that action.

use std::collections::HashMap;

use crate::error::{NavError, NavResult};

/// Handler invoked with `(action_name, identifier)` when the assistant
/// responds with a registered action.
pub type ActionHandler =
    Box<dyn Fn(&str, &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> + Send + Sync>;

/// What the client does when an action handler returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// Surface the handler error to the caller of `send_message`.
    #[default]
    Propagate,
    /// Log the handler error and report the operation as successful.
    CatchAndLog,
}

/// Registry of action handlers, keyed by action name.
///
/// Last registration under a given name wins.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, ActionHandler>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `action_name`, replacing any previous one.
    ///
    /// Empty names are rejected; action names in Navigable AI are non-empty.
    pub fn register<F>(&mut self, action_name: impl Into<String>, handler: F)
    where
        F: Fn(&str, &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
            + Send
            + Sync
            + 'static,
    {
        let action_name = action_name.into();
        if action_name.is_empty() {
            tracing::warn!("ignoring action handler registered under an empty name");
            return;
        }
        self.handlers.insert(action_name, Box::new(handler));
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry has no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke the handler registered under `action_name`, if any.
    ///
    /// Returns `Ok(true)` when a handler ran, `Ok(false)` when nothing is
    /// registered under that name (a no-op, not an error), and
    /// [`NavError::Handler`] when the handler itself failed.
    pub fn dispatch(&self, action_name: &str, identifier: &str) -> NavResult<bool> {
        let Some(handler) = self.handlers.get(action_name) else {
            tracing::debug!(action = action_name, "no handler registered for action");
            return Ok(false);
        };

        handler(action_name, identifier).map_err(|source| NavError::Handler {
            action: action_name.to_string(),
            source,
        })?;
        Ok(true)
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
