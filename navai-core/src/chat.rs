//! Wire types for the Navigable AI chat API.
//!
//! All payloads are camelCase JSON. Response envelopes share one shape:
//! `{statusCode, success, message, errors?, data}`, where `statusCode` is
//! injected by the client from the HTTP status of the round trip.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope common to every API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// HTTP status of the round trip, injected by the client.
    pub status_code: u16,
    pub success: bool,
    pub message: String,
    /// Field-level validation errors, keyed by field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,
    pub data: T,
}

/// Who authored a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sender {
    User,
    Assistant,
}

/// A single message in a conversation's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    /// Whether this message started a new conversation.
    pub new: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Summary of a chat session for a user identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A function call the assistant wants the application to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// Payload of a successful send-message response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageData {
    pub assistant_message: String,
    /// Action the assistant suggests taking, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
}

/// Options for sending a message. All fields default to absent.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageOptions {
    /// Unique id of the user sending the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Start a new conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<bool>,

    /// Ask the assistant to respond in markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<bool>,

    /// The page the user is currently on, as configured for the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<String>,

    /// Action names the application has handlers for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_actions: Option<Vec<String>>,

    /// Function definitions the assistant may call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_functions: Option<Vec<serde_json::Value>>,

    /// Id of the function call this message responds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call_id: Option<String>,

    /// HMAC signature over the message. Required when the client is
    /// configured with a shared secret key. Never sent on the wire.
    #[serde(skip)]
    pub signature: Option<String>,

    /// Skip action-handler dispatch for this call.
    #[serde(skip)]
    pub omit_action_handler: bool,
}
