//! # navai-core
//!
//! Core library for the Navigable AI client SDK.
//!
//! This crate provides the wire types, endpoint table, signature
//! verification primitives, action-handler registry, and error taxonomy
//! shared by Navigable AI client implementations.

pub mod action;
pub mod chat;
pub mod endpoint;
pub mod error;
pub mod security;

pub use action::{ActionHandler, ActionRegistry, DispatchPolicy};
pub use chat::{
    ApiResponse, ChatMessage, ChatSession, SendMessageData, SendMessageOptions, Sender, ToolCall,
};
pub use endpoint::{Endpoint, EndpointParams, RequestMethod, API_KEY_HEADER, DEFAULT_TIMEOUT, HOSTNAME};
pub use error::{NavError, NavResult};
pub use security::{sign_payload, verify_signature};
