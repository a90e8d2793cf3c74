//! Message and call-result types for mcptap.
//!
//! This crate provides the value types the traffic middleware operates on:
//! - [`Message`]: one inbound request (method name + parameters)
//! - [`CallResult`]: the dispatcher's answer, success or error-flagged
//! - [`ContentItem`] / [`ToolPayload`]: typed tool output
//!
//! The JSON-RPC envelope (ids, protocol version) stays with the transport;
//! these types carry only what the middleware needs to classify and render
//! a message.

#![forbid(unsafe_code)]

mod message;
mod result;

pub use message::{Message, methods};
pub use result::{CallResult, ContentItem, ErrorInfo, Payload, ToolPayload};
