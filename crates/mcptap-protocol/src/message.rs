//! Inbound protocol messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Well-known method names the middleware treats specially.
pub mod methods {
    /// Tool invocation dispatch.
    pub const TOOLS_CALL: &str = "tools/call";
    /// Session-initialization acknowledgement, excluded from logging.
    pub const NOTIFICATIONS_INITIALIZED: &str = "notifications/initialized";
}

/// One inbound protocol request being dispatched to business logic.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Method name (dotted/slash-separated).
    pub method: String,
    /// Request parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Message {
    /// Creates a message with the given method and parameters.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Returns true if this message is a tool invocation.
    #[must_use]
    pub fn is_tool_call(&self) -> bool {
        self.method == methods::TOOLS_CALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_serialization_skips_absent_params() {
        let msg = Message::new("tools/list", None);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"method\":\"tools/list\""));
        assert!(!json.contains("params"));
    }

    #[test]
    fn test_message_roundtrip_with_params() {
        let msg = Message::new("tools/call", Some(json!({"name": "echo"})));
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_is_tool_call() {
        assert!(Message::new(methods::TOOLS_CALL, None).is_tool_call());
        assert!(!Message::new("resources/read", None).is_tool_call());
    }
}
