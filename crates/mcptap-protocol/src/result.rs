//! Call results and their payloads.
//!
//! A dispatched message resolves to a [`CallResult`]: either a success
//! carrying a payload, or an error-flagged [`ErrorInfo`]. The error-flagged
//! variant is deliberately distinct from the dispatcher's own failure
//! channel (a `Result::Err` from `next`), which the middleware propagates
//! without ever inspecting.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Content items in tool output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
    /// Image content.
    Image {
        /// Base64-encoded image data.
        data: String,
        /// MIME type (e.g., "image/png").
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
}

impl ContentItem {
    /// Creates a text content item.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Returns the text if this is a text item.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Image { .. } => None,
        }
    }
}

/// Output of a tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolPayload {
    /// Content items produced by the tool, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentItem>>,
}

impl ToolPayload {
    /// Creates a payload with no content.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a payload with a single text item.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Some(vec![ContentItem::text(text)]),
        }
    }

    /// Returns the first content item's text, if the list is non-empty and
    /// the first item is a text item.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.as_ref()?.first()?.as_text()
    }
}

/// Error details carried by an error-flagged result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error code.
    pub code: i32,
    /// Error message.
    pub message: String,
    /// Additional error data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorInfo {
    /// Creates an error with the given code and message.
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attaches additional data to the error.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

/// Payload of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Typed tool output.
    Tool(ToolPayload),
    /// Any other result value.
    Generic(Value),
}

impl Payload {
    /// Returns the first content item's text for tool payloads.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Self::Tool(payload) => payload.first_text(),
            Self::Generic(_) => None,
        }
    }
}

/// Result of dispatching a message downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    /// The call succeeded with a payload.
    Success(Payload),
    /// The call completed but is flagged as an error.
    Failure(ErrorInfo),
}

impl CallResult {
    /// Creates a success carrying tool output.
    #[must_use]
    pub fn tool(payload: ToolPayload) -> Self {
        Self::Success(Payload::Tool(payload))
    }

    /// Creates a success carrying an arbitrary value.
    #[must_use]
    pub fn generic(value: Value) -> Self {
        Self::Success(Payload::Generic(value))
    }

    /// Creates an error-flagged result.
    #[must_use]
    pub fn failure(info: ErrorInfo) -> Self {
        Self::Failure(info)
    }

    /// Returns true if this result is error-flagged.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_item_tagging() {
        let item = ContentItem::text("hello");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"text\""));
        assert!(json.contains("\"text\":\"hello\""));
    }

    #[test]
    fn test_image_mime_type_rename() {
        let item = ContentItem::Image {
            data: "AAAA".to_owned(),
            mime_type: "image/png".to_owned(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"mimeType\":\"image/png\""));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(ContentItem::text("x").as_text(), Some("x"));
        let image = ContentItem::Image {
            data: String::new(),
            mime_type: "image/png".to_owned(),
        };
        assert_eq!(image.as_text(), None);
    }

    #[test]
    fn test_first_text_present() {
        let payload = ToolPayload::text("Hello, World!");
        assert_eq!(payload.first_text(), Some("Hello, World!"));
    }

    #[test]
    fn test_first_text_absent_content() {
        assert_eq!(ToolPayload::empty().first_text(), None);
    }

    #[test]
    fn test_first_text_empty_list() {
        let payload = ToolPayload {
            content: Some(Vec::new()),
        };
        assert_eq!(payload.first_text(), None);
    }

    #[test]
    fn test_first_text_non_text_first_item() {
        let payload = ToolPayload {
            content: Some(vec![ContentItem::Image {
                data: String::new(),
                mime_type: "image/png".to_owned(),
            }]),
        };
        assert_eq!(payload.first_text(), None);
    }

    #[test]
    fn test_generic_payload_has_no_text() {
        let result = CallResult::generic(json!({"tools": []}));
        match result {
            CallResult::Success(payload) => assert_eq!(payload.first_text(), None),
            CallResult::Failure(_) => panic!("expected success"),
        }
    }

    #[test]
    fn test_error_info_display() {
        let info = ErrorInfo::new(-32001, "boom");
        assert_eq!(info.to_string(), "Error -32001: boom");
    }

    #[test]
    fn test_error_info_with_data() {
        let info = ErrorInfo::new(-32000, "oops").with_data(json!({"detail": "x"}));
        assert!(info.data.is_some());
    }

    #[test]
    fn test_is_failure() {
        assert!(CallResult::failure(ErrorInfo::new(1, "e")).is_failure());
        assert!(!CallResult::tool(ToolPayload::empty()).is_failure());
    }
}
