//! Hot Update Message Protocol
//!
//! Defines the JSON message format sent over the development session's live
//! connection to browser clients.
//!
//! # Message Types
//!
//! - `custom`: named-channel update; style pushes use
//!   `vanilla-extract-style-update:<virtual-id>` with the CSS as payload
//! - `connected`: handshake greeting
//! - `full-reload`: fallback full page reload

use serde::{Deserialize, Serialize};

/// Hot update message sent to connected clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HotUpdateMessage {
    /// Update on a named event channel
    Custom {
        /// Channel name (e.g. `vanilla-extract-style-update:src/a.css`)
        event: String,
        /// Payload; for style updates, the new CSS text
        data: String,
    },

    /// Connection established
    Connected {
        /// Server version for compatibility check
        version: String,
    },

    /// Full page reload (fallback, e.g. a style file was deleted)
    #[serde(rename = "full-reload")]
    FullReload {
        /// Optional reason for reload
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl HotUpdateMessage {
    /// Create a style update message for a module's channel
    pub fn style_update(event: impl Into<String>, css: impl Into<String>) -> Self {
        Self::Custom {
            event: event.into(),
            data: css.into(),
        }
    }

    /// Create a connected message
    pub fn connected() -> Self {
        Self::Connected {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Create a full reload message with reason
    pub fn full_reload(reason: impl Into<String>) -> Self {
        Self::FullReload {
            reason: Some(reason.into()),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"type":"full-reload"}"#.to_string())
    }

    /// Parse from JSON string
    pub fn from_json(s: &str) -> Option<Self> {
        serde_json::from_str(s).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_message_wire_shape() {
        let msg = HotUpdateMessage::style_update(
            "vanilla-extract-style-update:a.css",
            ".x{color:blue}",
        );
        let json = msg.to_json();
        assert!(json.contains(r#""type":"custom""#));
        assert!(json.contains(r#""event":"vanilla-extract-style-update:a.css""#));
        assert!(json.contains(r#""data":".x{color:blue}""#));
    }

    #[test]
    fn test_roundtrip() {
        let msg = HotUpdateMessage::style_update("vanilla-extract-style-update:b.css", ".y{}");
        let parsed = HotUpdateMessage::from_json(&msg.to_json()).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_full_reload_message() {
        let msg = HotUpdateMessage::full_reload("style file removed");
        let json = msg.to_json();
        assert!(json.contains(r#""type":"full-reload""#));
        assert!(json.contains(r#""reason":"style file removed""#));
    }
}
