//! WebSocket Message Types
//!
//! Messages exchanged between the browser page and its server-side
//! diary session.

use serde::{Deserialize, Serialize};

/// Messages sent from client to server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The description field changed
    Change {
        /// Full current text of the field
        value: String,
    },
    /// The form was submitted
    Submit,
    /// The form was reset
    Reset,
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session established
    Connected {
        /// Unique session identifier
        session_id: String,
    },
    /// Freshly rendered page body
    Render {
        /// Markup for the `#diary-root` element
        html: String,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_deserialize_change() {
        let json = r#"{"type": "change", "value": "dear diary"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Change {
                value: "dear diary".to_string()
            }
        );
    }

    #[test]
    fn test_client_message_deserialize_unit_variants() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "submit"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Submit);

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "reset"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Reset);

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "ping"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Ping);
    }

    #[test]
    fn test_client_message_rejects_unknown_type() {
        let result = serde_json::from_str::<ClientMessage>(r#"{"type": "delete"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_server_message_serialize_render() {
        let msg = ServerMessage::Render {
            html: "<h2>My Diary</h2>".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"render","html":"<h2>My Diary</h2>"}"#);
    }

    #[test]
    fn test_server_message_serialize_connected() {
        let msg = ServerMessage::Connected {
            session_id: "abc-123".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"connected\""));
        assert!(json.contains("\"session_id\":\"abc-123\""));
    }
}
