//! Protocol definitions for the Parley chat service
//!
//! All socket messages are sent as newline-delimited JSON. Each request is
//! one JSON object carrying an `action` field that selects the command; the
//! server replies with one JSON object per request.
//!
//! ## Password Security
//!
//! Clients send passwords in plaintext. The server stores only a salted
//! SHA-256 digest (see [`crate::hash`]); the plaintext never touches disk.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Actions understood by the server, as they appear on the wire
pub const KNOWN_ACTIONS: &[&str] = &["register", "login", "send_message", "get_messages"];

/// Client request messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClientRequest {
    /// Create a new account
    Register { username: String, password: String },
    /// Check credentials against the stored account
    Login { username: String, password: String },
    /// Append a chat message
    SendMessage { username: String, text: String },
    /// Request the full message history
    GetMessages,
}

/// A single chat message as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub username: String,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub text: String,
}

/// Response status, `"ok"` or `"error"` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Server response message
///
/// Every request gets exactly one of these. `message` carries the
/// user-facing text for register/login/send results; `messages` carries the
/// history for `get_messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<ChatMessage>>,
}

impl ServerResponse {
    /// Build a success response with a user-facing message
    pub fn ok(message: &str) -> Self {
        Self {
            status: Status::Ok,
            message: Some(message.to_string()),
            messages: None,
        }
    }

    /// Build an error response with a user-facing message
    pub fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.to_string()),
            messages: None,
        }
    }

    /// Build a success response carrying the message history
    pub fn history(messages: Vec<ChatMessage>) -> Self {
        Self {
            status: Status::Ok,
            message: None,
            messages: Some(messages),
        }
    }

    /// True if the response reports success
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Error produced while parsing a request line
///
/// [`RequestError::UnknownAction`] is recoverable (the server replies in-band
/// and keeps the connection); the other variants are connection-fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Body was not valid JSON or a known action was missing required fields
    Malformed(String),
    /// The `action` field was absent or not a string
    MissingAction,
    /// The `action` field named a command the server does not understand
    UnknownAction(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Malformed(msg) => write!(f, "malformed request: {}", msg),
            RequestError::MissingAction => write!(f, "request has no action field"),
            RequestError::UnknownAction(action) => write!(f, "unknown action: {}", action),
        }
    }
}

impl std::error::Error for RequestError {}

/// Parse one request line into a [`ClientRequest`]
///
/// Parsing happens in two steps so that an unknown `action` can be told
/// apart from a structurally broken request: the former earns an in-band
/// error reply, the latter closes the connection.
pub fn parse_request(line: &[u8]) -> Result<ClientRequest, RequestError> {
    let value: serde_json::Value =
        serde_json::from_slice(line).map_err(|e| RequestError::Malformed(e.to_string()))?;

    let action = value
        .get("action")
        .and_then(serde_json::Value::as_str)
        .ok_or(RequestError::MissingAction)?;

    if !KNOWN_ACTIONS.contains(&action) {
        return Err(RequestError::UnknownAction(action.to_string()));
    }

    serde_json::from_value(value).map_err(|e| RequestError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_register() {
        let req = parse_request(br#"{"action":"register","username":"alice","password":"pw1"}"#)
            .unwrap();
        match req {
            ClientRequest::Register { username, password } => {
                assert_eq!(username, "alice");
                assert_eq!(password, "pw1");
            }
            other => panic!("expected Register, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_login() {
        let req =
            parse_request(br#"{"action":"login","username":"bob","password":"pw"}"#).unwrap();
        assert!(matches!(req, ClientRequest::Login { .. }));
    }

    #[test]
    fn test_parse_send_message() {
        let req = parse_request(br#"{"action":"send_message","username":"bob","text":"hi"}"#)
            .unwrap();
        match req {
            ClientRequest::SendMessage { username, text } => {
                assert_eq!(username, "bob");
                assert_eq!(text, "hi");
            }
            other => panic!("expected SendMessage, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_get_messages() {
        let req = parse_request(br#"{"action":"get_messages"}"#).unwrap();
        assert!(matches!(req, ClientRequest::GetMessages));
    }

    #[test]
    fn test_parse_unknown_action() {
        let result = parse_request(br#"{"action":"shutdown"}"#);
        assert_eq!(result, Err(RequestError::UnknownAction("shutdown".to_string())));
    }

    #[test]
    fn test_parse_missing_action() {
        let result = parse_request(br#"{"username":"alice"}"#);
        assert_eq!(result, Err(RequestError::MissingAction));
    }

    #[test]
    fn test_parse_action_not_a_string() {
        let result = parse_request(br#"{"action":42}"#);
        assert_eq!(result, Err(RequestError::MissingAction));
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_request(b"{not json");
        assert!(matches!(result, Err(RequestError::Malformed(_))));
    }

    #[test]
    fn test_parse_missing_required_field() {
        // Known action but the password field is absent
        let result = parse_request(br#"{"action":"register","username":"alice"}"#);
        assert!(matches!(result, Err(RequestError::Malformed(_))));
    }

    #[test]
    fn test_known_actions_cover_requests() {
        // Every request variant serializes to an action in KNOWN_ACTIONS
        let requests = [
            ClientRequest::Register {
                username: "u".to_string(),
                password: "p".to_string(),
            },
            ClientRequest::Login {
                username: "u".to_string(),
                password: "p".to_string(),
            },
            ClientRequest::SendMessage {
                username: "u".to_string(),
                text: "t".to_string(),
            },
            ClientRequest::GetMessages,
        ];
        for request in requests {
            let value = serde_json::to_value(&request).unwrap();
            let action = value.get("action").and_then(|a| a.as_str()).unwrap();
            assert!(
                KNOWN_ACTIONS.contains(&action),
                "action '{}' missing from KNOWN_ACTIONS",
                action
            );
        }
    }

    #[test]
    fn test_response_ok_shape() {
        let response = ServerResponse::ok("done");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"ok","message":"done"}"#);
        assert!(response.is_ok());
    }

    #[test]
    fn test_response_error_shape() {
        let response = ServerResponse::error("nope");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"error","message":"nope"}"#);
        assert!(!response.is_ok());
    }

    #[test]
    fn test_response_history_shape() {
        let response = ServerResponse::history(vec![ChatMessage {
            username: "alice".to_string(),
            timestamp: "2024-05-01 12:00:00".to_string(),
            text: "hi".to_string(),
        }]);
        let json = serde_json::to_string(&response).unwrap();
        // No message field, one entry in messages
        assert!(!json.contains("\"message\":"));
        assert!(json.contains("\"messages\":"));

        let parsed: ServerResponse = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_ok());
        assert_eq!(parsed.messages.unwrap().len(), 1);
    }

    #[test]
    fn test_chat_message_round_trip() {
        let message = ChatMessage {
            username: "боб".to_string(),
            timestamp: "2024-05-01 12:00:00".to_string(),
            text: "привет".to_string(),
        };
        let json = serde_json::to_string(&message).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(message, back);
    }
}
