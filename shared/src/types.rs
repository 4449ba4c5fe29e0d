use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed status string the sender reports after a successful relay.
pub const SENDER_SUCCESS_STATUS: &str = "Successfully reached listener!";

/// Fixed error label the sender reports when the listener call fails.
pub const UPSTREAM_ERROR_LABEL: &str = "Could not reach listener";

// Wire types exchanged between the services

/// Body of the listener's `GET /receive` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveResponse {
    pub reply: String,
    pub timestamp: DateTime<Utc>,
}

impl ReceiveResponse {
    /// Build a fresh response; `timestamp` is the time of handling.
    pub fn new(port: u16) -> Self {
        Self {
            reply: format!("Hello Sender! This is the Listener on port {}.", port),
            timestamp: Utc::now(),
        }
    }
}

/// Success envelope for the sender's `GET /call-listener` endpoint.
///
/// `listener_said` carries the upstream body verbatim, so whatever the
/// listener actually answered is relayed without rewriting.
#[derive(Debug, Serialize, Deserialize)]
pub struct CallListenerResponse {
    pub sender_status: String,
    pub listener_said: serde_json::Value,
}

impl CallListenerResponse {
    pub fn success(listener_said: serde_json::Value) -> Self {
        Self {
            sender_status: SENDER_SUCCESS_STATUS.to_string(),
            listener_said,
        }
    }
}

/// Failure envelope for the sender's `GET /call-listener` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn upstream(details: String) -> Self {
        Self {
            error: UPSTREAM_ERROR_LABEL.to_string(),
            details,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid listener URL: {0}")]
    InvalidListenerUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receive_response_names_the_port() {
        let response = ReceiveResponse::new(4000);
        assert_eq!(
            response.reply,
            "Hello Sender! This is the Listener on port 4000."
        );
        assert!(response.timestamp <= Utc::now());
    }

    #[test]
    fn test_receive_response_timestamp_is_rfc3339() {
        let response = ReceiveResponse::new(4000);
        let value = serde_json::to_value(&response).unwrap();
        let raw = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }

    #[test]
    fn test_health_response_shape() {
        let value = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok" }));
    }

    #[test]
    fn test_success_envelope_relays_body_verbatim() {
        let body = serde_json::json!({ "reply": "x", "timestamp": "t" });
        let envelope = CallListenerResponse::success(body.clone());
        assert_eq!(envelope.sender_status, SENDER_SUCCESS_STATUS);
        assert_eq!(envelope.listener_said, body);
    }

    #[test]
    fn test_error_envelope_uses_fixed_label() {
        let envelope = ErrorResponse::upstream("connection refused".to_string());
        assert_eq!(envelope.error, UPSTREAM_ERROR_LABEL);
        assert_eq!(envelope.details, "connection refused");
    }
}
