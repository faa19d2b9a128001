//! Errors surfaced by [`crate::LinkFreeApi`] calls.

use serde_json::Value;

/// A failed call to the LinkFree backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response, or the body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{}", .message.as_deref().unwrap_or("the server rejected the request"))]
    Status { status: u16, message: Option<String> },

    /// A 2xx response whose body was not what the client expects.
    #[error("unexpected response: {0}")]
    Unexpected(String),

    /// The configured API origin is not an absolute URL.
    #[error("invalid API base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Build a status error from a non-2xx response body, picking up the
    /// server-supplied `error` or `message` field when there is one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body).ok().and_then(|json| {
            ["error", "message"]
                .iter()
                .find_map(|key| json.get(*key).and_then(Value::as_str).map(str::to_string))
        });
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Unexpected(_) | ApiError::BaseUrl(_) => None,
        }
    }

    /// The server-supplied message, if the backend sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for a toast: the server's own words, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_error_field() {
        let err = ApiError::from_status(400, r#"{"error": "Email already registered"}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message(), Some("Email already registered"));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_from_status_reads_message_field() {
        let err = ApiError::from_status(404, r#"{"message": "Profile not found"}"#);
        assert_eq!(err.user_message("Failed to load profile data"), "Profile not found");
    }

    #[test]
    fn test_from_status_without_json_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message("Save failed"), "Save failed");
    }
}
