//! API Errors
//!
//! Failure taxonomy shared by every REST call.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No session token in storage
    #[error("token not found")]
    Unauthenticated,
    /// Non-success HTTP status with no usable body
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// Backend answered with a non-success `status` field
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(err: impl Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Message to show the user alongside a generic failure title.
    ///
    /// Backend-provided messages win; transport and decode failures
    /// surface their own description.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Rejected { message } => message.clone(),
            Self::Transport(msg) | Self::Decode(msg) => Some(msg.clone()),
            Self::Status(code) => Some(format!("HTTP {code}")),
            Self::Unauthenticated => None,
        }
    }

    /// True when the backend itself refused the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_display() {
        let err = ApiError::Rejected { message: Some("name taken".into()) };
        assert_eq!(err.to_string(), "request rejected: name taken");

        let err = ApiError::Rejected { message: None };
        assert_eq!(err.to_string(), "request rejected: no message");
    }

    #[test]
    fn test_detail() {
        assert_eq!(
            ApiError::Rejected { message: Some("duplicate slug".into()) }.detail().as_deref(),
            Some("duplicate slug")
        );
        assert_eq!(ApiError::Rejected { message: None }.detail(), None);
        assert_eq!(ApiError::Status(500).detail().as_deref(), Some("HTTP 500"));
        assert_eq!(ApiError::Unauthenticated.detail(), None);
        assert!(ApiError::transport("connection refused").detail().unwrap().contains("refused"));
    }
}
