//! Error types for blog service operations.

use thiserror::Error;

use crate::http::Headers;

/// Errors that can occur while calling the blog service.
///
/// Validation variants (`MissingParameter`, `UnknownParameter`,
/// `MissingBody`) are raised before any network I/O. `Remote` and `Parse`
/// are raised after a response was received.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Configuration is missing or incomplete.
    #[error("blog service configuration required: {0}")]
    ConfigMissing(String),

    /// Base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required parameter was undefined or null.
    #[error("The parameter '{parameter}' must be defined and cannot be null ({operation})")]
    MissingParameter {
        operation: &'static str,
        parameter: String,
    },

    /// An argument was supplied that the endpoint does not declare.
    #[error("Unknown parameter '{parameter}' for {operation}")]
    UnknownParameter {
        operation: &'static str,
        parameter: String,
    },

    /// The endpoint takes a JSON body but none was supplied.
    #[error("{operation} requires a request body")]
    MissingBody { operation: &'static str },

    /// Request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport.
    #[error("Transport failed: {0}")]
    TransportFailed(String),

    /// The service answered with a non-success status.
    #[error("blog service returned {}: {}", .0.status, .0.message)]
    Remote(Box<RemoteError>),

    /// A success status carried a body that is not the expected JSON.
    #[error("Failed to parse {status} response: {source}")]
    Parse {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ProxyError {
    /// True for errors raised before the request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. } | Self::UnknownParameter { .. } | Self::MissingBody { .. }
        )
    }

    /// True when the service answered with a failure status.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// HTTP status of the response that caused this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote(remote) => Some(remote.status),
            Self::Parse { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The structured failure, when this is a remote error.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(remote) => Some(remote),
            _ => None,
        }
    }
}

/// A non-success response from the blog service.
#[derive(Debug, Clone)]
pub struct RemoteError {
    /// Human-readable message. The service sends plain text, so this is the
    /// raw body.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
    /// Raw response body, verbatim.
    pub response: String,
    /// Response headers.
    pub headers: Headers,
    /// The body decoded as JSON, when it is valid JSON.
    pub result: Option<serde_json::Value>,
}

impl From<RemoteError> for ProxyError {
    fn from(remote: RemoteError) -> Self {
        Self::Remote(Box::new(remote))
    }
}

/// Result type alias for blog service operations.
pub type Result<T> = core::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_classified() {
        let err = ProxyError::MissingParameter {
            operation: "activate",
            parameter: "blogId".to_string(),
        };
        assert!(err.is_validation());
        assert!(!err.is_remote());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("'blogId'"));
    }

    #[test]
    fn test_remote_error_exposes_status() {
        let err: ProxyError = RemoteError {
            message: "bad input".to_string(),
            status: 400,
            response: "bad input".to_string(),
            headers: Headers::new(),
            result: None,
        }
        .into();

        assert!(err.is_remote());
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "blog service returned 400: bad input");
        assert_eq!(err.as_remote().map(|r| r.response.as_str()), Some("bad input"));
    }
}
