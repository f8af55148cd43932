//! Error types for the CrowdTangle API client.
//!
//! The taxonomy separates the structured errors CrowdTangle reports for
//! rejected requests (HTTP 400 and 409 with a JSON error envelope) from
//! everything else, which is handed back to the caller without being
//! reinterpreted.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for CrowdTangle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by an [`HttpTransport`](crate::client::HttpTransport)
/// when a request could not be completed at the network level.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP statuses that carry CrowdTangle's structured error envelope.
pub(crate) const STRUCTURED_ERROR_STATUSES: [u16; 2] = [400, 409];

/// The main error type for all CrowdTangle API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The API rejected the request (HTTP 400 or 409).
    ///
    /// `message` is empty when the error body did not decode to a JSON
    /// object or carried no `message` field.
    #[error("Bad request: status={status}, code={code:?}, message={message}")]
    BadRequest {
        /// HTTP status code (400 or 409)
        status: u16,
        /// CrowdTangle's own error code, when supplied
        code: Option<i64>,
        /// Human-readable error message
        message: String,
        /// Decoded error body
        body: Value,
    },

    /// A 400/409 response whose body was not valid JSON.
    #[error("Malformed error body for status {status}: {source}")]
    MalformedErrorBody {
        /// HTTP status code of the response
        status: u16,
        /// Decoding failure
        #[source]
        source: serde_json::Error,
    },

    /// A successful response whose body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other non-success status, passed through as received.
    #[error("HTTP status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request never produced a response (DNS, connect, timeout...).
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// The response decoded but did not have the expected envelope.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if the error comes from a status the default retry
    /// policy treats as transient (rate limiting or a server-side failure).
    ///
    /// # Example
    ///
    /// ```
    /// use crowdtangle_rs::Error;
    ///
    /// let err = Error::Status { status: 503, body: String::new() };
    /// assert!(err.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` for the structured 400/409 errors.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Error::BadRequest { .. })
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest { status, .. }
            | Error::MalformedErrorBody { status, .. }
            | Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// CrowdTangle's error code, for structured errors that carried one.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::BadRequest { code, .. } => *code,
            _ => None,
        }
    }

    /// Classify a failed response.
    ///
    /// 400 and 409 decode the body as CrowdTangle's error envelope; every
    /// other status becomes an opaque [`Error::Status`].
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        if !STRUCTURED_ERROR_STATUSES.contains(&status) {
            return Error::Status {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            };
        }

        let body: Value = match serde_json::from_slice(body) {
            Ok(body) => body,
            Err(source) => return Error::MalformedErrorBody { status, source },
        };

        let (code, message) = match body.as_object() {
            Some(envelope) => (
                envelope.get("code").and_then(Value::as_i64),
                envelope
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            ),
            None => (None, String::new()),
        };

        Error::BadRequest {
            status,
            code,
            message,
            body,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_envelope() {
        let err = Error::from_response(400, br#"{"code": 12, "message": "bad filter"}"#);
        match err {
            Error::BadRequest {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, Some(12));
                assert_eq!(message, "bad filter");
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_conflict_takes_structured_path() {
        let err = Error::from_response(409, br#"{"message": "already exists"}"#);
        assert!(err.is_bad_request());
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.api_code(), None);
        assert_eq!(err.to_string(), "Bad request: status=409, code=None, message=already exists");
    }

    #[test]
    fn test_server_error_is_opaque() {
        let err = Error::from_response(500, br#"{"code": 1, "message": "boom"}"#);
        match err {
            Error::Status { status, ref body } => {
                assert_eq!(status, 500);
                assert!(body.contains("boom"));
            }
            ref other => panic!("Expected Status, got {:?}", other),
        }
        assert!(err.is_retryable());
        assert!(!err.is_bad_request());
    }

    #[test]
    fn test_null_body_is_degenerate() {
        let err = Error::from_response(400, b"null");
        match err {
            Error::BadRequest { code, message, body, .. } => {
                assert_eq!(code, None);
                assert_eq!(message, "");
                assert!(body.is_null());
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_body_is_degenerate() {
        let err = Error::from_response(409, br#"["nope"]"#);
        assert!(err.is_bad_request());
        assert_eq!(err.api_code(), None);
    }

    #[test]
    fn test_malformed_error_body() {
        let err = Error::from_response(400, b"<html>oops</html>");
        assert!(matches!(err, Error::MalformedErrorBody { status: 400, .. }));

        let err = Error::from_response(409, b"");
        assert!(matches!(err, Error::MalformedErrorBody { status: 409, .. }));
    }

    #[test]
    fn test_retryable_statuses() {
        let status = |status| Error::Status {
            status,
            body: String::new(),
        };
        assert!(status(429).is_retryable());
        assert!(status(502).is_retryable());
        assert!(!status(404).is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
    }
}
