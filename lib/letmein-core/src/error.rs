//! Error types for the Letmein client.
//!
//! Two error paths coexist, mirroring the service's two response
//! styles:
//!
//! - [`Error::classified`] maps a status code to a closed [`ErrorKind`]
//!   and carries the raw body for diagnostics. Used by the admin
//!   resource APIs, where callers branch on the kind.
//! - [`Error::from_detail_body`] reads a human message out of
//!   `{"errors": {"detail": "..."}}`. Used by the session and account
//!   endpoints, which report failures as plain text.
//!
//! Everything else (connection, TLS, timeout, invalid request, JSON) is
//! a transport or decoding failure and is never classified.

use bytes::Bytes;
use derive_more::{Display, Error, From};

// ============================================================================
// Status classification
// ============================================================================

/// Semantic kind of a failed HTTP status.
///
/// A pure function of the status code; the response body never
/// influences the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// 400.
    #[display("bad request")]
    BadRequest,
    /// 403.
    #[display("forbidden")]
    Forbidden,
    /// 404.
    #[display("not found")]
    NotFound,
    /// 422.
    #[display("unprocessable entity")]
    UnprocessableEntity,
    /// Any other non-success status.
    #[display("general error")]
    General,
}

impl ErrorKind {
    /// Classify a status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            422 => Self::UnprocessableEntity,
            _ => Self::General,
        }
    }
}

/// Wire shape of the service's plain error responses.
#[derive(Debug, serde::Deserialize)]
struct DetailBody {
    errors: Detail,
}

#[derive(Debug, serde::Deserialize)]
struct Detail {
    detail: String,
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for Letmein client operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Unexpected HTTP status, classified by code.
    #[display("{kind} ({status})")]
    #[from(skip)]
    Status {
        /// Semantic kind derived from the status code.
        kind: ErrorKind,
        /// HTTP status code.
        status: u16,
        /// Raw response body, unparsed, for caller inspection.
        #[error(not(source))]
        body: Bytes,
    },

    /// Unexpected HTTP status with a human-readable message extracted
    /// from the response body.
    #[display("{message} ({status})")]
    #[from(skip)]
    Detail {
        /// HTTP status code.
        status: u16,
        /// The `errors.detail` message from the body.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "data.token").
        path: String,
        /// Error message.
        message: String,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify an unexpected status code, keeping the raw body.
    #[must_use]
    pub fn classified(status: u16, body: impl Into<Bytes>) -> Self {
        Self::Status {
            kind: ErrorKind::from_status(status),
            status,
            body: body.into(),
        }
    }

    /// Extract the plain `errors.detail` message from an error body.
    ///
    /// If the body does not carry the expected shape the JSON error is
    /// returned instead, as the original response is then unreadable
    /// either way.
    #[must_use]
    pub fn from_detail_body(status: u16, body: &[u8]) -> Self {
        match crate::from_json::<DetailBody>(body) {
            Ok(parsed) => Self::Detail {
                status,
                message: parsed.errors.detail,
            },
            Err(err) => err,
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the classified kind if this is a status error.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Status { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the HTTP status code for either status-derived variant.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Detail { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this is a classified error.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if the error comes from the transport rather than
    /// an HTTP status.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Tls(_) | Self::Timeout | Self::InvalidRequest(_)
        )
    }

    /// Returns `true` if this is a 404 status error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_table() {
        assert_eq!(ErrorKind::from_status(422), ErrorKind::UnprocessableEntity);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::General);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::General);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::General);
        assert_eq!(ErrorKind::from_status(301), ErrorKind::General);
    }

    #[test]
    fn classification_ignores_body() {
        for body in [&b""[..], br#"{"errors":{"detail":"nope"}}"#, b"not json"] {
            let err = Error::classified(403, body);
            assert_eq!(err.kind(), Some(ErrorKind::Forbidden));
            assert_eq!(err.status(), Some(403));
            assert_eq!(err.body().map(Bytes::as_ref), Some(body));
        }
    }

    #[test]
    fn classified_500_is_general() {
        let err = Error::classified(500, &b"boom"[..]);
        assert_eq!(err.kind(), Some(ErrorKind::General));
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body().map(Bytes::as_ref), Some(&b"boom"[..]));
    }

    #[test]
    fn detail_extraction() {
        let err = Error::from_detail_body(401, br#"{"errors": {"detail": "invalid credentials"}}"#);
        assert!(matches!(
            err,
            Error::Detail { status: 401, ref message } if message == "invalid credentials"
        ));
        assert_eq!(err.to_string(), "invalid credentials (401)");
    }

    #[test]
    fn detail_extraction_bad_body() {
        let err = Error::from_detail_body(500, b"<html>oops</html>");
        assert!(matches!(err, Error::JsonDeserialization { .. }));
    }

    #[test]
    fn error_display() {
        let err = Error::classified(422, Bytes::new());
        assert_eq!(err.to_string(), "unprocessable entity (422)");

        let err = Error::Timeout;
        assert_eq!(err.to_string(), "request timeout");

        let err = Error::connection("failed to connect");
        assert_eq!(err.to_string(), "connection error: failed to connect");
    }

    #[test]
    fn transport_predicate() {
        assert!(Error::Timeout.is_transport());
        assert!(Error::connection("down").is_transport());
        assert!(Error::invalid_request("bad header").is_transport());
        assert!(!Error::classified(500, Bytes::new()).is_transport());
        assert!(!Error::from_detail_body(400, br#"{"errors":{"detail":"x"}}"#).is_transport());
    }

    #[test]
    fn not_found_predicate() {
        assert!(Error::classified(404, Bytes::new()).is_not_found());
        assert!(!Error::classified(400, Bytes::new()).is_not_found());
        assert!(!Error::Timeout.is_not_found());
    }
}
