//! Error types for the content API client.
//!
//! Four families of failure exist and are kept apart:
//! - validation errors, raised before any network call,
//! - API errors, a completed exchange whose status was rejected,
//! - transport failures (connection, TLS, timeout),
//! - decode errors, an accepted body that does not match the expected shape.

use bytes::Bytes;
use derive_more::{Display, Error, From};

use crate::model::ApiErrorBody;

/// Main error type for content API operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Malformed caller input, detected before any request is sent.
    #[display("validation error: {_0}")]
    #[from(skip)]
    Validation(#[error(not(source))] String),

    /// The server answered with a status outside the accepted set.
    #[display("API error {status}: {message}")]
    #[from(skip)]
    Api {
        /// HTTP status code.
        status: u16,
        /// HTTP status text.
        message: String,
        /// Response body, if any.
        #[error(not(source))]
        body: Option<Bytes>,
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

    /// The payload of an accepted response could not be decoded.
    #[display("decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// Path to the failing field (e.g., `response.results[0].webUrl`).
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
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an API error from status code and status text.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Create an API error keeping the response body.
    #[must_use]
    pub fn api_with_body(status: u16, message: impl Into<String>, body: Bytes) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body: Some(body),
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

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if this is a decode error.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` for failures raised by the transport.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Tls(_) | Self::Timeout)
    }

    /// Returns the HTTP status code if this is an API error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the response body if this is an API error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the API error body as JSON.
    ///
    /// Returns `None` if there is no body or this is not an API error.
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }

    /// The error payload the Content API sends alongside 4xx answers.
    ///
    /// ```json
    /// {"response":{"status":"error","message":"The requested resource could not be found."}}
    /// ```
    #[must_use]
    pub fn api_error_body(&self) -> Option<ApiErrorBody> {
        self.body()
            .and_then(|body| crate::format::unwrap_envelope(body).ok())
    }
}
