//! Error types for MangoPay API calls.
//!
//! Every call surfaces exactly one [`Error`]. The four kinds produced by the
//! request executor itself are [`Error::Authentication`] (HTTP 401),
//! [`Error::Timeout`], [`Error::Response`] (any status other than 200, 204
//! or 401) and [`Error::InvalidPaginationHeader`].
//!
//! A fifth executor outcome, [`Error::Network`], covers transport failures
//! that are not timeouts (refused connection, DNS failure, a body cut off
//! mid-read). It carries no status and no body; such failures are not
//! reported as a [`Error::Response`] with a made-up status.
//!
//! The remaining variants come from (de)serialization or from invalid
//! configuration.

use http::StatusCode;

/// The main error type for MangoPay API calls.
///
/// # Examples
///
/// ```no_run
/// use mangopay::{Client, Error};
///
/// # async fn example(client: Client) -> Result<(), Error> {
/// match client.clients().get().await {
///     Ok(me) => println!("Client: {:?}", me.name),
///     Err(Error::Authentication { body }) => eprintln!("Rejected credentials: {}", body),
///     Err(Error::Response { status, body }) => eprintln!("HTTP {}: {}", status, body),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with HTTP 401.
    ///
    /// Carries the raw response body. Never retried.
    #[error("Authentication failed: {body}")]
    Authentication {
        /// The raw response body
        body: String,
    },

    /// The transport reported a timed-out exchange.
    ///
    /// Carries the transport's error message.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server returned a failing status other than 401.
    ///
    /// The status code and body are the only discriminant between validation
    /// errors, missing resources, rate limiting and so on.
    #[error("HTTP error {status}: {body}")]
    Response {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        body: String,
    },

    /// A pagination header carried a value that is not a base-10 integer.
    #[error("Invalid value {value:?} for pagination header {name}")]
    InvalidPaginationHeader {
        /// The header name as received
        name: String,
        /// The offending value
        value: String,
    },

    /// The transport failed for a reason other than a timeout.
    ///
    /// No status is attached, so [`Error::status`] returns `None`.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to deserialize the response body into the expected type.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// Failed to serialize the request body.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// Invalid configuration was provided.
    ///
    /// Covers missing credentials, malformed header values and endpoint
    /// templates with unresolved placeholders.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error has one.
    ///
    /// ```
    /// use mangopay::Error;
    ///
    /// let err = Error::Authentication { body: "{}".to_string() };
    /// assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Authentication { .. } => Some(StatusCode::UNAUTHORIZED),
            Error::Response { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Authentication { body } => Some(body),
            Error::Response { body, .. } => Some(body),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` for HTTP 401 failures.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Returns `true` if the transport timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// Classifies a transport failure, separating timeouts from other network errors.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Error::Timeout(error.to_string())
        } else {
            Error::Network(error)
        }
    }

    /// Classifies a failing HTTP status.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            Error::Authentication { body }
        } else {
            Error::Response { status, body }
        }
    }
}

/// A specialized `Result` type for MangoPay API calls.
pub type Result<T> = std::result::Result<T, Error>;
