//! Error types for the character browser plugin.
//!
//! This module defines the centralized error type [`BrowserError`] and a type alias
//! [`Result`] used throughout the crate. Network failures never reach the user as
//! errors: view controllers catch them, log them and degrade the view instead.

use thiserror::Error;

/// The main error type for character browser operations.
///
/// Most variants wrap errors from the decoding and parsing crates via `#[from]`
/// so that `?` can be used across API decoding and location parsing.
///
/// # Examples
///
/// ```
/// use charbrowser::BrowserError;
///
/// let err = BrowserError::Http { status: 404, url: "https://example.test/api/character/0".to_string() };
/// assert_eq!(err.to_string(), "HTTP 404 from https://example.test/api/character/0");
/// ```
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The API answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Status code returned by the host's web request.
        status: u16,
        /// Request URL, for logging.
        url: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A location query string could not be decoded.
    #[error("Query error: {0}")]
    Query(#[from] serde_urlencoded::de::Error),

    /// A location query string could not be encoded.
    #[error("Query encode error: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),

    /// An API endpoint could not be parsed as a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A location path did not match any known route.
    #[error("Unknown location: {0}")]
    Location(String),

    /// A response arrived whose request context could not be recovered.
    #[error("Request context error: {0}")]
    Context(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for character browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
