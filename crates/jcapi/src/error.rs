//! Error types for the jcapi library.
//!
//! Each stage of a request (construction, transport, status check, body read,
//! decode) fails with its own variant, and callers can still treat them all
//! as one error through `Display`.

use thiserror::Error;

/// The unified error type for jcapi operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be built.
    #[error("could not build request: {message}")]
    Request { message: String },

    /// Network transport errors (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with anything other than `200 OK`.
    #[error("JumpCloud HTTP response status='{status}'")]
    Status { status: String },

    /// The response body could not be read.
    #[error("could not read the response body: {message}")]
    Body { message: String },

    /// The response body was not valid JSON, or did not match the expected shape.
    #[error("could not decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A strict extraction found a JSON value of the wrong type.
    #[error("unexpected JSON shape: {0}")]
    Shape(#[from] ShapeError),

    /// Input validation errors (base URL, API key, unsupported operation).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A JSON value that did not have the type a strict extraction required.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Expected a JSON array.
    #[error("expected an array, found {found}")]
    NotAnArray { found: &'static str },

    /// An array element was not a string.
    #[error("array element {index} is {found}, expected a string")]
    NotAString { index: usize, found: &'static str },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid API key.
    #[error("invalid API key: {reason}")]
    ApiKey { reason: String },

    /// The operation kind is not supported by the called wrapper.
    #[error("operation '{op}' is not supported for {resource}")]
    UnsupportedOperation { op: String, resource: &'static str },
}
