//! Error types for the API client.
//!
//! # Design
//! `NotFound` and `Unprocessable` get dedicated variants because the server
//! signals them with bare status codes and callers branch on them. Every
//! other unexpected status lands in `HttpError` with the raw body.

use thiserror::Error;

/// Errors returned by `ApiClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// 404: the id was malformed or names nothing.
    #[error("resource not found")]
    NotFound,

    /// 422: a required field was missing or failed validation.
    #[error("request rejected as unprocessable")]
    Unprocessable,

    /// Any other status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
