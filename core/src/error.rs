//! Error types for the todo store and its HTTP client.
//!
//! # Design
//! The store has exactly one failure: a title that is empty, missing, or only
//! whitespace. Unknown ids, empty lists and "nothing completed" are ordinary
//! return values (`None`, `false`, `vec![]`), never errors.
//!
//! The client keeps `NotFound` separate from other non-2xx statuses so a UI
//! can tell "that todo is gone" apart from "the server misbehaved."

use thiserror::Error;

/// Errors returned by `TodoStore` write operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The title was empty or whitespace-only after trimming.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors returned by `TodoClient` parse and build methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 because the title was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server returned a non-2xx status other than 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
