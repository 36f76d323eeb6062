//! Error types for the todo API client.
//!
//! `NotFound` and `BadRequest` get dedicated variants because callers show
//! them to the user as-is. All other non-2xx responses land in `HttpError`
//! with the raw status code and body.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input rejected locally before any request was built.
    #[error("{0}")]
    Validation(String),

    /// The server returned 404; the todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server returned 400 with this message.
    #[error("rejected by server: {0}")]
    BadRequest(String),

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
