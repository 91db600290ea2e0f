//! Error types.
//!
//! Two layers, kept apart on purpose:
//!
//! - [`Error`] surfaces infrastructure failures from [`Server::serve`](crate::Server::serve):
//!   binding the port or accepting a connection.
//! - [`ApiError`] is the request-level taxonomy. Handlers return it and it
//!   turns itself into a `text/plain` response carrying the raw message.

use thiserror::Error;

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The error type returned by ferry's fallible server operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// A failed request, classified by who is at fault.
///
/// Every variant becomes a status code plus the error text as the body.
/// There are no structured error bodies and no error codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed JSON or form data. `400`.
    #[error("{0}")]
    BadRequest(String),

    /// The requested store entry does not exist. `404`.
    #[error("{0}")]
    NotFound(String),

    /// Everything else: I/O faults, a missing upload field, sniff or size
    /// query failures. `500`.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::BadRequest(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Internal(_) => Status::InternalServerError,
        }
    }

    pub(crate) fn bad_request(err: impl std::fmt::Display) -> Self {
        Self::BadRequest(err.to_string())
    }

    pub(crate) fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        Response::builder()
            .status(status)
            .text(format!("{self}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_status_codes() {
        assert_eq!(u16::from(ApiError::bad_request("x").status()), 400);
        assert_eq!(u16::from(ApiError::NotFound("x".into()).status()), 404);
        assert_eq!(u16::from(ApiError::internal("x").status()), 500);
    }

    #[test]
    fn message_is_the_raw_error_text() {
        let err = ApiError::internal(std::io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "disk on fire");
    }
}
