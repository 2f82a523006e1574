//! Error types for the task API.
//!
//! # Design
//! Each failure a handler can produce maps to a fixed status code and a
//! plain-text body. The body text is part of the public contract — clients
//! match on the exact strings — so it lives on the variants as their
//! `Display` output rather than being formatted ad hoc in handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned by the task handlers and the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The referenced id is absent from the collection.
    #[error("The task with the provided ID does not exist.")]
    TaskNotFound,

    /// The submitted name is missing or shorter than three characters.
    #[error("The name should be at least 3 chars long!")]
    NameTooShort,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::NameTooShort => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
