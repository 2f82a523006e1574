//! Domain types for the task API.
//!
//! # Design
//! Request payloads keep every field `Option`al at the serde level. A missing
//! `name` has to reach the validation step so the response is the contract's
//! 400 plain-text body, not a deserialization rejection from the framework.

use serde::{Deserialize, Serialize};

/// A single task record held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub completed: bool,
}

/// Request payload for `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub name: Option<String>,
    pub completed: Option<bool>,
}

/// Request payload for `PUT /tasks/{id}` and `PATCH /tasks/{id}`.
///
/// PUT requires `name` and PATCH does not; both requirements are enforced by
/// the store, so the two verbs share one payload type.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub completed: Option<bool>,
}
