//! Shared wire DTOs for the client/server boundary.
//!
//! The server serializes these from its route handlers, so both sides stay
//! on one schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/auth/status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Whether the request carried a session the auth backend accepts.
    pub authenticated: bool,
}

/// Error body returned by API routes on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
