//! Networking modules for the session-status check.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` implements the authentication capability the session gate consumes,
//! and `types` defines the wire schema shared with the server.

pub mod auth;
pub mod types;
