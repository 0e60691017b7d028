//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own upstream calls and status aggregation so route
//! handlers can stay focused on protocol translation and key checks.

pub mod health;
pub mod upstream_auth;
