//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing side effects out of page components so the
//! decisions stay testable without a mounted view.

pub mod auth;
