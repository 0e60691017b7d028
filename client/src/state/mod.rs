//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the value the gate publishes; `session_check` drives the
//! one-shot query that settles it. Neither depends on a mounted view.

pub mod session;
pub mod session_check;
