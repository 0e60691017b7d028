//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session_gate` wraps every authenticated route and provides the session
//! context; `analytics` is the telemetry widget the gate always renders.

pub mod analytics;
pub mod session_gate;
