//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` lives under the session gate; `login` is public.

pub mod home;
pub mod login;
