//! Infrastructure layer: concrete gateway implementations.
//!
//! - [`email`] - Resend-compatible sender and the no-op fallback
//! - [`assets`] - Directory-backed asset store

pub mod assets;
pub mod email;
