//! Application layer: relaying contact submissions.
//!
//! # Modules
//!
//! - [`notification`] - Notification email rendering
//! - [`services`] - [`services::ContactService`], the fire-and-forget relay

pub mod notification;
pub mod services;
