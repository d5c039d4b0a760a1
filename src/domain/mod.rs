//! Domain layer: contact submission model, validation and gateway traits.
//!
//! # Modules
//!
//! - [`entities`] - Submission, enumerated choices, outbound email
//! - [`validation`] - Per-field error collection
//! - [`gateways`] - Traits for the email provider and the asset store

pub mod entities;
pub mod gateways;
pub mod validation;

pub use validation::{FieldErrors, validate_submission};
