//! Business logic services for the application layer.

pub mod contact_service;

pub use contact_service::{ACKNOWLEDGEMENT, ContactService, DeliveryOutcome};
