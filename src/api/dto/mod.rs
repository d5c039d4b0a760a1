//! Data Transfer Objects for API requests and responses.
//!
//! The request side is [`crate::domain::entities::ContactSubmission`] itself;
//! these are the response shapes.

pub mod contact;
pub mod health;
