//! Gateway traits for the collaborators the domain talks to.
//!
//! Implementations live in `crate::infrastructure`; mocks are generated with
//! `mockall` for unit tests.
//!
//! - [`EmailSender`] - Transactional email delivery
//! - [`AssetStore`] - Pre-built static files of the site bundle

pub mod asset_store;
pub mod email_sender;

pub use asset_store::{Asset, AssetError, AssetStore};
pub use email_sender::{DeliveryError, EmailSender};

#[cfg(test)]
pub use asset_store::MockAssetStore;
#[cfg(test)]
pub use email_sender::MockEmailSender;
