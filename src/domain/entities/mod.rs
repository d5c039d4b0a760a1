//! Domain entities for the contact flow.

pub mod choices;
pub mod contact;
pub mod email;

pub use choices::{Budget, CompanySize, InvalidChoice, ProjectTimeline};
pub use contact::{ContactField, ContactSubmission};
pub use email::EmailMessage;
