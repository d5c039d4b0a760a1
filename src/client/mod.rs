//! Contact form client: the form state machine and the transport it submits
//! through.
//!
//! ```text
//! Editing ──submit (valid)──▶ Submitting ──ok──▶ Submitted
//!    ▲  │                          │                 │
//!    │  └─submit (invalid)─┐       └─error──▶ Editing (form error)
//!    │                     ▼                         │
//!    └──────────── Editing (field errors) ◀──reset───┘
//! ```

pub mod form;
pub mod transport;

pub use form::{ContactForm, FormState, GENERIC_FAILURE, SubmitError};
pub use transport::{HttpTransport, SubmissionTransport, TransportError};

#[cfg(test)]
pub use transport::MockSubmissionTransport;
