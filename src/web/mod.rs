//! Web layer: serves the pre-built marketing site.
//!
//! # Modules
//!
//! - [`assets`] - Router fallback that serves files from the asset store

pub mod assets;
