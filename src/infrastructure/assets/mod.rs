//! Asset store backends.

mod dir_store;

pub use dir_store::DirAssetStore;
