//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ContactService;
use crate::domain::gateways::AssetStore;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    pub asset_store: Arc<dyn AssetStore>,
}

impl AppState {
    pub fn new(contact_service: Arc<ContactService>, asset_store: Arc<dyn AssetStore>) -> Self {
        Self {
            contact_service,
            asset_store,
        }
    }
}
