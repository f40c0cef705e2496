//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the fact store; all fact data lives in the backend.

use std::sync::Arc;

use crate::config::{Config, StoreConfig};
use crate::store::{FactStore, MemoryFactStore, PostgrestFactStore, StoreError};

/// Clone is required by Axum; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FactStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn FactStore>) -> Self {
        Self { store }
    }

    /// Build state for the configured store.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store: Arc<dyn FactStore> = match &config.store {
            StoreConfig::Backend(backend) => Arc::new(PostgrestFactStore::new(backend)?),
            StoreConfig::Memory => Arc::new(MemoryFactStore::seeded()),
        };
        Ok(Self::new(store))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` over the seeded in-memory store.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Arc::new(MemoryFactStore::seeded()))
    }

    /// `AppState` over a caller-provided store.
    #[must_use]
    pub fn test_app_state_with(store: Arc<dyn FactStore>) -> AppState {
        AppState::new(store)
    }
}
