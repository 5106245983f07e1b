use std::sync::Arc;

use crate::catalog::ValueCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<ValueCatalog>,
}

impl AppState {
    pub fn new(catalog: ValueCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
