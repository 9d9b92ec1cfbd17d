//! Shared state handed to every handler.

use std::sync::Arc;

use catalog_core::Catalog;

use crate::config::GatewayConfig;

/// The catalog plus the settings handlers need, owned by the router.
///
/// Each `AppState` owns its own [`Catalog`], so independent routers (one per
/// test, say) never share records.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub config: GatewayConfig,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, config: GatewayConfig) -> Self {
        Self { catalog, config }
    }

    /// Seeded catalog with default configuration, as used by the binary.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded(), GatewayConfig::default())
    }
}

pub type SharedState = Arc<AppState>;
