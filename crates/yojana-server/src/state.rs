use crate::config::ServerConfig;
use sqlx::PgPool;
use std::sync::Arc;
use yojana_common::catalog::SchemeCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub catalog: Arc<SchemeCatalog>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state
    pub fn new(pool: PgPool, catalog: SchemeCatalog, config: ServerConfig) -> Self {
        Self {
            pool,
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
