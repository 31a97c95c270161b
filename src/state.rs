//! Application state for the Axum web framework.
//!
//! Contains the shared services accessible from all request handlers.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services.
///
/// Designed to be used with Axum's State extractor. Cloning is cheap
/// since the underlying connection pool uses Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
}

impl AppState {
    /// Creates a new AppState from a database connection pool.
    ///
    /// Initializes all repositories and services from the provided pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        let repos = Repositories::new(pool);
        let services = Services::new(repos);
        Self { services }
    }
}
