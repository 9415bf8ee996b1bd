//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, CategoryService};
use crate::infrastructure::persistence::{PgCategoryRepository, PgTokenRepository};

/// Per-process shared state.
///
/// Holds no per-request data: services are stateless and the pool hands
/// out a scoped connection per request, so one state value safely serves
/// many concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService<PgCategoryRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    pub db: Arc<PgPool>,
    /// `max-age` (seconds) advertised on the category list response.
    pub list_cache_max_age: u64,
}

impl AppState {
    /// Wires repositories and services over a shared pool.
    pub fn new(pool: Arc<PgPool>, signing_secret: String, list_cache_max_age: u64) -> Self {
        let category_repository = Arc::new(PgCategoryRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

        Self {
            category_service: Arc::new(CategoryService::new(category_repository)),
            auth_service: Arc::new(AuthService::new(token_repository, signing_secret)),
            db: pool,
            list_cache_max_age,
        }
    }
}
