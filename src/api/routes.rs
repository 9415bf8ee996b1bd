//! API route configuration.
//!
//! Read routes are public; write routes require the employee role via
//! [`crate::api::middleware::auth`], applied by the top-level router.

use crate::api::handlers::{
    create_category_handler, delete_category_handler, get_category_handler,
    list_categories_handler, update_category_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Public read routes.
///
/// # Endpoints
///
/// - `GET /categories`      - List all categories (with shared-cache hint)
/// - `GET /categories/{id}` - Fetch a single category
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route("/categories/{id}", get(get_category_handler))
}

/// Write routes, protected by Bearer token authentication with the
/// employee role.
///
/// # Endpoints
///
/// - `POST   /categories`      - Create a category
/// - `PUT    /categories/{id}` - Replace a category
/// - `DELETE /categories/{id}` - Delete a category
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", post(create_category_handler))
        .route(
            "/categories/{id}",
            put(update_category_handler).delete(delete_category_handler),
        )
}
