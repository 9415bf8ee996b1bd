//! Application services orchestrating business logic.

pub mod auth_service;
pub mod category_service;

pub use auth_service::{AuthService, PRIVILEGED_ROLE};
pub use category_service::CategoryService;
