//! HTTP request handlers.

pub mod categories;
pub mod health;

pub use categories::{
    create_category_handler, delete_category_handler, get_category_handler,
    list_categories_handler, update_category_handler,
};
pub use health::health_handler;
