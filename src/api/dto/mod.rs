//! Request and response DTOs for the REST API.

pub mod category;
pub mod health;

pub use category::{
    CategoryResponse, CreateCategoryRequest, MessageResponse, UpdateCategoryRequest,
};
pub use health::HealthResponse;
