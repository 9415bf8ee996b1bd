//! DTOs for category endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /v1/categories`.
///
/// No id is accepted: the server assigns one on insert.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 3, max = 60, message = "Title must be 3 to 60 characters"))]
    pub title: String,

    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    pub description: Option<String>,
}

/// Request body for `PUT /v1/categories/{id}`.
///
/// Whole-record replace: `title` and `description` overwrite the stored
/// values. `id` must match the path id. `version` is optional; when
/// supplied it must match the stored version or the update is rejected as
/// a concurrency conflict.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    pub id: i64,

    #[validate(length(min = 3, max = 60, message = "Title must be 3 to 60 characters"))]
    pub title: String,

    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    pub description: Option<String>,

    pub version: Option<i64>,
}

/// JSON representation of a category.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::domain::entities::Category> for CategoryResponse {
    fn from(c: crate::domain::entities::Category) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            version: c.version,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Success confirmation payload for operations without a resource body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
