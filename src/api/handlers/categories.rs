//! Handlers for category endpoints (list, get, create, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::category::{
    CategoryResponse, CreateCategoryRequest, MessageResponse, UpdateCategoryRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories.
///
/// # Endpoint
///
/// `GET /v1/categories`
///
/// # Caching
///
/// The response carries a short shared-cache hint
/// (`Cache-Control: public, max-age=N`) varying by `User-Agent`, so
/// intermediaries may serve the list for a few seconds without hitting
/// the database.
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.category_service.list_categories().await?;

    let items: Vec<CategoryResponse> = categories.into_iter().map(CategoryResponse::from).collect();

    let headers = [
        (
            header::CACHE_CONTROL,
            format!("public, max-age={}", state.list_cache_max_age),
        ),
        (header::VARY, "User-Agent".to_string()),
    ];

    Ok((headers, Json(items)))
}

/// Retrieves a single category by id.
///
/// # Endpoint
///
/// `GET /v1/categories/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no category has the given id.
pub async fn get_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state.category_service.get_category(id).await?;

    Ok(Json(category.into()))
}

/// Creates a new category.
///
/// # Endpoint
///
/// `POST /v1/categories`
///
/// Requires the employee role (enforced by the auth route layer).
///
/// # Errors
///
/// Returns 400 Bad Request with field details if validation fails, or
/// with a creation-failure message if the store rejects the insert.
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    payload.validate()?;

    let category = state
        .category_service
        .create_category(payload.title, payload.description)
        .await?;

    Ok(Json(category.into()))
}

/// Replaces a category record.
///
/// # Endpoint
///
/// `PUT /v1/categories/{id}`
///
/// Requires the employee role (enforced by the auth route layer).
///
/// The body id must equal the path id; that check runs before shape
/// validation and before any persistence attempt.
///
/// # Errors
///
/// Returns 404 Not Found on id mismatch or unknown id.
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the record changed since it was read.
pub async fn update_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    if payload.id != id {
        return Err(AppError::not_found(
            "Category not found",
            json!({"id": id, "payload_id": payload.id}),
        ));
    }

    payload.validate()?;

    let category = state
        .category_service
        .update_category(id, payload.title, payload.description, payload.version)
        .await?;

    Ok(Json(category.into()))
}

/// Deletes a category.
///
/// # Endpoint
///
/// `DELETE /v1/categories/{id}`
///
/// Requires the employee role (enforced by the auth route layer).
///
/// # Errors
///
/// Returns 404 Not Found if the category does not exist.
/// Returns 400 Bad Request if the store rejects the delete.
pub async fn delete_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.category_service.delete_category(id).await?;

    Ok(Json(MessageResponse {
        message: "Category removed successfully".to_string(),
    }))
}
