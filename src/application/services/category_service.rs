//! Category management service.

use crate::domain::entities::{Category, CategoryUpdate, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Maximum title length, matching the catalog schema.
const TITLE_MAX_LEN: usize = 60;
/// Minimum title length after trimming.
const TITLE_MIN_LEN: usize = 3;
/// Maximum description length.
const DESCRIPTION_MAX_LEN: usize = 255;

/// Service for managing the category catalog.
///
/// Orchestrates CRUD operations over the injected repository. The service
/// is stateless between invocations; many concurrent requests share one
/// instance over the pooled database handle.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a new category service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all categories in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a category by ID.
    ///
    /// Absence is explicit: a missing id is a not-found rejection, never
    /// an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_category(&self, id: i64) -> Result<Category, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found", json!({"id": id})))
    }

    /// Creates a new category and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the payload fails shape checks.
    /// Returns [`AppError::Conflict`] on constraint violations.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_category(
        &self,
        title: String,
        description: Option<String>,
    ) -> Result<Category, AppError> {
        let title = self.validate_title(title)?;
        let description = self.validate_description(description)?;

        self.repository
            .insert(NewCategory { title, description })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } | AppError::Validation { .. } => e,
                _ => AppError::bad_request("Could not create the category", json!({})),
            })
    }

    /// Replaces a category record.
    ///
    /// `expected_version`, when supplied, is the version the caller read;
    /// a stale value is rejected as a concurrency conflict so the caller
    /// can re-fetch and retry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the payload fails shape checks.
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Conflict`] if the record changed since it was read.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_category(
        &self,
        id: i64,
        title: String,
        description: Option<String>,
        expected_version: Option<i64>,
    ) -> Result<Category, AppError> {
        let title = self.validate_title(title)?;
        let description = self.validate_description(description)?;

        self.repository
            .update(
                id,
                CategoryUpdate {
                    title,
                    description,
                    expected_version,
                },
            )
            .await
            .map_err(|e| match e {
                AppError::NotFound { .. } | AppError::Conflict { .. } => e,
                _ => AppError::bad_request("Could not update the category", json!({"id": id})),
            })
    }

    /// Deletes a category.
    ///
    /// The category must currently exist; the lookup happens before the
    /// delete statement so a missing id never reaches the store mutation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_category(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found", json!({"id": id})))?;

        self.repository.delete(id).await.map_err(|e| match e {
            AppError::NotFound { .. } => e,
            _ => AppError::bad_request("Could not remove the category", json!({"id": id})),
        })
    }

    /// Validates and normalizes a category title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is blank or outside
    /// the allowed length range.
    fn validate_title(&self, title: String) -> Result<String, AppError> {
        let title = title.trim().to_string();

        if title.len() < TITLE_MIN_LEN || title.len() > TITLE_MAX_LEN {
            return Err(AppError::bad_request(
                "Invalid title length",
                json!({"min": TITLE_MIN_LEN, "max": TITLE_MAX_LEN}),
            ));
        }

        Ok(title)
    }

    /// Validates an optional description.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the description is too long.
    fn validate_description(
        &self,
        description: Option<String>,
    ) -> Result<Option<String>, AppError> {
        if let Some(ref d) = description {
            if d.len() > DESCRIPTION_MAX_LEN {
                return Err(AppError::bad_request(
                    "Invalid description length",
                    json!({"max": DESCRIPTION_MAX_LEN}),
                ));
            }
        }

        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCategoryRepository;
    use chrono::Utc;

    fn create_test_category(id: i64, title: &str, version: i64) -> Category {
        Category::new(id, title.to_string(), None, version, Utc::now(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_category_success() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_insert()
            .withf(|new| new.title == "Books")
            .times(1)
            .returning(|_| Ok(create_test_category(1, "Books", 1)));

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.create_category("Books".to_string(), None).await;

        assert!(result.is_ok());
        let category = result.unwrap();
        assert_eq!(category.id, 1);
        assert_eq!(category.title, "Books");
    }

    #[tokio::test]
    async fn test_create_category_trims_title() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_insert()
            .withf(|new| new.title == "Books")
            .times(1)
            .returning(|_| Ok(create_test_category(1, "Books", 1)));

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.create_category("  Books  ".to_string(), None).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_category_title_too_short() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.create_category("ab".to_string(), None).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_category_title_too_long() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.create_category("x".repeat(61), None).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_category_description_too_long() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service
            .create_category("Books".to_string(), Some("x".repeat(256)))
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_category_store_failure_is_creation_failure() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.create_category("Books".to_string(), None).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Could not create the category");
    }

    #[tokio::test]
    async fn test_get_category_success() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(create_test_category(1, "Books", 1))));

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.get_category(1).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().title, "Books");
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.get_category(42).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_category_conflict_passes_through() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo.expect_update().times(1).returning(|_, _| {
            Err(AppError::conflict(
                "This record has already been updated",
                serde_json::json!({}),
            ))
        });

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service
            .update_category(1, "Books".to_string(), None, Some(1))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_category_invalid_title_skips_store() {
        // No expectations set: any repository call would panic the test.
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service
            .update_category(1, "".to_string(), None, None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_category_success() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(create_test_category(1, "Books", 1))));
        mock_repo
            .expect_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let service = CategoryService::new(Arc::new(mock_repo));

        assert!(service.delete_category(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_category_not_found_skips_delete() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        // expect_delete deliberately absent: deleting must not be attempted.

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.delete_category(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_categories() {
        let mut mock_repo = MockCategoryRepository::new();

        let categories = vec![
            create_test_category(1, "Books", 1),
            create_test_category(2, "Music", 1),
        ];

        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(categories.clone()));

        let service = CategoryService::new(Arc::new(mock_repo));

        let result = service.list_categories().await;

        assert!(result.is_ok());
        let list = result.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 1);
    }
}
