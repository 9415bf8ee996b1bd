//! Repository trait for category persistence.

use crate::domain::entities::{Category, CategoryUpdate, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the category collection.
///
/// The repository is the sole owner of durable category state; callers
/// hold no entity state between requests. Reads are plain snapshots with
/// no change tracking attached.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_category.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Lists all categories in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Category>, AppError>;

    /// Finds a category by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Inserts a new category, assigning its ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on constraint violations.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Replaces a category record, bumping its version.
    ///
    /// When `update.expected_version` is set, the write only succeeds if
    /// the stored version still matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Conflict`] if the stored version no longer
    /// matches `expected_version`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: CategoryUpdate) -> Result<Category, AppError>;

    /// Hard-deletes a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
