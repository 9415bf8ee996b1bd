//! PostgreSQL implementation of category repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Category, CategoryUpdate, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use serde_json::json;

/// PostgreSQL repository for the category catalog.
///
/// Updates are compare-and-swap on the `version` column: a stale version
/// claim leaves the row untouched and surfaces as a conflict. Deletes are
/// hard deletes.
pub struct PgCategoryRepository {
    pool: Arc<PgPool>,
}

/// Row shape shared by every category query.
#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    title: String,
    description: Option<String>,
    version: i64,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<CategoryRow> for Category {
    fn from(r: CategoryRow) -> Self {
        Category::new(
            r.id,
            r.title,
            r.description,
            r.version,
            r.created_at,
            r.updated_at,
        )
    }
}

impl PgCategoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, title, description, version, created_at, updated_at
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, title, description, version, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Category::from))
    }

    async fn insert(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description, version, created_at, updated_at
            "#,
        )
        .bind(new_category.title)
        .bind(new_category.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, update: CategoryUpdate) -> Result<Category, AppError> {
        // Compare-and-swap: a NULL expected version writes unconditionally.
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories SET
                title       = $2,
                description = $3,
                version     = version + 1,
                updated_at  = NOW()
            WHERE id = $1 AND ($4::BIGINT IS NULL OR version = $4)
            RETURNING id, title, description, version, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.expected_version)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(row) = row {
            return Ok(row.into());
        }

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        if exists {
            Err(AppError::conflict(
                "This record has already been updated",
                json!({"id": id, "expected_version": update.expected_version}),
            ))
        } else {
            Err(AppError::not_found("Category not found", json!({"id": id})))
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Category not found", json!({"id": id})));
        }

        Ok(())
    }
}
