//! Category entity, the sole resource managed by this service.

use chrono::{DateTime, Utc};

/// A product category.
///
/// `id` is assigned by the database and immutable afterwards. `version` is
/// the optimistic-concurrency token: it starts at 1 and every successful
/// update increments it, so a writer holding a stale version is detected
/// at write time instead of silently overwriting.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        id: i64,
        title: String,
        description: Option<String>,
        version: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            version,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a category. The id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub title: String,
    pub description: Option<String>,
}

/// Input data for replacing a category record.
///
/// Updates are whole-record replacements, not partial patches: `title` and
/// `description` overwrite the stored values. `expected_version` carries
/// the version the caller read; `None` means an unconditional write, while
/// a stale value makes the store reject the update as a conflict.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub title: String,
    pub description: Option<String>,
    pub expected_version: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_category_creation() {
        let now = Utc::now();
        let category = Category::new(
            1,
            "Books".to_string(),
            Some("Printed media".to_string()),
            1,
            now,
            now,
        );

        assert_eq!(category.id, 1);
        assert_eq!(category.title, "Books");
        assert_eq!(category.description, Some("Printed media".to_string()));
        assert_eq!(category.version, 1);
    }

    #[test]
    fn test_new_category_without_description() {
        let new_category = NewCategory {
            title: "Electronics".to_string(),
            description: None,
        };

        assert_eq!(new_category.title, "Electronics");
        assert!(new_category.description.is_none());
    }

    #[test]
    fn test_update_without_version_claim() {
        let update = CategoryUpdate {
            title: "Books & Media".to_string(),
            description: None,
            expected_version: None,
        };

        assert!(update.expected_version.is_none());
    }
}
