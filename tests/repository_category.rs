mod common;

use shop_catalog::domain::entities::{CategoryUpdate, NewCategory};
use shop_catalog::domain::repositories::category_repository::CategoryRepository;
use shop_catalog::error::AppError;
use shop_catalog::infrastructure::persistence::PgCategoryRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn make_repo(pool: PgPool) -> PgCategoryRepository {
    PgCategoryRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_insert_assigns_id_and_version(pool: PgPool) {
    let repo = make_repo(pool);

    let category = repo
        .insert(NewCategory {
            title: "Books".to_string(),
            description: Some("Printed media".to_string()),
        })
        .await
        .unwrap();

    assert!(category.id > 0);
    assert_eq!(category.title, "Books");
    assert_eq!(category.description, Some("Printed media".to_string()));
    assert_eq!(category.version, 1);
}

#[sqlx::test]
async fn test_find_by_id_round_trip(pool: PgPool) {
    let repo = make_repo(pool);

    let created = repo
        .insert(NewCategory {
            title: "Books".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[sqlx::test]
async fn test_find_by_id_absent(pool: PgPool) {
    let repo = make_repo(pool);

    let found = repo.find_by_id(4242).await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_list_is_insertion_ordered(pool: PgPool) {
    let repo = make_repo(pool);

    for title in ["Books", "Music", "Games"] {
        repo.insert(NewCategory {
            title: title.to_string(),
            description: None,
        })
        .await
        .unwrap();
    }

    let categories = repo.list().await.unwrap();

    let titles: Vec<&str> = categories.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Books", "Music", "Games"]);
}

#[sqlx::test]
async fn test_update_bumps_version(pool: PgPool) {
    let repo = make_repo(pool);

    let created = repo
        .insert(NewCategory {
            title: "Books".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            CategoryUpdate {
                title: "Books & Media".to_string(),
                description: None,
                expected_version: Some(1),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Books & Media");
    assert_eq!(updated.version, 2);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn test_update_with_stale_version_is_conflict(pool: PgPool) {
    let repo = make_repo(pool);

    let created = repo
        .insert(NewCategory {
            title: "Books".to_string(),
            description: None,
        })
        .await
        .unwrap();

    repo.update(
        created.id,
        CategoryUpdate {
            title: "Books & Media".to_string(),
            description: None,
            expected_version: Some(1),
        },
    )
    .await
    .unwrap();

    let result = repo
        .update(
            created.id,
            CategoryUpdate {
                title: "Stale write".to_string(),
                description: None,
                expected_version: Some(1),
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));

    // The losing write changed nothing.
    let current = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(current.title, "Books & Media");
    assert_eq!(current.version, 2);
}

#[sqlx::test]
async fn test_update_absent_is_not_found(pool: PgPool) {
    let repo = make_repo(pool);

    let result = repo
        .update(
            4242,
            CategoryUpdate {
                title: "Ghost".to_string(),
                description: None,
                expected_version: None,
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_update_without_expected_version_is_unconditional(pool: PgPool) {
    let repo = make_repo(pool);

    let created = repo
        .insert(NewCategory {
            title: "Books".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            CategoryUpdate {
                title: "Books & Media".to_string(),
                description: Some("Replaced".to_string()),
                expected_version: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.version, 2);
    assert_eq!(updated.description, Some("Replaced".to_string()));
}

#[sqlx::test]
async fn test_delete_removes_exactly_one_row(pool: PgPool) {
    let repo = make_repo(pool);

    let first = repo
        .insert(NewCategory {
            title: "Books".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let second = repo
        .insert(NewCategory {
            title: "Music".to_string(),
            description: None,
        })
        .await
        .unwrap();

    repo.delete(first.id).await.unwrap();

    assert!(repo.find_by_id(first.id).await.unwrap().is_none());
    assert!(repo.find_by_id(second.id).await.unwrap().is_some());
}

#[sqlx::test]
async fn test_delete_absent_is_not_found(pool: PgPool) {
    let repo = make_repo(pool);

    let result = repo.delete(4242).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}
