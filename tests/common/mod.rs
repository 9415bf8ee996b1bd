#![allow(dead_code)]

use hmac::{Hmac, Mac};
use sha2::Sha256;
use shop_catalog::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_LIST_CACHE_MAX_AGE: u64 = 30;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        TEST_SIGNING_SECRET.to_string(),
        TEST_LIST_CACHE_MAX_AGE,
    )
}

pub async fn create_test_category(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (title) VALUES ($1) RETURNING id")
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_categories(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn category_title(pool: &PgPool, id: i64) -> Option<String> {
    sqlx::query_scalar("SELECT title FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

/// Mirrors the HMAC hashing the auth service performs.
pub fn hash_token(token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(TEST_SIGNING_SECRET.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

pub async fn create_api_token(pool: &PgPool, name: &str, role: &str, token: &str) {
    sqlx::query("INSERT INTO api_tokens (name, token_hash, role) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(hash_token(token))
        .bind(role)
        .execute(pool)
        .await
        .unwrap();
}
