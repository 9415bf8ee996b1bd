//! PostgreSQL repository implementations.

pub mod pg_category_repository;
pub mod pg_token_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_token_repository::PgTokenRepository;
