//! Repository traits decoupling services from the persistence engine.

pub mod category_repository;
pub mod token_repository;

pub use category_repository::CategoryRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
