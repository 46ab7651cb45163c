// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_tusker;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_tusker::{PostgresTuskerReadRepository, PostgresTuskerWriteRepository};
pub use postgres_user::PostgresUserRepository;
