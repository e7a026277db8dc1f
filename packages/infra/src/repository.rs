//! # リポジトリ
//!
//! ドメインエンティティの永続化を担当する。
//! ユースケース層はトレイトに依存し、具体的な実装（PostgreSQL / インメモリ）を知らない。

pub mod article_repository;
pub mod user_repository;

pub use article_repository::{ArticleRepository, PostgresArticleRepository};
pub use user_repository::{PostgresUserRepository, UserRepository};
