//! # UserRepository
//!
//! 記事の著者となるユーザーの永続化を担当するリポジトリ。
//! 著者名の解決は記事側の LEFT JOIN で行うため、ここでは作成のみを提供する。

use async_trait::async_trait;
use quill_domain::user::User;
use sqlx::PgPool;

use crate::InfraError;

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ユーザーを挿入する
    ///
    /// メールアドレスが登録済みの場合は [`InfraError::Conflict`]。
    async fn insert(&self, user: &User) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(id = %user.id()))]
    async fn insert(&self, user: &User) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.name())
        .bind(user.email())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                InfraError::Conflict(format!("email {}", user.email()))
            }
            other => InfraError::Database(other),
        })?;

        Ok(())
    }
}
