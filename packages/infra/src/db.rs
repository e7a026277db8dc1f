//! # PostgreSQL データベース接続管理
//!
//! 接続プールの作成とスキーマのマイグレーションを行う。
//! プールはアプリケーション起動時に一度だけ作成し、リポジトリに注入して共有する。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use quill_infra::db;
//!
//! let pool = db::create_pool("postgres://localhost/quill").await?;
//! db::run_migrations(&pool).await?;
//! ```

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::InfraError;

/// PostgreSQL 接続プールを作成する
///
/// - `max_connections(10)`: 最大接続数
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト。超過時はエラー
pub async fn create_pool(database_url: &str) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// 埋め込まれたマイグレーションを順番に適用する
///
/// 適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    tracing::info!("マイグレーションを適用しました");
    Ok(())
}
