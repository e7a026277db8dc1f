//! # Quill 初期データ投入
//!
//! 記事の著者として使うユーザーを作成する。マイグレーションを適用してから投入する。
//!
//! ```bash
//! DATABASE_URL=postgres://... SEED_USER_COUNT=10 cargo run -p quill-api --bin quill-seed
//! ```

use quill_api::{config::SeedConfig, seed::seed_users};
use quill_infra::{db, repository::PostgresUserRepository};
use quill_shared::observability::{LogFormat, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());

    let config = SeedConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    let repository = PostgresUserRepository::new(pool);
    let users = seed_users(&repository, config.user_count, &mut rand::rng()).await?;

    for user in &users {
        tracing::info!(id = %user.id(), name = user.name(), email = user.email(), "ユーザーを作成しました");
    }
    tracing::info!(count = users.len(), "初期データの投入が完了しました");

    Ok(())
}
