//! # Quill API サーバー
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p quill-api
//!
//! # 本番環境
//! LOG_FORMAT=json DATABASE_URL=postgres://... ./quill-api
//! ```
//!
//! 環境変数は [`quill_api::config`] を参照。

use std::sync::Arc;

use quill_api::{
    app::build_router,
    config::ApiConfig,
    handler::ArticleState,
    usecase::ArticleUseCaseImpl,
};
use quill_domain::clock::SystemClock;
use quill_infra::{db, repository::PostgresArticleRepository};
use quill_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());

    let config = ApiConfig::from_env()?;
    tracing::info!(
        "Quill API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("データベースに接続しました");

    if config.run_migrations {
        db::run_migrations(&pool).await?;
    }

    let article_repository = Arc::new(PostgresArticleRepository::new(pool));
    let usecase = ArticleUseCaseImpl::new(article_repository, Arc::new(SystemClock));
    let app = build_router(Arc::new(ArticleState { usecase }));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("リクエストの受付を開始しました: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Ctrl+C で停止要求を受け取る
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("シグナルハンドラの登録に失敗しました: {e}");
    }
    tracing::info!("シャットダウンします");
}
