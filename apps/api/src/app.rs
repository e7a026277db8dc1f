//! # ルーター構築
//!
//! 本番の `main` とハンドラのテストで同じルーティングを使う。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::{ArticleState, create_article, get_article, health_check, list_articles};

/// アプリケーションのルーターを構築する
pub fn build_router(article_state: Arc<ArticleState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/articles", get(list_articles).post(create_article))
        .route("/articles/{id}", get(get_article))
        .with_state(article_state)
        .layer(TraceLayer::new_for_http())
}
