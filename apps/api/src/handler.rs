//! # HTTP ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /health` - ヘルスチェック
//! - `GET /articles` - 記事一覧（検索・ソート・ページネーション）
//! - `POST /articles` - 記事作成
//! - `GET /articles/{id}` - 記事の取得

pub mod article;
pub mod health;

pub use article::{ArticleState, create_article, get_article, list_articles};
pub use health::health_check;
