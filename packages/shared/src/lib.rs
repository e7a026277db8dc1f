//! # Quill 共有ユーティリティ
//!
//! API レスポンスの整形に使う純粋なユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, api）から依存される
//! - HTTP フレームワークやデータベースには依存しない
//! - 入力はすべて引数で受け取り、新しい値を返す（共有可変状態を持たない）
//!
//! ## モジュール構成
//!
//! - [`projection`] - レコードの整形（rename / add / remove / transform / flatten）
//! - [`pagination`] - ページネーション情報の計算
//! - [`links`] - HATEOAS リンク（self / next / prev）とクエリ文字列の組み立て
//! - [`paginated_response`] / [`api_response`] / [`error_response`] - レスポンスエンベロープ
//! - [`observability`] - トレーシング初期化（`observability` feature）

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod links;
pub mod observability;
pub mod paginated_response;
pub mod pagination;
pub mod parameter;
pub mod projection;

pub use api_response::{ApiResponse, CreatedResponse};
pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use links::{LinkSet, QueryPairs};
pub use paginated_response::PaginatedResponse;
pub use pagination::PaginationPlan;
pub use parameter::InvalidParameter;
pub use projection::{ProjectionConfig, ProjectionError, Record};
