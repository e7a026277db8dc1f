//! # Quill ドメイン層
//!
//! 記事（Article）とその著者（User）のドメインモデル、および記事一覧クエリの
//! 組み立てを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain → shared
//! ```
//!
//! ドメイン層は `shared` のみに依存し、インフラ層（DB）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`article`] - 記事エンティティと作成時の入力検証
//! - [`article_query`] - 一覧取得のフィルタ・ソート・ページ範囲
//! - [`user`] - ユーザー（記事の著者）
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層で発生するエラーの定義

#[macro_use]
mod macros;

pub mod article;
pub mod article_query;
pub mod clock;
pub mod error;
pub mod user;

pub use error::DomainError;
