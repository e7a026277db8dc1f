//! # Quill Infrastructure Layer
//!
//! 記事ストア（PostgreSQL）との接続とリポジトリ実装を提供する。
//!
//! ## モジュール構成
//!
//! - [`db`]: 接続プールの作成とマイグレーション
//! - [`error`]: インフラ層のエラー定義
//! - [`repository`]: リポジトリトレイトと PostgreSQL 実装
//! - `mock`: インメモリ実装（`test-utils` feature）

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::InfraError;
