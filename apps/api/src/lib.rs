//! # Quill API サーバー
//!
//! ブログ記事 REST API の HTTP 境界。
//!
//! ## アーキテクチャ
//!
//! ```text
//! handler（axum） ──▶ usecase ──▶ ArticleRepository（infra）
//!                        │
//!                        └──▶ projection / pagination / links（shared）
//! ```
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`seed`] - 著者ユーザーの初期データ投入（`quill-seed` バイナリ）
//! - [`usecase`] - 一覧クエリの実行とレスポンスの組み立て

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod seed;
pub mod usecase;
