//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//! API 層でこのエラーを HTTP レスポンスに変換する。

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Error)]
pub enum InfraError {
    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラーなど。
    #[error("データベースエラー: {0}")]
    Database(#[from] sqlx::Error),

    /// マイグレーションの適用に失敗した
    #[error("マイグレーションエラー: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// 存在しないエンティティへの参照（外部キー制約違反）
    ///
    /// 原因はクライアント入力にある（例: 存在しないユーザーを著者に指定）。
    #[error("参照先が存在しません: {0}")]
    InvalidReference(String),

    /// 一意制約違反
    ///
    /// 例: 既に登録済みのメールアドレスでユーザーを作成しようとした。
    #[error("既に存在します: {0}")]
    Conflict(String),

    /// 予期しないエラー
    ///
    /// DB に格納された値がドメインの型に変換できない場合など。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}
