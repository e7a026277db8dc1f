//! # ドメイン層エラー定義
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `InvalidParameter` | 400 Bad Request | page / limit / ソート指定などの不正 |
//! | `Validation` | 400 Bad Request | 記事作成時の必須項目欠落など（複数件） |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |

use quill_shared::InvalidParameter;
use thiserror::Error;

/// 記事作成などの入力検証に失敗したときの固定メッセージ
pub const INVALID_PARAMETERS_MESSAGE: &str = "Invalid parameters";

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 単一パラメータの不正
    ///
    /// メッセージはクライアントにそのまま返す。
    #[error("{0}")]
    InvalidParameter(String),

    /// 入力検証エラー
    ///
    /// 検出したすべての違反を `errors` に列挙する。
    #[error("Invalid parameters: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Article" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}

impl From<InvalidParameter> for DomainError {
    fn from(value: InvalidParameter) -> Self {
        Self::InvalidParameter(value.0)
    }
}
