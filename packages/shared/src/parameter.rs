//! # 不正パラメータエラー
//!
//! 呼び出し側が渡した値（page, limit など）が前提条件を満たさない場合のエラー。
//! API 層で 400 Bad Request に変換される。

use thiserror::Error;

/// 前提条件を満たさないパラメータ
///
/// メッセージはそのままクライアントに返すため、人間可読な文にする。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidParameter(pub String);

impl InvalidParameter {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// メッセージを取得する
    pub fn message(&self) -> &str {
        &self.0
    }
}
