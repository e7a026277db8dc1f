//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務（shared に axum 依存を入れない）
//! - `errors` は個別の検証エラーがある場合だけ出力する
//!
//! ## JSON 形式
//!
//! ```json
//! { "status": 400, "message": "Invalid parameters", "errors": ["title is required"] }
//! ```

use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status:  u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors:  Vec<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// 個別のエラー詳細を付与する
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    /// 500 Internal Server Error
    ///
    /// message は固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errorsが空なら出力しない() {
        let json = serde_json::to_value(ErrorResponse::bad_request("Invalid parameters")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"status": 400, "message": "Invalid parameters"})
        );
    }

    #[test]
    fn test_errorsがあれば配列で出力する() {
        let error = ErrorResponse::bad_request("Invalid parameters")
            .with_errors(vec!["title is required".to_string()]);
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["errors"], serde_json::json!(["title is required"]));
    }

    #[test]
    fn test_各コンストラクタのstatusが正しい() {
        assert_eq!(ErrorResponse::bad_request("").status, 400);
        assert_eq!(ErrorResponse::not_found("").status, 404);
        assert_eq!(ErrorResponse::internal_error().status, 500);
    }

    #[test]
    fn test_errorsがないjsonもデシリアライズできる() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"status": 404, "message": "Not Found"}"#).unwrap();

        assert_eq!(error, ErrorResponse::not_found("Not Found"));
    }
}
