//! # API エラーハンドリング
//!
//! 各層のエラーを HTTP レスポンスに変換する。
//!
//! ## エラーの階層
//!
//! ```text
//! InvalidParameter / ProjectionError (shared)
//! DomainError (domain)                      ──▶ ApiError ──▶ StatusCode + ErrorResponse
//! InfraError (infra)
//! ```
//!
//! | ApiError | ステータス | message |
//! |----------|-----------|---------|
//! | `InvalidParameter` | 400 | パラメータのエラー内容 |
//! | `Validation` | 400 | `Invalid parameters`（詳細は `errors`） |
//! | `NotFound` | 404 | `<Entity> not found` |
//! | `Projection` / `Infra` | 500 | 固定メッセージ（詳細はログのみ） |
//!
//! 存在しない著者への参照（外部キー違反）はクライアント入力の問題なので 400 にする。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quill_domain::{DomainError, error::INVALID_PARAMETERS_MESSAGE};
use quill_infra::InfraError;
use quill_shared::{ErrorResponse, InvalidParameter, ProjectionError};
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidParameter(String),

    #[error("入力検証エラー: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        entity_type: &'static str,
        id:          String,
    },

    #[error("レスポンスの整形に失敗しました: {0}")]
    Projection(#[from] ProjectionError),

    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidParameter(message) => Self::InvalidParameter(message),
            DomainError::Validation(errors) => Self::Validation(errors),
            DomainError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
        }
    }
}

impl From<InvalidParameter> for ApiError {
    fn from(err: InvalidParameter) -> Self {
        Self::InvalidParameter(err.0)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::InvalidParameter(message) => ErrorResponse::bad_request(message),
            ApiError::Validation(errors) => {
                ErrorResponse::bad_request(INVALID_PARAMETERS_MESSAGE).with_errors(errors)
            }
            ApiError::NotFound { entity_type, .. } => {
                ErrorResponse::not_found(format!("{entity_type} not found"))
            }
            ApiError::Infra(InfraError::InvalidReference(field)) => {
                ErrorResponse::bad_request(INVALID_PARAMETERS_MESSAGE)
                    .with_errors(vec![format!("{field} does not exist")])
            }
            other => {
                tracing::error!(error = %other, "リクエストの処理に失敗しました");
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_パラメータ不正は400でメッセージをそのまま返す() {
        let err: ApiError = InvalidParameter::new("limit must be a positive integer").into();

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"status": 400, "message": "limit must be a positive integer"})
        );
    }

    #[tokio::test]
    async fn test_検証エラーは400で違反を列挙する() {
        let err: ApiError = DomainError::Validation(vec!["title is required".to_string()]).into();

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "status": 400,
                "message": "Invalid parameters",
                "errors": ["title is required"]
            })
        );
    }

    #[tokio::test]
    async fn test_not_foundは404() {
        let err: ApiError = DomainError::NotFound {
            entity_type: "Article",
            id:          "x".to_string(),
        }
        .into();

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"status": 404, "message": "Article not found"}));
    }

    #[tokio::test]
    async fn test_存在しない参照は400() {
        let err: ApiError = InfraError::InvalidReference("author".to_string()).into();

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"], json!(["author does not exist"]));
    }

    #[tokio::test]
    async fn test_整形エラーは詳細を隠して500() {
        let err: ApiError = ProjectionError::OriginMissing("doc".to_string()).into();

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"status": 500, "message": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_インフラエラーは詳細を隠して500() {
        let err: ApiError = InfraError::Unexpected("不正な記事ステータスです: archived".to_string()).into();

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
    }
}
