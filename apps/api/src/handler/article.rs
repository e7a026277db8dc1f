//! # 記事ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /articles?page&limit&sort_type&sort_by&search` - 記事一覧
//! - `POST /articles` - 記事作成（著者は `X-User-Id` ヘッダ）
//! - `GET /articles/{id}` - 記事の取得
//!
//! 認証はこのサービスの外側で行い、認証済みユーザーの ID を `X-User-Id` で受け取る。

use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use quill_domain::{article::ArticleId, user::UserId};
use quill_shared::links::parse_query;
use serde::Deserialize;

use crate::{
    error::ApiError,
    usecase::{ArticleUseCaseImpl, CreateArticleInput},
};

/// 認証済みユーザーの ID を運ぶヘッダ
pub const USER_ID_HEADER: &str = "x-user-id";

/// 記事 API の共有状態
pub struct ArticleState {
    pub usecase: ArticleUseCaseImpl,
}

/// 記事作成リクエスト
///
/// 必須項目の欠落はドメインの検証でまとめて報告するため、すべて任意で受け取る。
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title:  Option<String>,
    pub body:   Option<String>,
    pub cover:  Option<String>,
    pub status: Option<String>,
}

/// `X-User-Id` ヘッダから著者を取り出す
///
/// ヘッダがなければ `None`（著者必須の検証はドメインで行う）。
fn author_from_headers(headers: &HeaderMap) -> Result<Option<UserId>, ApiError> {
    let Some(value) = headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| ApiError::InvalidParameter(format!("invalid {USER_ID_HEADER} header")))?;
    Ok(Some(value.parse()?))
}

/// GET /articles
///
/// クエリ文字列は一度だけデコードし、クエリ計画とリンク生成の両方に使う。
#[tracing::instrument(skip_all)]
pub async fn list_articles(
    State(state): State<Arc<ArticleState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, ApiError> {
    let query = parse_query(uri.query().unwrap_or_default());

    let response = state.usecase.list_articles(uri.path(), &query).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// GET /articles/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 記事
/// - `400 Bad Request`: ID の形式が不正
/// - `404 Not Found`: 記事が存在しない
#[tracing::instrument(skip_all)]
pub async fn get_article(
    State(state): State<Arc<ArticleState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ArticleId = id.parse()?;

    let response = state.usecase.get_article(&id).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// POST /articles
///
/// ## レスポンス
///
/// - `201 Created`: 作成された記事
/// - `400 Bad Request`: 必須項目の欠落、不正なステータス、存在しない著者
#[tracing::instrument(skip_all)]
pub async fn create_article(
    State(state): State<Arc<ArticleState>>,
    headers: HeaderMap,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::InvalidParameter(rejection.body_text()))?;

    let input = CreateArticleInput {
        title:     req.title,
        body:      req.body,
        cover:     req.cover,
        status:    req.status,
        author_id: author_from_headers(&headers)?,
    };

    let response = state.usecase.create_article(input).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
