//! # ページネーション付きレスポンス
//!
//! 一覧 API のレスポンス形式 `{ data, pagination, links }` を提供する。

use serde::{Deserialize, Serialize};

use crate::{LinkSet, PaginationPlan};

/// ページネーション付きレスポンス
///
/// `ApiResponse<T>` が単一データ用であるのに対し、
/// `PaginatedResponse<T>` はリスト + ページ番号ベースのページネーション形式。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "pagination": { "page": 1, "limit": 10, "totalItems": 25, "totalPage": 3, "next": 2 },
///   "links": { "self": "/articles?page=1", "next": "/articles?page=2" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data:       Vec<T>,
    pub pagination: PaginationPlan,
    pub links:      LinkSet,
}
