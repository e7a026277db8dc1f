//! # API レスポンスエンベロープ
//!
//! 単一リソースのレスポンス形式を提供する。
//!
//! - 取得: `{ "data": T, "links": { "self": ... } }`
//! - 作成: `{ "code": 201, "message": "...", "data": T, "links": { "self": ... } }`

use serde::{Deserialize, Serialize};

use crate::LinkSet;

/// 単一リソースのレスポンス型
///
/// ## 使用例
///
/// ```
/// use quill_shared::{ApiResponse, LinkSet};
///
/// let response = ApiResponse::new("hello").with_links(LinkSet::self_only("/greetings/1"));
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data:  T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<LinkSet>,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data, links: None }
    }

    pub fn with_links(mut self, links: LinkSet) -> Self {
        self.links = Some(links);
        self
    }
}

/// リソース作成時のレスポンス型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse<T> {
    pub code:    u16,
    pub message: String,
    pub data:    T,
    pub links:   LinkSet,
}

impl<T> CreatedResponse<T> {
    /// 201 の作成レスポンスを作成する
    pub fn new(message: impl Into<String>, data: T, links: LinkSet) -> Self {
        Self {
            code: 201,
            message: message.into(),
            data,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linksがなければdataだけを出力する() {
        let response = ApiResponse::new("hello");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": "hello" }));
    }

    #[test]
    fn test_linksを付けるとselfを出力する() {
        let response = ApiResponse::new(1).with_links(LinkSet::self_only("/articles/1"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "data": 1, "links": { "self": "/articles/1" } })
        );
    }

    #[test]
    fn test_作成レスポンスはcode_201を持つ() {
        let response = CreatedResponse::new(
            "Article created successfully",
            serde_json::json!({"id": 1}),
            LinkSet::self_only("/articles/1"),
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": 201,
                "message": "Article created successfully",
                "data": {"id": 1},
                "links": {"self": "/articles/1"}
            })
        );
    }
}
