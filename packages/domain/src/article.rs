//! # 記事
//!
//! ブログ記事エンティティと、その作成時の入力検証を定義する。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use quill_domain::{
//!     article::{Article, ArticleId, ArticleStatus, NewArticle},
//!     user::UserId,
//! };
//!
//! let input = NewArticle::new(
//!     Some("Rust 入門".to_string()),
//!     None,
//!     None,
//!     None,
//!     Some(UserId::new()),
//! )?;
//! let article = Article::new(ArticleId::new(), input, chrono::Utc::now());
//!
//! assert_eq!(article.status(), ArticleStatus::Draft);
//! assert_eq!(article.created_at(), article.updated_at());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::IntoStaticStr;

use crate::{DomainError, user::UserId};

define_uuid_id! {
    /// 記事の一意識別子
    pub struct ArticleId;
}

/// 記事の公開状態
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArticleStatus {
    /// 下書き
    #[default]
    Draft,
    /// 公開済み
    Published,
}

/// 記事の作成入力
///
/// HTTP 層から受け取った任意項目にデフォルト値を補い、必須項目を検証した結果。
///
/// # 不変条件
///
/// - `title` は空白のみではない
/// - 著者が特定されている
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    title:     String,
    body:      String,
    cover:     String,
    status:    ArticleStatus,
    author_id: UserId,
}

impl NewArticle {
    /// 入力を検証して作成入力を組み立てる
    ///
    /// - `body`, `cover` の省略時は空文字列
    /// - `status` の省略時は `draft`
    ///
    /// 違反はまとめて [`DomainError::Validation`] で返す。
    pub fn new(
        title: Option<String>,
        body: Option<String>,
        cover: Option<String>,
        status: Option<String>,
        author_id: Option<UserId>,
    ) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        let title = title.map(|t| t.trim().to_string()).unwrap_or_default();
        if title.is_empty() {
            errors.push("title is required".to_string());
        }

        if author_id.is_none() {
            errors.push("author is required".to_string());
        }

        let status = match status.as_deref() {
            None => ArticleStatus::default(),
            Some(value) => value.parse().unwrap_or_else(|_| {
                errors.push(format!("status must be one of draft, published: {value}"));
                ArticleStatus::default()
            }),
        };

        match author_id {
            Some(author_id) if errors.is_empty() => Ok(Self {
                title,
                body: body.unwrap_or_default(),
                cover: cover.unwrap_or_default(),
                status,
                author_id,
            }),
            _ => Err(DomainError::Validation(errors)),
        }
    }
}

/// 記事エンティティ
///
/// `author_id` は著者ユーザーの参照。ユーザーが削除された記事では `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id:         ArticleId,
    title:      String,
    body:       String,
    cover:      String,
    status:     ArticleStatus,
    author_id:  Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Article {
    /// 新しい記事を作成する（作成日時 = 更新日時 = `now`）
    pub fn new(id: ArticleId, input: NewArticle, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            body: input.body,
            cover: input.cover,
            status: input.status,
            author_id: Some(input.author_id),
            created_at: now,
            updated_at: now,
        }
    }

    /// データベースから記事を復元する
    #[allow(clippy::too_many_arguments)]
    pub fn from_db(
        id: ArticleId,
        title: String,
        body: String,
        cover: String,
        status: ArticleStatus,
        author_id: Option<UserId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            body,
            cover,
            status,
            author_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn cover(&self) -> &str {
        &self.cover
    }

    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    pub fn author_id(&self) -> Option<&UserId> {
        self.author_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// 著者名を解決済みの記事
///
/// ドキュメントストアの join（populate）結果。参照先のユーザーが存在しなければ
/// `author_name` は `None` になる（エラーにはしない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoredArticle {
    pub article:     Article,
    pub author_name: Option<String>,
}

impl AuthoredArticle {
    pub fn new(article: Article, author_name: Option<String>) -> Self {
        Self {
            article,
            author_name,
        }
    }

    /// レスポンス整形の入力となるレコードに変換する
    ///
    /// 著者はネストしたオブジェクト `{"id", "name"}` として表現する。
    /// 著者が不明でもキーは常に存在し、値が `null` になる。
    pub fn to_record(&self) -> Value {
        let article = &self.article;
        json!({
            "id": article.id().to_string(),
            "title": article.title(),
            "body": article.body(),
            "cover": article.cover(),
            "status": article.status().to_string(),
            "author": {
                "id": article.author_id().map(ToString::to_string),
                "name": self.author_name,
            },
            "createdAt": article.created_at().to_rfc3339(),
            "updatedAt": article.updated_at().to_rfc3339(),
        })
    }
}
