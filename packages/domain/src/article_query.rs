//! # 記事一覧クエリ
//!
//! 一覧 API のクエリパラメータ（page / limit / sort_type / sort_by / search）を、
//! ドキュメントストアに対するクエリ計画（フィルタ + ソート + skip/limit）に変換する。
//!
//! ## クエリ計画
//!
//! | 要素 | 内容 |
//! |------|------|
//! | フィルタ | `title` が `search` を大文字小文字を区別せず部分一致で含む（空なら全件） |
//! | ソート | 単一キー。デフォルトは `updatedAt` の降順 |
//! | ページ範囲 | `skip = (page - 1) * limit`, `take = limit` |
//!
//! 同じフィルタで件数クエリも発行する。2 つのクエリはトランザクションで
//! 囲まないため、同時書き込みがあると件数と取得結果がずれることがある。
//!
//! ソートキーが同値の記事の順序はストアの自然順に依存する（保証しない）。

use std::str::FromStr;

use strum::IntoStaticStr;

use crate::DomainError;

/// `page` 省略時の値
pub const DEFAULT_PAGE: i64 = 1;
/// `limit` 省略時の値
pub const DEFAULT_LIMIT: i64 = 10;

/// ソート方向
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, IntoStaticStr, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// ソートに使える記事のフィールド
///
/// クエリパラメータ `sort_by` の値（camelCase）と対応する。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, IntoStaticStr, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "camelCase")]
pub enum ArticleSortKey {
    Title,
    Status,
    CreatedAt,
    #[default]
    UpdatedAt,
}

/// 単一キーのソート指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleSort {
    pub key:       ArticleSortKey,
    pub direction: SortDirection,
}

/// タイトルの部分一致フィルタ
///
/// 大文字小文字を区別しない。正規表現やワイルドカードは解釈せず、
/// `search` をそのままの文字列として扱う。
///
/// [`matches`](Self::matches) は Unicode 全体で畳み込む。PostgreSQL の `lower()` は
/// データベースの `LC_CTYPE` に従うため、`C` ロケールでは ASCII 以外（`É` など）が
/// 畳み込まれない。本番のデータベースは UTF-8 のロケールで作成すること。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleFilter {
    search: String,
}

impl TitleFilter {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// 空の検索語はすべてのタイトルに一致する
    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.search.to_lowercase())
    }
}

/// 記事一覧のクエリ計画
///
/// リクエストごとに作成し、永続化しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    page:   i64,
    limit:  i64,
    sort:   ArticleSort,
    filter: TitleFilter,
}

impl ArticleQuery {
    /// クエリ計画を作成する
    ///
    /// # エラー
    ///
    /// `page < 1` または `limit < 1` の場合は [`DomainError::InvalidParameter`]。
    pub fn new(
        page: i64,
        limit: i64,
        sort: ArticleSort,
        filter: TitleFilter,
    ) -> Result<Self, DomainError> {
        if page < 1 {
            return Err(DomainError::InvalidParameter(
                "page must be a positive integer".to_string(),
            ));
        }
        if limit < 1 {
            return Err(DomainError::InvalidParameter(
                "limit must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            page,
            limit,
            sort,
            filter,
        })
    }

    /// デコード済みのクエリパラメータからクエリ計画を作成する
    ///
    /// 同じキーが複数ある場合は最初の値を使う。値が空文字列のキーは省略扱い。
    ///
    /// | キー | デフォルト |
    /// |------|-----------|
    /// | `page` | `1` |
    /// | `limit` | `10` |
    /// | `sort_type` | `desc` |
    /// | `sort_by` | `updatedAt` |
    /// | `search` | `""` |
    pub fn from_query(query: &[(String, String)]) -> Result<Self, DomainError> {
        let param = |name: &str| {
            query
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
                .filter(|value| !value.is_empty())
        };

        let page = parse_or(param("page"), "page", DEFAULT_PAGE)?;
        let limit = parse_or(param("limit"), "limit", DEFAULT_LIMIT)?;
        let direction = parse_or(param("sort_type"), "sort_type", SortDirection::default())?;
        let key = parse_or(param("sort_by"), "sort_by", ArticleSortKey::default())?;
        let search = param("search").unwrap_or_default();

        Self::new(
            page,
            limit,
            ArticleSort { key, direction },
            TitleFilter::new(search),
        )
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn sort(&self) -> ArticleSort {
        self.sort
    }

    pub fn filter(&self) -> &TitleFilter {
        &self.filter
    }

    /// 読み飛ばす件数 `(page - 1) * limit`
    pub fn skip(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// 取得する最大件数
    pub fn take(&self) -> i64 {
        self.limit
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, name: &str, default: T) -> Result<T, DomainError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| DomainError::InvalidParameter(format!("invalid value for {name}: {value}"))),
    }
}
