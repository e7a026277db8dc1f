//! # HATEOAS リンク
//!
//! 現在のリクエストのパスとクエリから、self / next / prev のナビゲーションリンクを
//! 組み立てる。
//!
//! ## クエリ文字列の扱い
//!
//! クエリはデコード済みの `(キー, 値)` の列（[`QueryPairs`]）として扱う。
//! 生の文字列を継ぎ足すのではなく、列から毎回シリアライズし直すため、
//! エンコード済みの値が二重にエンコードされることはない。
//!
//! - キーと値はそれぞれ独立にパーセントエンコードし、`&` で連結する
//! - キーの順序は入力の順序を保つ
//! - next / prev では `page` だけを差し替え、他のキーと値はそのまま残す
//!
//! ## 使用例
//!
//! ```
//! use quill_shared::{PaginationPlan, links};
//!
//! let query = links::parse_query("page=1&search=rust%20lang");
//! let plan = PaginationPlan::plan(1, 10, 25).unwrap();
//! let links = links::build_links("/articles", &query, &plan);
//!
//! assert_eq!(links.self_link, "/articles?page=1&search=rust%20lang");
//! assert_eq!(links.next.as_deref(), Some("/articles?page=2&search=rust%20lang"));
//! assert_eq!(links.prev, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::PaginationPlan;

/// デコード済みのクエリパラメータ（入力順）
pub type QueryPairs = Vec<(String, String)>;

const PAGE_KEY: &str = "page";

/// ナビゲーションリンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    #[serde(rename = "self")]
    pub self_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev:      Option<String>,
}

impl LinkSet {
    /// self だけを持つリンク（単一リソース用）
    pub fn self_only(href: impl Into<String>) -> Self {
        Self {
            self_link: href.into(),
            next:      None,
            prev:      None,
        }
    }
}

/// 生のクエリ文字列（`?` を含まない）をデコードして列にする
///
/// `application/x-www-form-urlencoded` の規則に従い、`+` は空白として扱う。
pub fn parse_query(raw: &str) -> QueryPairs {
    url::form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// クエリパラメータの列をクエリ文字列にする
///
/// キーと値を独立にパーセントエンコードし `&` で連結する。
/// 空の列は空文字列になる。
pub fn to_query_string(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// 現在のパス・クエリとページネーション情報からリンクを組み立てる
///
/// - `self`: 元のクエリをそのままシリアライズしたもの
/// - `next`: `plan.next` がある場合、`page` を差し替えたもの
/// - `prev`: `plan.prev` がある場合、`page` を差し替えたもの
pub fn build_links(path: &str, query: &[(String, String)], plan: &PaginationPlan) -> LinkSet {
    LinkSet {
        self_link: join(path, &to_query_string(query)),
        next:      plan
            .next
            .map(|page| join(path, &to_query_string(&with_page(query, page)))),
        prev:      plan
            .prev
            .map(|page| join(path, &to_query_string(&with_page(query, page)))),
    }
}

fn join(path: &str, query_string: &str) -> String {
    if query_string.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query_string}")
    }
}

/// `page` の値を差し替えた新しい列を返す
///
/// 最初の `page` をその位置で差し替え、重複する `page` は取り除く。
/// `page` がなければ末尾に追加する。
fn with_page(query: &[(String, String)], page: i64) -> QueryPairs {
    let page = page.to_string();
    let mut replaced = false;
    let mut pairs = QueryPairs::with_capacity(query.len() + 1);

    for (key, value) in query {
        if key != PAGE_KEY {
            pairs.push((key.clone(), value.clone()));
        } else if !replaced {
            pairs.push((key.clone(), page.clone()));
            replaced = true;
        }
    }

    if !replaced {
        pairs.push((PAGE_KEY.to_string(), page));
    }
    pairs
}
