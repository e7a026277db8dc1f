//! # ページネーション計画
//!
//! ページ番号・件数上限・総件数から、総ページ数と前後ページの有無を計算する。
//!
//! ## 不変条件
//!
//! - `total_page = ceil(total_items / limit)`（`total_items = 0` なら 0）
//! - `next` は `page < total_page` のときだけ存在し、値は `page + 1`
//! - `prev` は `page > 1` のときだけ存在し、値は `page - 1`
//!
//! `page` の範囲チェックは行わない。範囲外のページは上流で空の結果になるだけで、
//! エラーではない。
//!
//! ## JSON 形式
//!
//! ```json
//! { "page": 1, "limit": 10, "totalItems": 25, "totalPage": 3, "next": 2 }
//! ```

use serde::{Deserialize, Serialize};

use crate::InvalidParameter;

/// ページネーション情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationPlan {
    pub page:        i64,
    pub limit:       i64,
    pub total_items: i64,
    pub total_page:  i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next:        Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev:        Option<i64>,
}

impl PaginationPlan {
    /// ページネーション情報を計算する
    ///
    /// # エラー
    ///
    /// - `limit < 1`
    /// - `total_items < 0`
    pub fn plan(page: i64, limit: i64, total_items: i64) -> Result<Self, InvalidParameter> {
        if limit < 1 {
            return Err(InvalidParameter::new("limit must be a positive integer"));
        }
        if total_items < 0 {
            return Err(InvalidParameter::new("totalItems must not be negative"));
        }

        let total_page = total_items / limit + i64::from(total_items % limit != 0);

        Ok(Self {
            page,
            limit,
            total_items,
            total_page,
            next: if page < total_page { Some(page + 1) } else { None },
            prev: if page > 1 { Some(page - 1) } else { None },
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_1ページ目はnextだけを持つ() {
        let plan = PaginationPlan::plan(1, 10, 25).unwrap();

        assert_eq!(
            plan,
            PaginationPlan {
                page:        1,
                limit:       10,
                total_items: 25,
                total_page:  3,
                next:        Some(2),
                prev:        None,
            }
        );
    }

    #[test]
    fn test_最終ページはprevだけを持つ() {
        let plan = PaginationPlan::plan(3, 10, 25).unwrap();

        assert_eq!(plan.total_page, 3);
        assert_eq!(plan.next, None);
        assert_eq!(plan.prev, Some(2));
    }

    #[test]
    fn test_中間ページはnextとprevを持つ() {
        let plan = PaginationPlan::plan(2, 10, 25).unwrap();

        assert_eq!(plan.next, Some(3));
        assert_eq!(plan.prev, Some(1));
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(25, 10, 3)]
    #[case(100, 1, 100)]
    #[case(7, 3, 3)]
    fn test_total_pageは切り上げ除算になる(
        #[case] total_items: i64,
        #[case] limit: i64,
        #[case] expected: i64,
    ) {
        let plan = PaginationPlan::plan(1, limit, total_items).unwrap();

        assert_eq!(plan.total_page, expected);
    }

    #[test]
    fn test_nextとprevの有無は全組み合わせで不変条件を満たす() {
        for total_items in 0..=30 {
            for limit in 1..=7 {
                for page in -2..=8 {
                    let plan = PaginationPlan::plan(page, limit, total_items).unwrap();
                    assert_eq!(plan.next.is_some(), page < plan.total_page);
                    assert_eq!(plan.prev.is_some(), page > 1);
                    if let Some(next) = plan.next {
                        assert_eq!(next, page + 1);
                    }
                    if let Some(prev) = plan.prev {
                        assert_eq!(prev, page - 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_総件数0件ならnextもprevもない() {
        let plan = PaginationPlan::plan(1, 10, 0).unwrap();

        assert_eq!(plan.total_page, 0);
        assert_eq!(plan.next, None);
        assert_eq!(plan.prev, None);
    }

    #[test]
    fn test_範囲外のページはエラーにならない() {
        let plan = PaginationPlan::plan(9, 10, 25).unwrap();

        assert_eq!(plan.next, None);
        assert_eq!(plan.prev, Some(8));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    fn test_limitが1未満ならエラー(#[case] limit: i64) {
        assert!(PaginationPlan::plan(1, limit, 10).is_err());
    }

    #[test]
    fn test_総件数が負ならエラー() {
        assert!(PaginationPlan::plan(1, 10, -1).is_err());
    }

    #[test]
    fn test_jsonではcamel_caseで出力しnoneのフィールドを省略する() {
        let plan = PaginationPlan::plan(1, 10, 25).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "page": 1,
                "limit": 10,
                "totalItems": 25,
                "totalPage": 3,
                "next": 2
            })
        );
    }
}
