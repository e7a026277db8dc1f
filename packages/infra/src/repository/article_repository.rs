//! # ArticleRepository
//!
//! 記事の永続化と一覧クエリの実行を担当するリポジトリ。
//!
//! - 一覧は `users` を LEFT JOIN して著者名を解決する。著者がいなくてもエラーにしない
//! - ページ取得と件数取得は独立した 2 つのクエリ（トランザクションで囲まない）
//! - ソート列は [`ArticleSortKey`] からのホワイトリスト変換で決まり、入力文字列を SQL に埋め込まない

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quill_domain::{
    article::{Article, ArticleId, ArticleStatus, AuthoredArticle},
    article_query::{ArticleQuery, ArticleSort, ArticleSortKey, SortDirection, TitleFilter},
    user::UserId,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::InfraError;

/// 記事リポジトリトレイト
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// フィルタ・ソート・ページ範囲に従って記事を取得する
    async fn find_page(&self, query: &ArticleQuery) -> Result<Vec<AuthoredArticle>, InfraError>;

    /// フィルタに一致する記事の総数を取得する
    async fn count(&self, filter: &TitleFilter) -> Result<i64, InfraError>;

    /// ID で記事を検索する
    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<AuthoredArticle>, InfraError>;

    /// 記事を挿入する
    ///
    /// 著者が存在しない場合は [`InfraError::InvalidReference`]。
    async fn insert(&self, article: &Article) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の ArticleRepository
#[derive(Debug, Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_AUTHORED_ARTICLE: &str = r#"
    SELECT
        a.id,
        a.title,
        a.body,
        a.cover,
        a.status,
        a.author_id,
        u.name AS author_name,
        a.created_at,
        a.updated_at
    FROM articles a
    LEFT JOIN users u ON u.id = a.author_id
"#;

/// タイトルの部分一致条件（`$1` = 検索語）
///
/// `position` は LIKE と違い `%` や `_` を特別扱いしない。空文字列は常に一致する。
/// `lower()` の畳み込み範囲はデータベースの `LC_CTYPE` に依存する（`C` では ASCII のみ）。
const TITLE_CONTAINS: &str = "position(lower($1) in lower(a.title)) > 0";

#[derive(Debug, sqlx::FromRow)]
struct ArticleRow {
    id:          Uuid,
    title:       String,
    body:        String,
    cover:       String,
    status:      String,
    author_id:   Option<Uuid>,
    author_name: Option<String>,
    created_at:  DateTime<Utc>,
    updated_at:  DateTime<Utc>,
}

impl TryFrom<ArticleRow> for AuthoredArticle {
    type Error = InfraError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let status: ArticleStatus = row.status.parse().map_err(|_| {
            InfraError::Unexpected(format!("不正な記事ステータスです: {}", row.status))
        })?;
        let article = Article::from_db(
            ArticleId::from_uuid(row.id),
            row.title,
            row.body,
            row.cover,
            status,
            row.author_id.map(UserId::from_uuid),
            row.created_at,
            row.updated_at,
        );
        Ok(AuthoredArticle::new(article, row.author_name))
    }
}

fn sort_column(key: ArticleSortKey) -> &'static str {
    match key {
        ArticleSortKey::Title => "a.title",
        ArticleSortKey::Status => "a.status",
        ArticleSortKey::CreatedAt => "a.created_at",
        ArticleSortKey::UpdatedAt => "a.updated_at",
    }
}

fn order_by_clause(sort: ArticleSort) -> String {
    let direction = match sort.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    format!("ORDER BY {} {direction}", sort_column(sort.key))
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(page = query.page(), limit = query.limit()))]
    async fn find_page(&self, query: &ArticleQuery) -> Result<Vec<AuthoredArticle>, InfraError> {
        let sql = format!(
            "{SELECT_AUTHORED_ARTICLE} WHERE {TITLE_CONTAINS} {} OFFSET $2 LIMIT $3",
            order_by_clause(query.sort())
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(query.filter().search())
            .bind(query.skip())
            .bind(query.take())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(AuthoredArticle::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn count(&self, filter: &TitleFilter) -> Result<i64, InfraError> {
        let sql = format!("SELECT COUNT(*) FROM articles a WHERE {TITLE_CONTAINS}");

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(filter.search())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<AuthoredArticle>, InfraError> {
        let sql = format!("{SELECT_AUTHORED_ARTICLE} WHERE a.id = $1");

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(AuthoredArticle::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %article.id()))]
    async fn insert(&self, article: &Article) -> Result<(), InfraError> {
        let status: &'static str = article.status().into();

        sqlx::query(
            r#"
            INSERT INTO articles (id, title, body, cover, status, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(article.id().as_uuid())
        .bind(article.title())
        .bind(article.body())
        .bind(article.cover())
        .bind(status)
        .bind(article.author_id().map(|author_id| *author_id.as_uuid()))
        .bind(article.created_at())
        .bind(article.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                InfraError::InvalidReference("author".to_string())
            }
            other => InfraError::Database(other),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ArticleSortKey::Title, SortDirection::Asc, "ORDER BY a.title ASC")]
    #[case(ArticleSortKey::Status, SortDirection::Desc, "ORDER BY a.status DESC")]
    #[case(ArticleSortKey::CreatedAt, SortDirection::Asc, "ORDER BY a.created_at ASC")]
    #[case(ArticleSortKey::UpdatedAt, SortDirection::Desc, "ORDER BY a.updated_at DESC")]
    fn test_ソート指定はホワイトリストの列に変換される(
        #[case] key: ArticleSortKey,
        #[case] direction: SortDirection,
        #[case] expected: &str,
    ) {
        assert_eq!(order_by_clause(ArticleSort { key, direction }), expected);
    }

    #[test]
    fn test_行から著者名付きの記事に変換できる() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let id = Uuid::now_v7();
        let row = ArticleRow {
            id,
            title:       "A".to_string(),
            body:        String::new(),
            cover:       String::new(),
            status:      "published".to_string(),
            author_id:   None,
            author_name: None,
            created_at:  now,
            updated_at:  now,
        };

        let authored = AuthoredArticle::try_from(row).unwrap();

        assert_eq!(authored.article.id(), &ArticleId::from_uuid(id));
        assert_eq!(authored.article.status(), ArticleStatus::Published);
        assert_eq!(authored.author_name, None);
    }

    #[test]
    fn test_不明なステータスの行は予期しないエラー() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let row = ArticleRow {
            id:          Uuid::now_v7(),
            title:       "A".to_string(),
            body:        String::new(),
            cover:       String::new(),
            status:      "archived".to_string(),
            author_id:   None,
            author_name: None,
            created_at:  now,
            updated_at:  now,
        };

        assert!(matches!(
            AuthoredArticle::try_from(row),
            Err(InfraError::Unexpected(_))
        ));
    }
}
