//! 記事ユースケース
//!
//! 一覧は次の順で組み立てる:
//!
//! 1. クエリパラメータからクエリ計画（[`ArticleQuery`]）を作る
//! 2. ページ取得と件数取得を並行に実行する（同一スナップショットではない）
//! 3. 各記事を一覧用の形に整形する
//! 4. 件数からページネーション情報を計算し、リクエストの URL からリンクを作る

use std::sync::Arc;

use quill_domain::{
    DomainError,
    article::{Article, ArticleId, AuthoredArticle, NewArticle},
    article_query::ArticleQuery,
    clock::Clock,
    user::UserId,
};
use quill_infra::repository::ArticleRepository;
use quill_shared::{
    ApiResponse,
    CreatedResponse,
    LinkSet,
    PaginatedResponse,
    PaginationPlan,
    ProjectionConfig,
    ProjectionError,
    Record,
    links::build_links,
    projection::project_record,
};
use serde_json::json;

use crate::error::ApiError;

/// 作成レスポンスの固定メッセージ
pub const ARTICLE_CREATED_MESSAGE: &str = "Article created successfully";

/// 記事作成の入力
///
/// HTTP 層で受け取った値をそのまま渡す。検証とデフォルト値の補完はドメインが行う。
#[derive(Debug, Default)]
pub struct CreateArticleInput {
    pub title:     Option<String>,
    pub body:      Option<String>,
    pub cover:     Option<String>,
    pub status:    Option<String>,
    pub author_id: Option<UserId>,
}

/// 記事リソースのパス
pub fn article_path(id: &ArticleId) -> String {
    format!("/articles/{id}")
}

/// 一覧の要素の形
///
/// 本文を除き、詳細へのリンクを足し、著者を `author_id` / `author_name` に平坦化する。
fn project_list_item(article: &AuthoredArticle) -> Result<Record, ProjectionError> {
    let config = ProjectionConfig::new()
        .with_remove("body")
        .with_add("link", json!(article_path(article.article.id())))
        .with_max_depth(2);
    project_record(&article.to_record(), &config)
}

/// 単一記事の形（著者の平坦化のみ）
fn project_detail(article: &AuthoredArticle) -> Result<Record, ProjectionError> {
    project_record(&article.to_record(), &ProjectionConfig::new().with_max_depth(2))
}

/// 記事ユースケース
pub struct ArticleUseCaseImpl {
    article_repository: Arc<dyn ArticleRepository>,
    clock:              Arc<dyn Clock>,
}

impl ArticleUseCaseImpl {
    pub fn new(article_repository: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            article_repository,
            clock,
        }
    }

    /// 記事一覧を取得する
    ///
    /// `path` と `query` は現在のリクエストのもの。`query` はデコード済みで入力順を保つ。
    pub async fn list_articles(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<PaginatedResponse<Record>, ApiError> {
        let article_query = ArticleQuery::from_query(query)?;

        let (articles, total_items) = tokio::try_join!(
            self.article_repository.find_page(&article_query),
            self.article_repository.count(article_query.filter()),
        )?;

        let data = articles
            .iter()
            .map(project_list_item)
            .collect::<Result<Vec<_>, _>>()?;
        let pagination =
            PaginationPlan::plan(article_query.page(), article_query.limit(), total_items)?;
        let links = build_links(path, query, &pagination);

        tracing::debug!(
            returned = data.len(),
            total_items,
            "記事一覧を取得しました"
        );

        Ok(PaginatedResponse {
            data,
            pagination,
            links,
        })
    }

    /// 記事を 1 件取得する
    pub async fn get_article(&self, id: &ArticleId) -> Result<ApiResponse<Record>, ApiError> {
        let article = self
            .article_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Article",
                id:          id.to_string(),
            })?;

        Ok(ApiResponse::new(project_detail(&article)?)
            .with_links(LinkSet::self_only(article_path(id))))
    }

    /// 記事を作成する
    ///
    /// 作成日時と更新日時はどちらも現在時刻。
    pub async fn create_article(
        &self,
        input: CreateArticleInput,
    ) -> Result<CreatedResponse<Record>, ApiError> {
        let new_article = NewArticle::new(
            input.title,
            input.body,
            input.cover,
            input.status,
            input.author_id,
        )?;
        let article = Article::new(ArticleId::new(), new_article, self.clock.now());
        let id = *article.id();

        self.article_repository.insert(&article).await?;
        tracing::info!(%id, "記事を作成しました");

        // 著者名を含めるため、保存した記事を読み直す
        let created = self
            .article_repository
            .find_by_id(&id)
            .await?
            .unwrap_or_else(|| AuthoredArticle::new(article, None));

        Ok(CreatedResponse::new(
            ARTICLE_CREATED_MESSAGE,
            project_detail(&created)?,
            LinkSet::self_only(article_path(&id)),
        ))
    }
}
