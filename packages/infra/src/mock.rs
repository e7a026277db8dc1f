//! # テスト用インメモリリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! quill-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! PostgreSQL 実装と同じ意味論（部分一致フィルタ、単一キーの安定ソート、
//! skip/limit、著者名の LEFT JOIN、著者の外部キー制約、メールアドレスの一意制約）を再現する。
//! ユーザーも同じストアに保持するため、[`UserRepository`] としても使える。
//!
//! 大文字小文字の畳み込みは Unicode 全体に適用される。PostgreSQL 側は
//! データベースの `LC_CTYPE` に依存する（[`crate::repository::article_repository`] 参照）。

use std::{
    cmp::Ordering,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use quill_domain::{
    article::{Article, ArticleId, AuthoredArticle},
    article_query::{ArticleQuery, ArticleSortKey, SortDirection, TitleFilter},
    user::User,
};

use crate::{
    InfraError,
    repository::{ArticleRepository, UserRepository},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ===== InMemoryArticleRepository =====

#[derive(Clone, Default)]
pub struct InMemoryArticleRepository {
    users:       Arc<Mutex<Vec<User>>>,
    articles:    Arc<Mutex<Vec<Article>>>,
    unavailable: bool,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての操作がデータベースエラーになるリポジトリ
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn add_user(&self, user: User) {
        lock(&self.users).push(user);
    }

    /// 著者の存在を確認せずに記事を追加する（挿入順が自然順になる）
    pub fn add_article(&self, article: Article) {
        lock(&self.articles).push(article);
    }

    pub fn articles(&self) -> Vec<Article> {
        lock(&self.articles).clone()
    }

    pub fn users(&self) -> Vec<User> {
        lock(&self.users).clone()
    }

    fn check_available(&self) -> Result<(), InfraError> {
        if self.unavailable {
            return Err(InfraError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn with_author(&self, article: &Article) -> AuthoredArticle {
        let author_name = article.author_id().and_then(|author_id| {
            lock(&self.users)
                .iter()
                .find(|u| u.id() == author_id)
                .map(|u| u.name().to_string())
        });
        AuthoredArticle::new(article.clone(), author_name)
    }
}

fn compare(a: &Article, b: &Article, key: ArticleSortKey) -> Ordering {
    match key {
        ArticleSortKey::Title => a.title().cmp(b.title()),
        ArticleSortKey::Status => <&str>::from(a.status()).cmp(<&str>::from(b.status())),
        ArticleSortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
        ArticleSortKey::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_page(&self, query: &ArticleQuery) -> Result<Vec<AuthoredArticle>, InfraError> {
        self.check_available()?;

        let mut matched: Vec<Article> = lock(&self.articles)
            .iter()
            .filter(|a| query.filter().matches(a.title()))
            .cloned()
            .collect();

        let sort = query.sort();
        // sort_by は安定ソートなので、同値の記事は挿入順を保つ
        matched.sort_by(|a, b| match sort.direction {
            SortDirection::Asc => compare(a, b, sort.key),
            SortDirection::Desc => compare(b, a, sort.key),
        });

        let skip = usize::try_from(query.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.take()).unwrap_or(usize::MAX);

        Ok(matched
            .iter()
            .skip(skip)
            .take(take)
            .map(|a| self.with_author(a))
            .collect())
    }

    async fn count(&self, filter: &TitleFilter) -> Result<i64, InfraError> {
        self.check_available()?;

        let count = lock(&self.articles)
            .iter()
            .filter(|a| filter.matches(a.title()))
            .count();
        i64::try_from(count).map_err(|e| InfraError::Unexpected(e.to_string()))
    }

    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<AuthoredArticle>, InfraError> {
        self.check_available()?;

        let article = lock(&self.articles).iter().find(|a| a.id() == id).cloned();
        Ok(article.map(|a| self.with_author(&a)))
    }

    async fn insert(&self, article: &Article) -> Result<(), InfraError> {
        self.check_available()?;

        let author_exists = article
            .author_id()
            .is_none_or(|author_id| lock(&self.users).iter().any(|u| u.id() == author_id));
        if !author_exists {
            return Err(InfraError::InvalidReference("author".to_string()));
        }

        lock(&self.articles).push(article.clone());
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryArticleRepository {
    async fn insert(&self, user: &User) -> Result<(), InfraError> {
        self.check_available()?;

        let mut users = lock(&self.users);
        if users.iter().any(|u| u.email() == user.email()) {
            return Err(InfraError::Conflict(format!("email {}", user.email())));
        }
        users.push(user.clone());
        Ok(())
    }
}
