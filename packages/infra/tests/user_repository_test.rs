//! UserRepository 統合テスト
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://... cargo test -p quill-infra --test user_repository_test
//! ```

mod common;

use common::create_test_article;
use pretty_assertions::assert_eq;
use quill_domain::user::{User, UserId};
use quill_infra::{
    InfraError,
    repository::{
        ArticleRepository,
        PostgresArticleRepository,
        PostgresUserRepository,
        UserRepository,
    },
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_挿入したユーザーは記事の著者として参照できる(pool: PgPool) {
    // Arrange
    let sut = PostgresUserRepository::new(pool.clone());
    let articles = PostgresArticleRepository::new(pool.clone());
    let user = User::new(UserId::new(), "Bob Smith", "bob@example.com");

    // Act
    sut.insert(&user).await.unwrap();
    let article = create_test_article("By Bob", *user.id(), 0);
    articles.insert(&article).await.unwrap();
    let found = articles.find_by_id(article.id()).await.unwrap().unwrap();

    // Assert
    assert_eq!(found.author_name.as_deref(), Some("Bob Smith"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_登録済みのメールアドレスは競合エラー(pool: PgPool) {
    let sut = PostgresUserRepository::new(pool.clone());
    sut.insert(&User::new(UserId::new(), "Bob", "bob@example.com"))
        .await
        .unwrap();

    let result = sut
        .insert(&User::new(UserId::new(), "Bobby", "bob@example.com"))
        .await;

    assert!(matches!(result, Err(InfraError::Conflict(_))));
}
