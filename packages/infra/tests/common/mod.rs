//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成・セットアップヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use quill_domain::{
    article::{Article, ArticleId, NewArticle},
    user::{User, UserId},
};
use quill_infra::repository::{PostgresUserRepository, UserRepository};
use sqlx::PgPool;

/// テスト用の固定日時
pub fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// 基準時刻から `minutes` 分後に作成された下書き記事
pub fn create_test_article(title: &str, author_id: UserId, minutes: i64) -> Article {
    let input =
        NewArticle::new(Some(title.to_string()), None, None, None, Some(author_id)).unwrap();
    Article::new(ArticleId::new(), input, test_now() + Duration::minutes(minutes))
}

/// テスト用の著者を DB に作成
pub async fn setup_author(pool: &PgPool, name: &str) -> UserId {
    let user = User::new(
        UserId::new(),
        name,
        format!("{}@example.com", name.to_lowercase()),
    );
    PostgresUserRepository::new(pool.clone())
        .insert(&user)
        .await
        .expect("ユーザー作成に失敗");
    *user.id()
}

/// ユーザーを直接 SQL で削除（記事の author_id は NULL になる）
pub async fn delete_user_raw(pool: &PgPool, user_id: &UserId) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id.as_uuid())
        .execute(pool)
        .await
        .expect("ユーザー削除に失敗");
}
