//! # 初期データ投入
//!
//! 記事の著者として使うユーザーをランダムに生成して保存する。
//! 名前は固定の一覧から選び、メールアドレスはユーザー ID から作るため重複しない。
//!
//! 実行方法は `quill-seed` バイナリを参照。

use quill_domain::user::{User, UserId};
use quill_infra::{InfraError, repository::UserRepository};
use rand::Rng;

/// 件数を指定しない場合に作成するユーザー数
pub const DEFAULT_SEED_USER_COUNT: usize = 5;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Mallory",
    "Niaj", "Olivia", "Peggy", "Rupert", "Sybil", "Trent", "Victor", "Walter", "Yuki",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Garcia", "Ito", "Johnson", "Kim", "Lopez", "Martin", "Nguyen", "Sato",
    "Smith", "Suzuki", "Tanaka", "Taylor", "Wilson",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, candidates: &[&'a str]) -> &'a str {
    candidates[rng.random_range(0..candidates.len())]
}

/// ランダムな名前のユーザーを 1 人作る
pub fn fake_user<R: Rng + ?Sized>(rng: &mut R) -> User {
    let id = UserId::new();
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let email = format!(
        "{}.{}.{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        id.as_uuid().simple()
    );
    User::new(id, format!("{first} {last}"), email)
}

/// ユーザーを `count` 人作成して保存する
///
/// 途中で保存に失敗した場合は、それまでに保存したユーザーを残したままエラーを返す。
pub async fn seed_users<R: Rng + ?Sized>(
    repository: &dyn UserRepository,
    count: usize,
    rng: &mut R,
) -> Result<Vec<User>, InfraError> {
    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        let user = fake_user(rng);
        repository.insert(&user).await?;
        tracing::debug!(id = %user.id(), name = user.name(), "ユーザーを作成しました");
        users.push(user);
    }
    Ok(users)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quill_infra::mock::InMemoryArticleRepository;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_生成したユーザーは一覧の名前と一意なメールアドレスを持つ() {
        let mut rng = StdRng::seed_from_u64(7);

        let user = fake_user(&mut rng);

        let (first, last) = user.name().split_once(' ').unwrap();
        assert!(FIRST_NAMES.contains(&first));
        assert!(LAST_NAMES.contains(&last));
        assert!(user.email().ends_with("@example.com"));
        assert!(user.email().contains(&user.id().as_uuid().simple().to_string()));
    }

    #[tokio::test]
    async fn test_指定した人数のユーザーを保存する() {
        let repo = InMemoryArticleRepository::new();
        let mut rng = StdRng::seed_from_u64(42);

        let users = seed_users(&repo, 3, &mut rng).await.unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(repo.users(), users);
    }

    #[tokio::test]
    async fn test_0人なら何も保存しない() {
        let repo = InMemoryArticleRepository::new();
        let mut rng = StdRng::seed_from_u64(1);

        let users = seed_users(&repo, 0, &mut rng).await.unwrap();

        assert!(users.is_empty());
        assert!(repo.users().is_empty());
    }

    #[tokio::test]
    async fn test_保存に失敗したらエラーを返す() {
        let repo = InMemoryArticleRepository::unavailable();
        let mut rng = StdRng::seed_from_u64(1);

        let result = seed_users(&repo, 2, &mut rng).await;

        assert!(matches!(result, Err(InfraError::Database(_))));
    }
}
