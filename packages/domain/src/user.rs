//! # ユーザー
//!
//! 記事の著者として参照されるユーザー。
//! 記事の読み取りでは著者名の解決にのみ使い、作成は初期データ投入（`quill-seed`）で行う。

define_uuid_id! {
    /// ユーザーの一意識別子
    pub struct UserId;
}

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:    UserId,
    name:  String,
    email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// 表示名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// メールアドレス（一意）
    pub fn email(&self) -> &str {
        &self.email
    }
}
