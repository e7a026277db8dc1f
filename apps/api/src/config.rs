//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `4000` | ポート番号 |
//! | `DATABASE_URL` | **Yes** | - | PostgreSQL 接続 URL |
//! | `RUN_MIGRATIONS` | No | `true` | 起動時にマイグレーションを適用するか |
//! | `SEED_USER_COUNT` | No | `5` | `quill-seed` が作成するユーザー数 |
//!
//! ログ関連（`LOG_FORMAT`, `RUST_LOG`）は `quill_shared::observability` が読む。

use std::env;

use thiserror::Error;

use crate::seed::DEFAULT_SEED_USER_COUNT;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("環境変数 {0} が設定されていません")]
    Missing(&'static str),

    #[error("環境変数 {name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// データベース接続 URL
    pub database_url:   String,
    pub run_migrations: bool,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 値が空文字列の変数は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let port = match get("API_PORT") {
            None => DEFAULT_PORT,
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "API_PORT",
                value,
            })?,
        };

        let run_migrations = match get("RUN_MIGRATIONS") {
            None => true,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "RUN_MIGRATIONS",
                        value,
                    });
                }
            },
        };

        Ok(Self {
            host: get("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            run_migrations,
        })
    }
}

/// 初期データ投入（`quill-seed`）の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub database_url: String,
    /// 作成するユーザー数
    pub user_count:   usize,
}

impl SeedConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let user_count = match get("SEED_USER_COUNT") {
            None => DEFAULT_SEED_USER_COUNT,
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "SEED_USER_COUNT",
                value,
            })?,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            user_count,
        })
    }
}
