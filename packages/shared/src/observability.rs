//! # Observability 基盤
//!
//! トレーシングの初期化とログ出力形式の選択を提供する。
//! 環境変数 `LOG_FORMAT` で JSON / Pretty を切り替え、`RUST_LOG` でレベルを制御する。

use std::str::FromStr;

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_DIRECTIVE: &str = "info,quill=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("不明な LOG_FORMAT です: {other:?}")),
        }
    }
}

impl LogFormat {
    /// 環境変数 `LOG_FORMAT` から読み取る
    ///
    /// 未設定または不正な値なら [`Pretty`](LogFormat::Pretty)。
    /// 不正な値はトレーシング初期化前なので stderr に警告する。
    pub fn from_env() -> Self {
        let Ok(value) = std::env::var("LOG_FORMAT") else {
            return Self::default();
        };
        value.parse().unwrap_or_else(|message: String| {
            eprintln!("WARNING: {message}、pretty にフォールバックします");
            Self::default()
        })
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` があればそれを、なければ [`DEFAULT_LOG_DIRECTIVE`] を使う。
/// JSON モードではイベントのフィールドをトップレベルに展開し、
/// 現在のスパンを `span` として出力する。
#[cfg(feature = "observability")]
pub fn init_tracing(log_format: LogFormat) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    let fmt_layer = match log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
    tracing::debug!(?log_format, "トレーシングを初期化しました");
}
