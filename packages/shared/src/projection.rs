//! # レコード整形（Projection）
//!
//! ドキュメントストアから取得したレコード（JSON オブジェクト）の形を
//! レスポンス用に組み替える。
//!
//! ## 処理順序
//!
//! 1. `origin` が指定されていれば、そのフィールドの値を基底オブジェクトにする
//! 2. `add` のフィールドをトップレベルに上書きマージ
//! 3. `remove` のフィールドを削除
//! 4. `transform` の関数を、存在するフィールドの値に適用
//! 5. `max_depth` までネストしたオブジェクトを `親_子` 形式のキーに平坦化
//!
//! `remove` と `transform` は平坦化の前、トップレベルのキーにのみ作用する。
//!
//! ## キー順序と衝突
//!
//! キーは [`serde_json::Map`] の反復順（デフォルト feature では辞書順）に処理する。
//! 平坦化で同じキーが生成された場合は後に処理された値が残る。
//! 例えば `{"a": {"b": 1}, "a_b": 2}` を `max_depth = 2` で平坦化すると
//! `"a"` → `"a_b"` の順に処理され、結果は `{"a_b": 2}` になる。
//!
//! ## 使用例
//!
//! ```
//! use quill_shared::projection::{self, ProjectionConfig};
//! use serde_json::json;
//!
//! let config = ProjectionConfig::new()
//!     .with_add("link", json!("/x"))
//!     .with_remove("body");
//!
//! let projected = projection::project(
//!     &json!({"title": "A", "body": "B", "authorId": 7}),
//!     &config,
//! )
//! .unwrap();
//!
//! assert_eq!(projected, json!({"title": "A", "authorId": 7, "link": "/x"}));
//! ```

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::Arc,
};

use serde_json::{Map, Value};
use thiserror::Error;

/// フィールド名 → 値のマッピング
pub type Record = Map<String, Value>;

/// フィールド値の変換関数
///
/// 失敗は `Err(理由)` で返す。呼び出し側で捕捉されず
/// [`ProjectionError::Transform`] としてそのまま伝播する。
pub type TransformFn = Arc<dyn Fn(Value) -> Result<Value, String> + Send + Sync>;

/// 整形設定の誤りを表すエラー
///
/// データの誤りではなく設定（プログラム）の誤りとして扱い、
/// API 層では 500 に変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// `origin` に指定したフィールドが存在しない
    #[error("origin フィールドが存在しません: {0}")]
    OriginMissing(String),

    /// `origin` に指定したフィールドがオブジェクトではない
    #[error("origin フィールドがオブジェクトではありません: {0}")]
    OriginNotObject(String),

    /// 整形対象がオブジェクトではない
    #[error("整形対象がオブジェクトではありません")]
    NotAnObject,

    /// `max_depth` が 1 未満
    #[error("max_depth は 1 以上である必要があります: {0}")]
    InvalidMaxDepth(usize),

    /// 変換関数が失敗した
    #[error("フィールド {field} の変換に失敗しました: {reason}")]
    Transform { field: String, reason: String },
}

/// 整形設定
///
/// 一度構築して複数のレコードに使い回せる。`Clone` は変換関数を
/// `Arc` で共有するため安価。
#[derive(Clone)]
pub struct ProjectionConfig {
    origin:    Option<String>,
    add:       Record,
    remove:    BTreeSet<String>,
    transform: BTreeMap<String, TransformFn>,
    max_depth: usize,
}

impl ProjectionConfig {
    /// 何も変更しない設定（`max_depth = 1`）を作成する
    pub fn new() -> Self {
        Self {
            origin:    None,
            add:       Record::new(),
            remove:    BTreeSet::new(),
            transform: BTreeMap::new(),
            max_depth: 1,
        }
    }

    pub fn with_origin(mut self, field: impl Into<String>) -> Self {
        self.origin = Some(field.into());
        self
    }

    /// トップレベルに追加するフィールド（同名のフィールドは上書き）
    pub fn with_add(mut self, field: impl Into<String>, value: Value) -> Self {
        self.add.insert(field.into(), value);
        self
    }

    pub fn with_remove(mut self, field: impl Into<String>) -> Self {
        self.remove.insert(field.into());
        self
    }

    pub fn with_transform<F>(mut self, field: impl Into<String>, f: F) -> Self
    where
        F: Fn(Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.transform.insert(field.into(), Arc::new(f));
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn validate(&self) -> Result<(), ProjectionError> {
        if self.max_depth < 1 {
            return Err(ProjectionError::InvalidMaxDepth(self.max_depth));
        }
        Ok(())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProjectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectionConfig")
            .field("origin", &self.origin)
            .field("add", &self.add)
            .field("remove", &self.remove)
            .field("transform", &self.transform.keys().collect::<Vec<_>>())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

/// レコード、またはレコードの配列を整形する
///
/// 配列の場合は要素ごとに整形し、同じ長さ・同じ順序の配列を返す。
/// 要素の 1 つでも失敗すれば全体が失敗する（部分的な結果は返さない）。
pub fn project(data: &Value, config: &ProjectionConfig) -> Result<Value, ProjectionError> {
    config.validate()?;

    match data {
        Value::Array(items) => items
            .iter()
            .map(|item| project_one(item, config).map(Value::Object))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        record => project_one(record, config).map(Value::Object),
    }
}

/// 単一のレコードを整形する
pub fn project_record(record: &Value, config: &ProjectionConfig) -> Result<Record, ProjectionError> {
    config.validate()?;
    project_one(record, config)
}

fn project_one(record: &Value, config: &ProjectionConfig) -> Result<Record, ProjectionError> {
    let base = match &config.origin {
        Some(origin) => match record.get(origin) {
            Some(Value::Object(inner)) => inner.clone(),
            Some(_) => return Err(ProjectionError::OriginNotObject(origin.clone())),
            None => return Err(ProjectionError::OriginMissing(origin.clone())),
        },
        None => record.as_object().cloned().ok_or(ProjectionError::NotAnObject)?,
    };

    let merged = base
        .into_iter()
        .chain(config.add.clone())
        .filter(|(key, _)| !config.remove.contains(key))
        .collect::<Record>();

    let transformed = merged
        .into_iter()
        .map(|(key, value)| {
            let Some(f) = config.transform.get(&key) else {
                return Ok((key, value));
            };
            match f(value) {
                Ok(value) => Ok((key, value)),
                Err(reason) => Err(ProjectionError::Transform { field: key, reason }),
            }
        })
        .collect::<Result<Record, ProjectionError>>()?;

    let mut flattened = Record::new();
    flatten_into(transformed, "", config.max_depth, 1, &mut flattened);
    Ok(flattened)
}

/// `depth < max_depth` の間だけネストしたオブジェクトを展開する
///
/// 配列と `null` は展開しない。空オブジェクトを展開するとキーごと消える。
fn flatten_into(object: Record, prefix: &str, max_depth: usize, depth: usize, out: &mut Record) {
    for (key, value) in object {
        let key = format!("{prefix}{key}");
        match value {
            Value::Object(child) if depth < max_depth => {
                flatten_into(child, &format!("{key}_"), max_depth, depth + 1, out);
            }
            value => {
                out.insert(key, value);
            }
        }
    }
}
