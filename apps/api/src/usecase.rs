//! # ユースケース層
//!
//! リポジトリでクエリを実行し、shared のレスポンス整形を組み合わせて
//! レスポンスエンベロープを組み立てる。

pub mod article;

pub use article::{ArticleUseCaseImpl, CreateArticleInput};
