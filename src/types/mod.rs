//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - エラー型: 永続化層とサービス層の二段階のエラー分類
//! - 設定型: 環境変数ベースのアプリケーション設定

pub mod config;
pub mod error;

// 便利な再エクスポート
pub use config::{AppConfig, ConfigError};
pub use error::{RepositoryError, RepositoryResult, ServiceError, ServiceResult};
