use std::env;
use thiserror::Error;

/// 設定関連のエラー型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 環境変数が見つからない
    #[error("環境変数が見つかりません: {name}")]
    MissingEnvironmentVariable { name: String },

    /// 設定値が不正
    #[error("設定値が不正です: {reason}")]
    InvalidValue { reason: String },
}

impl ConfigError {
    /// 環境変数不足エラーを作成
    pub fn missing_env_var<N: Into<String>>(name: N) -> Self {
        Self::MissingEnvironmentVariable { name: name.into() }
    }

    /// 不正な設定値エラーを作成
    pub fn invalid_value<R: Into<String>>(reason: R) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

/// アプリケーション設定
///
/// `.env` ファイルがあれば事前に `dotenvy::dotenv()` で読み込んだ上で、
/// 環境変数から組み立てる。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL接続文字列（DATABASE_URL、必須）
    pub database_url: String,
    /// HTTPサーバーの待ち受けポート（SERVER_PORT、省略時は8080）
    pub server_port: u16,
    /// CORSで許可するフロントエンドのオリジン（FRONTEND_ORIGIN、省略時はlocalhost:3000）
    pub frontend_origin: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::missing_env_var("DATABASE_URL"))?;

        let server_port = match env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                ConfigError::invalid_value(format!("SERVER_PORTが数値ではありません: {}", raw))
            })?,
            Err(_) => 8080,
        };

        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            database_url,
            server_port,
            frontend_origin,
        })
    }
}
