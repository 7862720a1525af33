use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tracing_subscriber::EnvFilter;

use feedapp::infra::db;
use feedapp::types::AppConfig;
use feedapp::web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

    // プール作成とマイグレーションを一括実行
    let pool = db::setup_database(&config.database_url)
        .await
        .context("データベースの初期化に失敗しました")?;

    let frontend_origin: HeaderValue = config
        .frontend_origin
        .parse()
        .context("FRONTEND_ORIGINが不正です")?;

    let app = build_router(AppState::new(pool), frontend_origin);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("ポートのバインドに失敗: {}", addr))?;

    tracing::info!("サーバーを開始します: {}", addr);
    axum::serve(listener, app)
        .await
        .context("サーバーの実行中にエラーが発生しました")?;

    Ok(())
}
