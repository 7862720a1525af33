use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::types::{RepositoryError, RepositoryResult};

/// 接続リトライの上限回数
const MAX_CONNECT_RETRIES: u32 = 10;
/// リトライ間隔（秒）
const CONNECT_RETRY_WAIT_SECS: u64 = 5;

/// データベース接続プールを作成する
///
/// コンテナ起動直後などDBがまだ受け付けていない場合に備えて、
/// 一定回数まで接続をリトライする。
pub async fn create_pool(database_url: &str) -> RepositoryResult<PgPool> {
    let mut last_err = None;

    for attempt in 1..=MAX_CONNECT_RETRIES {
        match PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("データベースに接続しました");
                return Ok(pool);
            }
            Err(e) => {
                tracing::warn!(
                    "データベース接続に失敗: {} (リトライ {}/{})",
                    e,
                    attempt,
                    MAX_CONNECT_RETRIES
                );
                last_err = Some(e);
                if attempt < MAX_CONNECT_RETRIES {
                    tokio::time::sleep(Duration::from_secs(CONNECT_RETRY_WAIT_SECS)).await;
                }
            }
        }
    }

    Err(RepositoryError::database(
        "データベース接続",
        last_err.unwrap_or(sqlx::Error::PoolClosed),
    ))
}

/// データベースの初期化（マイグレーション実行）
pub async fn initialize_database(pool: &PgPool) -> RepositoryResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| RepositoryError::database("データベースマイグレーション実行", e.into()))
}

/// プールの作成とデータベース初期化を一括で行う便利関数
pub async fn setup_database(database_url: &str) -> RepositoryResult<PgPool> {
    let pool = create_pool(database_url).await?;
    initialize_database(&pool).await?;
    Ok(pool)
}
