use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::Feed;
use crate::types::{RepositoryError, RepositoryResult};

const FEED_COLUMNS: &str =
    "id, name, url, plugin_type, folder_id, update_interval, last_updated, created_at";

/// フィードの永続化を定義するトレイト
#[async_trait]
pub trait FeedRepository: Send + Sync {
    async fn get_all(&self) -> RepositoryResult<Vec<Feed>>;
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Feed>;
    async fn create(&self, feed: &Feed) -> RepositoryResult<Feed>;
    async fn update(&self, feed: &Feed) -> RepositoryResult<Feed>;
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}

/// PostgreSQLを使用した本番用のフィードリポジトリ
pub struct PgFeedRepository {
    pool: PgPool,
}

impl PgFeedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedRepository for PgFeedRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Feed>> {
        sqlx::query_as::<_, Feed>(&format!("SELECT {} FROM feeds", FEED_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::database("フィード全件取得", e))
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Feed> {
        sqlx::query_as::<_, Feed>(&format!(
            "SELECT {} FROM feeds WHERE id = $1",
            FEED_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("フィードID検索", e))?
        .ok_or(RepositoryError::NotFound)
    }

    // last_updatedは作成時には挿入しない（取り込みプロセスが初回更新時に設定する）
    async fn create(&self, feed: &Feed) -> RepositoryResult<Feed> {
        sqlx::query_as::<_, Feed>(&format!(
            r#"
            INSERT INTO feeds (id, name, url, plugin_type, folder_id, update_interval, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            FEED_COLUMNS
        ))
        .bind(feed.id)
        .bind(&feed.name)
        .bind(&feed.url)
        .bind(&feed.plugin_type)
        .bind(feed.folder_id)
        .bind(feed.update_interval)
        .bind(feed.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("フィード作成", e))
    }

    async fn update(&self, feed: &Feed) -> RepositoryResult<Feed> {
        sqlx::query_as::<_, Feed>(&format!(
            r#"
            UPDATE feeds
            SET name = $1, url = $2, plugin_type = $3, folder_id = $4,
                update_interval = $5, last_updated = $6
            WHERE id = $7
            RETURNING {}
            "#,
            FEED_COLUMNS
        ))
        .bind(&feed.name)
        .bind(&feed.url)
        .bind(&feed.plugin_type)
        .bind(feed.folder_id)
        .bind(feed.update_interval)
        .bind(feed.last_updated)
        .bind(feed.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("フィード更新", e))?
        .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM feeds WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::database("フィード削除", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// テスト用のインメモリフィードリポジトリ
#[derive(Default)]
pub struct MockFeedRepository {
    rows: std::sync::Mutex<Vec<Feed>>,
}

impl MockFeedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ入りのモックを作成
    pub fn with_rows(rows: Vec<Feed>) -> Self {
        Self {
            rows: std::sync::Mutex::new(rows),
        }
    }
}

#[async_trait]
impl FeedRepository for MockFeedRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Feed>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Feed> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, feed: &Feed) -> RepositoryResult<Feed> {
        // 本番実装と同じく作成時のlast_updatedは無視する
        let mut stored = feed.clone();
        stored.last_updated = None;
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, feed: &Feed) -> RepositoryResult<Feed> {
        let mut rows = self.rows.lock().unwrap();
        let stored = rows
            .iter_mut()
            .find(|f| f.id == feed.id)
            .ok_or(RepositoryError::NotFound)?;
        stored.name = feed.name.clone();
        stored.url = feed.url.clone();
        stored.plugin_type = feed.plugin_type.clone();
        stored.folder_id = feed.folder_id;
        stored.update_interval = feed.update_interval;
        stored.last_updated = feed.last_updated;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
