use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::Folder;
use crate::types::{RepositoryError, RepositoryResult};

/// フォルダの永続化を定義するトレイト
///
/// 本番実装は `PgFolderRepository`。テスト時には `MockFolderRepository` を
/// 注入することでデータベースなしでサービス層を検証できる。
#[async_trait]
pub trait FolderRepository: Send + Sync {
    async fn get_all(&self) -> RepositoryResult<Vec<Folder>>;
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Folder>;
    async fn create(&self, folder: &Folder) -> RepositoryResult<Folder>;
    async fn update(&self, folder: &Folder) -> RepositoryResult<Folder>;
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}

/// PostgreSQLを使用した本番用のフォルダリポジトリ
pub struct PgFolderRepository {
    pool: PgPool,
}

impl PgFolderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderRepository for PgFolderRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT id, name, user_id, created_at FROM folders")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::database("フォルダ全件取得", e))
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "SELECT id, name, user_id, created_at FROM folders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("フォルダID検索", e))?
        .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, folder: &Folder) -> RepositoryResult<Folder> {
        sqlx::query_as::<_, Folder>(
            r#"
            INSERT INTO folders (id, name, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, user_id, created_at
            "#,
        )
        .bind(folder.id)
        .bind(&folder.name)
        .bind(&folder.user_id)
        .bind(folder.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("フォルダ作成", e))
    }

    // 更新で書き換えるのはnameのみ。user_idとcreated_atは保持される。
    async fn update(&self, folder: &Folder) -> RepositoryResult<Folder> {
        sqlx::query_as::<_, Folder>(
            r#"
            UPDATE folders SET name = $1 WHERE id = $2
            RETURNING id, name, user_id, created_at
            "#,
        )
        .bind(&folder.name)
        .bind(folder.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("フォルダ更新", e))?
        .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::database("フォルダ削除", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// テスト用のインメモリフォルダリポジトリ
///
/// 実装は `PgFolderRepository` と同じ契約に従う。特に更新時にnameだけを
/// 書き換える部分更新のふるまいを再現している。
#[derive(Default)]
pub struct MockFolderRepository {
    rows: std::sync::Mutex<Vec<Folder>>,
}

impl MockFolderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ入りのモックを作成
    pub fn with_rows(rows: Vec<Folder>) -> Self {
        Self {
            rows: std::sync::Mutex::new(rows),
        }
    }
}

#[async_trait]
impl FolderRepository for MockFolderRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Folder>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Folder> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, folder: &Folder) -> RepositoryResult<Folder> {
        self.rows.lock().unwrap().push(folder.clone());
        Ok(folder.clone())
    }

    async fn update(&self, folder: &Folder) -> RepositoryResult<Folder> {
        let mut rows = self.rows.lock().unwrap();
        let stored = rows
            .iter_mut()
            .find(|f| f.id == folder.id)
            .ok_or(RepositoryError::NotFound)?;
        stored.name = folder.name.clone();
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
