use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{Folder, NewFolder};
use super::repository::FolderRepository;
use crate::types::{RepositoryError, ServiceError, ServiceResult};

/// フォルダ関連のビジネスロジック
///
/// IDと作成日時の採番、更新前の存在チェック、NotFoundのエンティティ別
/// エラーへの変換を担当する。
pub struct FolderService {
    repo: Arc<dyn FolderRepository>,
}

impl FolderService {
    pub fn new(repo: Arc<dyn FolderRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_folders(&self) -> ServiceResult<Vec<Folder>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get_folder_by_id(&self, id: Uuid) -> ServiceResult<Folder> {
        self.repo.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::FolderNotFound,
            other => other.into(),
        })
    }

    /// フォルダを作成する
    ///
    /// IDと作成日時はここで採番する。クライアントが指定した値は受け取らない。
    pub async fn create_folder(&self, payload: NewFolder) -> ServiceResult<Folder> {
        let folder = Folder {
            id: Uuid::new_v4(),
            name: payload.name,
            user_id: payload.user_id,
            created_at: Utc::now(),
        };
        Ok(self.repo.create(&folder).await?)
    }

    /// フォルダを更新する
    ///
    /// 先に存在チェックを行い、存在しなければ `FolderNotFound` を返す。
    /// 永続化にはパスパラメータのIDを強制したペイロードを渡す。
    pub async fn update_folder(&self, id: Uuid, payload: NewFolder) -> ServiceResult<Folder> {
        let existing = self.repo.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::FolderNotFound,
            other => other.into(),
        })?;

        let folder = Folder {
            id,
            name: payload.name,
            user_id: payload.user_id,
            created_at: existing.created_at,
        };
        Ok(self.repo.update(&folder).await?)
    }

    pub async fn delete_folder(&self, id: Uuid) -> ServiceResult<()> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::FolderNotFound,
            other => other.into(),
        })
    }
}
