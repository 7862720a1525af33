use std::sync::Arc;
use uuid::Uuid;

use super::model::{Article, ArticleStatusUpdate};
use super::repository::ArticleRepository;
use crate::types::{RepositoryError, ServiceError, ServiceResult};

/// 記事関連のビジネスロジック
///
/// 記事の作成・削除はこのサービスには無い。取り込みは外部プロセスが
/// リポジトリ経由で行い、ここでは閲覧と状態更新だけを提供する。
pub struct ArticleService {
    repo: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_articles(&self) -> ServiceResult<Vec<Article>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get_article_by_id(&self, id: Uuid) -> ServiceResult<Article> {
        self.repo.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::ArticleNotFound,
            other => other.into(),
        })
    }

    /// 記事の既読・後で見るフラグを更新する
    ///
    /// ペイロードは2つのフラグしか運ばないため、保存済みの行を読み出して
    /// フラグだけを書き換え、エンティティ全体を永続化する読み出し・変更・
    /// 書き込みの手順を踏む。タイトル等の他フィールドは保存済みの値が
    /// そのまま維持される。
    pub async fn update_article_status(
        &self,
        id: Uuid,
        status: ArticleStatusUpdate,
    ) -> ServiceResult<Article> {
        let mut article = self.repo.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::ArticleNotFound,
            other => other.into(),
        })?;

        article.is_read = status.is_read;
        article.is_later = status.is_later;

        Ok(self.repo.update(&article).await?)
    }

    /// 「後で見る」記事の一覧を取得する
    pub async fn get_later_articles(&self) -> ServiceResult<Vec<Article>> {
        Ok(self.repo.get_later_articles().await?)
    }
}
