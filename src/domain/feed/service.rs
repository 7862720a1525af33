use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{Feed, NewFeed};
use super::repository::FeedRepository;
use crate::types::{RepositoryError, ServiceError, ServiceResult};

/// フィード関連のビジネスロジック
pub struct FeedService {
    repo: Arc<dyn FeedRepository>,
}

impl FeedService {
    pub fn new(repo: Arc<dyn FeedRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_feeds(&self) -> ServiceResult<Vec<Feed>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get_feed_by_id(&self, id: Uuid) -> ServiceResult<Feed> {
        self.repo.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::FeedNotFound,
            other => other.into(),
        })
    }

    /// フィードを作成する。IDと作成日時はここで採番する。
    pub async fn create_feed(&self, payload: NewFeed) -> ServiceResult<Feed> {
        let feed = Feed {
            id: Uuid::new_v4(),
            name: payload.name,
            url: payload.url.to_string(),
            plugin_type: payload.plugin_type,
            folder_id: payload.folder_id,
            update_interval: payload.update_interval,
            last_updated: None,
            created_at: Utc::now(),
        };
        Ok(self.repo.create(&feed).await?)
    }

    /// フィードを更新する
    ///
    /// 存在チェックの後、呼び出し側が渡したペイロードにパスパラメータの
    /// IDを強制して永続化する。ゼロ値の構造体を混ぜてはいけない。
    pub async fn update_feed(&self, id: Uuid, payload: NewFeed) -> ServiceResult<Feed> {
        let existing = self.repo.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::FeedNotFound,
            other => other.into(),
        })?;

        let feed = Feed {
            id,
            name: payload.name,
            url: payload.url.to_string(),
            plugin_type: payload.plugin_type,
            folder_id: payload.folder_id,
            update_interval: payload.update_interval,
            last_updated: payload.last_updated,
            created_at: existing.created_at,
        };
        Ok(self.repo.update(&feed).await?)
    }

    pub async fn delete_feed(&self, id: Uuid) -> ServiceResult<()> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::FeedNotFound,
            other => other.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feed::repository::MockFeedRepository;
    use chrono::{DateTime, Utc};
    use url::Url;

    fn service_with(rows: Vec<Feed>) -> FeedService {
        FeedService::new(Arc::new(MockFeedRepository::with_rows(rows)))
    }

    fn sample_payload(name: &str) -> NewFeed {
        NewFeed {
            name: name.to_string(),
            url: Url::parse("https://feeds.bbci.co.uk/news/rss.xml").unwrap(),
            plugin_type: "rss".to_string(),
            folder_id: None,
            update_interval: 60,
            last_updated: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let service = service_with(vec![]);
        let before: DateTime<Utc> = Utc::now();

        let created = service.create_feed(sample_payload("BBC")).await.unwrap();

        assert!(!created.id.is_nil());
        assert_eq!(created.plugin_type, "rss");
        assert!(created.created_at >= before);
        assert!(created.last_updated.is_none());

        let fetched = service.get_feed_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_persists_caller_payload_not_zero_values() {
        let service = service_with(vec![]);
        let created = service.create_feed(sample_payload("BBC")).await.unwrap();

        let now = Utc::now();
        let mut payload = sample_payload("BBC World");
        payload.update_interval = 15;
        payload.last_updated = Some(now);

        let updated = service.update_feed(created.id, payload).await.unwrap();

        // ゼロ値ではなく、渡したペイロードの値がそのまま保存されている
        assert_eq!(updated.name, "BBC World");
        assert_eq!(updated.update_interval, 15);
        assert_eq!(updated.last_updated, Some(now));
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_feed_fails_with_specific_kind() {
        let service = service_with(vec![]);
        let result = service
            .update_feed(Uuid::new_v4(), sample_payload("どこにもない"))
            .await;
        assert!(matches!(result, Err(ServiceError::FeedNotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_feed_fails_with_specific_kind() {
        let service = service_with(vec![]);
        let result = service.delete_feed(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ServiceError::FeedNotFound)));
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let service = service_with(vec![]);
        let created = service.create_feed(sample_payload("BBC")).await.unwrap();

        service.delete_feed(created.id).await.unwrap();

        let result = service.get_feed_by_id(created.id).await;
        assert!(matches!(result, Err(ServiceError::FeedNotFound)));
    }
}
