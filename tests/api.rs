//! HTTPアダプター層の統合テスト
//!
//! インメモリのモックリポジトリを注入したルーターに対して、
//! ステータスコードへの写像（404 / 400 / 500 / 2xx）を検証する。
//! データベースは使用しない。

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use feedapp::domain::article::{Article, ArticleRepository, MockArticleRepository};
use feedapp::domain::feed::MockFeedRepository;
use feedapp::domain::folder::{Folder, MockFolderRepository};
use feedapp::types::{RepositoryError, RepositoryResult};
use feedapp::web::{build_router, AppState};

fn test_origin() -> HeaderValue {
    HeaderValue::from_static("http://localhost:3000")
}

fn empty_router() -> Router {
    let state = AppState::with_repositories(
        Arc::new(MockFolderRepository::new()),
        Arc::new(MockFeedRepository::new()),
        Arc::new(MockArticleRepository::new()),
    );
    build_router(state, test_origin())
}

fn router_with_articles(articles: Vec<Article>) -> Router {
    let state = AppState::with_repositories(
        Arc::new(MockFolderRepository::new()),
        Arc::new(MockFeedRepository::new()),
        Arc::new(MockArticleRepository::with_rows(articles)),
    );
    build_router(state, test_origin())
}

fn sample_article(title: &str, is_read: bool, is_later: bool) -> Article {
    Article {
        id: Uuid::new_v4(),
        feed_id: Uuid::new_v4(),
        title: title.to_string(),
        content: Some("本文".to_string()),
        url: "https://example.com/a".to_string(),
        published_at: None,
        is_read,
        is_later,
        created_at: Utc::now(),
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_ping() {
    let response = empty_router().oneshot(get_request("/ping")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "pong"}));
}

#[tokio::test]
async fn test_get_all_folders_empty_returns_empty_array() {
    let response = empty_router()
        .oneshot(get_request("/api/v1/folders"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_folder_then_get_roundtrip() {
    let router = empty_router();

    let response = router
        .clone()
        .oneshot(json_request("POST", "/api/v1/folders", json!({"name": "Tech"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["name"], "Tech");
    let id = created["id"].as_str().expect("IDが採番されているべき");
    assert!(created["created_at"].is_string());

    let response = router
        .oneshot(get_request(&format!("/api/v1/folders/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_create_folder_empty_name_rejected() {
    let response = empty_router()
        .oneshot(json_request("POST", "/api/v1/folders", json!({"name": "  "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_folder_returns_404() {
    let response = empty_router()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/folders/{}", Uuid::new_v4()),
            json!({"name": "新名称"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder_flow() {
    let folder = Folder {
        id: Uuid::new_v4(),
        name: "削除対象".to_string(),
        user_id: None,
        created_at: Utc::now(),
    };
    let state = AppState::with_repositories(
        Arc::new(MockFolderRepository::with_rows(vec![folder.clone()])),
        Arc::new(MockFeedRepository::new()),
        Arc::new(MockArticleRepository::new()),
    );
    let router = build_router(state, test_origin());

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/folders/{}", folder.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // 削除後の取得と二重削除はどちらも404
    let response = router
        .clone()
        .oneshot(get_request(&format!("/api/v1/folders/{}", folder.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_feed_returns_404() {
    let response = empty_router()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/feeds/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_feed_with_invalid_url_rejected() {
    // url::Urlのデシリアライズ失敗はJson抽出の時点で422になる
    let response = empty_router()
        .oneshot(json_request(
            "POST",
            "/api/v1/feeds",
            json!({"name": "BBC", "url": "not a url", "plugin_type": "rss"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_feed_happy_path() {
    let response = empty_router()
        .oneshot(json_request(
            "POST",
            "/api/v1/feeds",
            json!({
                "name": "BBC",
                "url": "https://feeds.bbci.co.uk/news/rss.xml",
                "plugin_type": "rss"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["plugin_type"], "rss");
    assert_eq!(created["update_interval"], 60);
    assert!(
        created.get("last_updated").is_none(),
        "未更新のフィードはlast_updatedを持たない"
    );
}

#[tokio::test]
async fn test_update_article_status_preserves_title() {
    let article = sample_article("T", false, true);
    let router = router_with_articles(vec![article.clone()]);

    let response = router
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/articles/{}/status", article.id),
            json!({"is_read": true, "is_later": false}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["is_read"], true);
    assert_eq!(updated["is_later"], false);
    assert_eq!(updated["title"], "T", "タイトルは維持されるべき");
}

#[tokio::test]
async fn test_update_status_missing_article_returns_404() {
    let response = empty_router()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/articles/{}/status", Uuid::new_v4()),
            json!({"is_read": true, "is_later": false}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_later_articles_filters() {
    let later = sample_article("後で読む", false, true);
    let normal = sample_article("通常", false, false);
    let router = router_with_articles(vec![later.clone(), normal]);

    let response = router
        .oneshot(get_request("/api/v1/articles/later"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "後で読む");
}

/// 常に失敗するリポジトリ（500写像の検証用）
struct FailingArticleRepository;

#[async_trait]
impl ArticleRepository for FailingArticleRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Article>> {
        Err(RepositoryError::database(
            "記事全件取得",
            sqlx::Error::PoolTimedOut,
        ))
    }
    async fn get_by_id(&self, _id: Uuid) -> RepositoryResult<Article> {
        Err(RepositoryError::database(
            "記事ID検索",
            sqlx::Error::PoolTimedOut,
        ))
    }
    async fn create(&self, _article: &Article) -> RepositoryResult<Article> {
        Err(RepositoryError::database("記事作成", sqlx::Error::PoolTimedOut))
    }
    async fn update(&self, _article: &Article) -> RepositoryResult<Article> {
        Err(RepositoryError::database("記事更新", sqlx::Error::PoolTimedOut))
    }
    async fn delete(&self, _id: Uuid) -> RepositoryResult<()> {
        Err(RepositoryError::database("記事削除", sqlx::Error::PoolTimedOut))
    }
    async fn get_later_articles(&self) -> RepositoryResult<Vec<Article>> {
        Err(RepositoryError::database(
            "後で見る記事取得",
            sqlx::Error::PoolTimedOut,
        ))
    }
}

#[tokio::test]
async fn test_storage_failure_maps_to_generic_500() {
    let state = AppState::with_repositories(
        Arc::new(MockFolderRepository::new()),
        Arc::new(MockFeedRepository::new()),
        Arc::new(FailingArticleRepository),
    );
    let router = build_router(state, test_origin());

    let response = router
        .oneshot(get_request("/api/v1/articles"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // ストレージの詳細は漏らさない
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "internal server error"}));
}
