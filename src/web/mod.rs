//! HTTPアダプター層
//!
//! リクエストをサービス呼び出しへ、エラー種別をステータスコードへ
//! 変換する薄い層。ビジネスルールはここには置かない。
//!
//! エラー変換の契約:
//!   - エンティティ別のNotFound → 404
//!   - 不正なペイロード → 400（コアに到達する前に弾く）
//!   - それ以外 → 500（ストレージの詳細は漏らさない）

pub mod article;
pub mod feed;
pub mod folder;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::article::{ArticleRepository, ArticleService, PgArticleRepository};
use crate::domain::feed::{FeedRepository, FeedService, PgFeedRepository};
use crate::domain::folder::{FolderRepository, FolderService, PgFolderRepository};
use crate::types::ServiceError;

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub folder_service: Arc<FolderService>,
    pub feed_service: Arc<FeedService>,
    pub article_service: Arc<ArticleService>,
}

impl AppState {
    /// PostgreSQLリポジトリを組み込んだ本番用の状態を作成
    pub fn new(pool: PgPool) -> Self {
        Self::with_repositories(
            Arc::new(PgFolderRepository::new(pool.clone())),
            Arc::new(PgFeedRepository::new(pool.clone())),
            Arc::new(PgArticleRepository::new(pool)),
        )
    }

    /// 任意のリポジトリ実装を注入して状態を作成（テスト用）
    pub fn with_repositories(
        folder_repo: Arc<dyn FolderRepository>,
        feed_repo: Arc<dyn FeedRepository>,
        article_repo: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            folder_service: Arc::new(FolderService::new(folder_repo)),
            feed_service: Arc::new(FeedService::new(feed_repo)),
            article_service: Arc::new(ArticleService::new(article_repo)),
        }
    }
}

/// アダプター層のエラー型
///
/// サービス層のエラーをHTTPレスポンスへ写像する。ユーザーに見えるのは
/// 「見つからない」か「内部エラー」の二択で、ストレージの詳細は返さない。
#[derive(Debug)]
pub enum ApiError {
    /// ペイロード検証エラー（コア到達前に弾く）
    BadRequest(String),
    /// サービス層から伝搬したエラー
    Service(ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::Service(err) if err.is_not_found() => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
            Self::Service(err) => {
                tracing::error!("内部エラー: {:#}", anyhow::Error::from(err));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "message": "pong" }))
}

/// APIルーターを構築する
pub fn build_router(state: AppState, frontend_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86400));

    let api = Router::new()
        .route(
            "/folders",
            get(folder::get_all_folders).post(folder::create_folder),
        )
        .route(
            "/folders/{id}",
            get(folder::get_folder_by_id)
                .put(folder::update_folder)
                .delete(folder::delete_folder),
        )
        .route("/feeds", get(feed::get_all_feeds).post(feed::create_feed))
        .route(
            "/feeds/{id}",
            get(feed::get_feed_by_id)
                .put(feed::update_feed)
                .delete(feed::delete_feed),
        )
        .route("/articles", get(article::get_all_articles))
        .route("/articles/later", get(article::get_later_articles))
        .route("/articles/{id}", get(article::get_article_by_id))
        .route("/articles/{id}/status", put(article::update_article_status));

    Router::new()
        .route("/ping", get(ping))
        .nest("/api/v1", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
