use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use super::{ApiError, AppState};
use crate::domain::article::{Article, ArticleStatusUpdate};

/// GET /api/v1/articles
pub async fn get_all_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.article_service.get_all_articles().await?;
    Ok(Json(articles))
}

/// GET /api/v1/articles/{id}
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Article>, ApiError> {
    let article = state.article_service.get_article_by_id(id).await?;
    Ok(Json(article))
}

/// PUT /api/v1/articles/{id}/status
///
/// ボディは is_read / is_later の2フラグのみ。形式不正なボディは
/// Json抽出の時点で弾かれ、コアには到達しない。
pub async fn update_article_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(status): Json<ArticleStatusUpdate>,
) -> Result<Json<Article>, ApiError> {
    let article = state
        .article_service
        .update_article_status(id, status)
        .await?;
    Ok(Json(article))
}

/// GET /api/v1/articles/later
pub async fn get_later_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.article_service.get_later_articles().await?;
    Ok(Json(articles))
}
