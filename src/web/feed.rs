use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::{ApiError, AppState};
use crate::domain::feed::{Feed, NewFeed};

/// GET /api/v1/feeds
pub async fn get_all_feeds(State(state): State<AppState>) -> Result<Json<Vec<Feed>>, ApiError> {
    let feeds = state.feed_service.get_all_feeds().await?;
    Ok(Json(feeds))
}

/// GET /api/v1/feeds/{id}
pub async fn get_feed_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Feed>, ApiError> {
    let feed = state.feed_service.get_feed_by_id(id).await?;
    Ok(Json(feed))
}

/// POST /api/v1/feeds
///
/// URLの構文検証は `NewFeed` のデシリアライズで行われるため、
/// ここに到達した時点でurlは妥当。
pub async fn create_feed(
    State(state): State<AppState>,
    Json(payload): Json<NewFeed>,
) -> Result<(StatusCode, Json<Feed>), ApiError> {
    validate(&payload)?;
    let feed = state.feed_service.create_feed(payload).await?;
    Ok((StatusCode::CREATED, Json(feed)))
}

/// PUT /api/v1/feeds/{id}
pub async fn update_feed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewFeed>,
) -> Result<Json<Feed>, ApiError> {
    validate(&payload)?;
    let feed = state.feed_service.update_feed(id, payload).await?;
    Ok(Json(feed))
}

/// DELETE /api/v1/feeds/{id}
pub async fn delete_feed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.feed_service.delete_feed(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// nameとplugin_typeは必須
fn validate(payload: &NewFeed) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("nameは必須です".to_string()));
    }
    if payload.plugin_type.trim().is_empty() {
        return Err(ApiError::BadRequest("plugin_typeは必須です".to_string()));
    }
    Ok(())
}
