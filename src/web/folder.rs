use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::{ApiError, AppState};
use crate::domain::folder::{Folder, NewFolder};

/// GET /api/v1/folders
pub async fn get_all_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, ApiError> {
    let folders = state.folder_service.get_all_folders().await?;
    Ok(Json(folders))
}

/// GET /api/v1/folders/{id}
pub async fn get_folder_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Folder>, ApiError> {
    let folder = state.folder_service.get_folder_by_id(id).await?;
    Ok(Json(folder))
}

/// POST /api/v1/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(payload): Json<NewFolder>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    validate(&payload)?;
    let folder = state.folder_service.create_folder(payload).await?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// PUT /api/v1/folders/{id}
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewFolder>,
) -> Result<Json<Folder>, ApiError> {
    validate(&payload)?;
    let folder = state.folder_service.update_folder(id, payload).await?;
    Ok(Json(folder))
}

/// DELETE /api/v1/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.folder_service.delete_folder(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// nameは必須。空文字はコアに渡す前に弾く。
fn validate(payload: &NewFolder) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("nameは必須です".to_string()));
    }
    Ok(())
}
