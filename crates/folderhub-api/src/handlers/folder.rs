//! Folder hierarchy handlers.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use folderhub_core::AppError;
use folderhub_entity::item::{FileSystemItem, TreeNode};

use crate::dto::request::{CreateFileRequest, CreateFolderRequest, MoveItemRequest, PathQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/folders?path=
pub async fn get_folder(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<ApiResponse<Vec<TreeNode>>>, ApiError> {
    let tree = state.folders.retrieve(&query.path).await?;
    Ok(Json(ApiResponse::ok(tree)))
}

/// POST /api/folders/file
pub async fn create_file(
    State(state): State<AppState>,
    Json(req): Json<CreateFileRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FileSystemItem>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let file = state
        .folders
        .create_file(&req.path, &req.name, &req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(file))))
}

/// POST /api/folders/folder
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FileSystemItem>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state.folders.create_folder(&req.path, &req.name).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(folder))))
}

/// PUT /api/folders
pub async fn move_item(
    State(state): State<AppState>,
    Json(req): Json<MoveItemRequest>,
) -> Result<Json<ApiResponse<FileSystemItem>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let moved = state
        .folders
        .move_item(&req.current_path, &req.new_path)
        .await?;

    Ok(Json(ApiResponse::ok(moved)))
}

/// DELETE /api/folders?path=
pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<StatusCode, ApiError> {
    state.folders.remove(&query.path).await?;
    Ok(StatusCode::NO_CONTENT)
}
