use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::{requests::CreateFileRequest, responses::FileResponse};
use crate::domain::models::file::File;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Registers an already-stored asset. The upload transport is handled
/// outside this service.
pub async fn create_file(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<CreateFileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() || payload.path.trim().is_empty() {
        return Err(AppError::Validation("Name and path are required".into()));
    }

    let file = File::new(payload.name, payload.path);
    let created = state.file_repo.create(&file).await?;

    info!("Registered file: {}", created.id);

    Ok((
        StatusCode::CREATED,
        Json(FileResponse::from_model(&created, &state.config.app_url)),
    ))
}
