use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::SessionRequest;
use crate::domain::models::auth::{SessionResponse, UserProfile};
use crate::error::AppError;
use std::sync::Arc;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use tracing::info;

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_email(&payload.email).await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default().verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let token = state.auth_service.sign_token(&user)?;

    info!("User logged in: {}", user.id);

    Ok(Json(SessionResponse {
        user: UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
        },
        token,
    }))
}
