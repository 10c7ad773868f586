use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::user::User;
use crate::error::AppError;
use std::sync::Arc;
use argon2::{password_hash::{SaltString, PasswordHasher}, Argon2, PasswordHash, PasswordVerifier};
use rand::rngs::OsRng;
use tracing::info;

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}

fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AppError::Internal)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError::Validation("A valid email is required".into()));
    }
    if payload.password.len() < 6 {
        return Err(AppError::Validation("Password must be at least 6 characters".into()));
    }

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Validation("User already exists".into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = User::new(payload.name, payload.email, password_hash);
    let created = state.user_repo.create(&user).await?;

    info!("Created user: {}", created.id);

    Ok((StatusCode::CREATED, Json(serde_json::json!({
        "id": created.id,
        "name": created.name,
        "email": created.email
    }))))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::Unauthorized)?;

    if let Some(email) = payload.email {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AppError::Validation("A valid email is required".into()));
        }
        if email != user.email {
            if state.user_repo.find_by_email(&email).await?.is_some() {
                return Err(AppError::Validation("User already exists".into()));
            }
            user.email = email;
        }
    }

    if let Some(password) = payload.password {
        if password.len() < 6 {
            return Err(AppError::Validation("Password must be at least 6 characters".into()));
        }
        if payload.confirm_password.as_deref() != Some(password.as_str()) {
            return Err(AppError::Validation("Password confirmation does not match".into()));
        }

        let old_password = payload.old_password
            .ok_or(AppError::Validation("Old password is required".into()))?;
        if !verify_password(&old_password, &user.password_hash)? {
            return Err(AppError::Forbidden("Password does not match".into()));
        }

        user.password_hash = hash_password(&password)?;
    }

    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".into()));
        }
        user.name = name;
    }

    if let Some(avatar_id) = payload.avatar_id {
        state.file_repo.find_by_id(&avatar_id).await?
            .ok_or(AppError::Validation("Avatar not found".to_string()))?;
        user.avatar_id = Some(avatar_id);
    }

    let updated = state.user_repo.update(&user).await?;

    info!("Updated user: {}", updated.id);

    Ok(Json(serde_json::json!({
        "id": updated.id,
        "name": updated.name,
        "email": updated.email
    })))
}
