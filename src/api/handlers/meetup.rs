use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::{
    requests::{CreateMeetupRequest, UpdateMeetupRequest, MeetupListQuery},
    responses::{FileResponse, MeetupResponse},
};
use crate::domain::models::meetup::{Meetup, NewMeetupParams};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

async fn banner_response(
    state: &Arc<AppState>,
    banner_id: &str,
) -> Result<Option<FileResponse>, AppError> {
    let banner = state.file_repo.find_by_id(banner_id).await?;
    Ok(banner.map(|f| FileResponse::from_model(&f, &state.config.app_url)))
}

pub async fn list_meetups(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<MeetupListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let ascending = query.order.as_deref() == Some("asc");

    let meetups = state.meetup_repo
        .list_by_organizer(&user_id, limit, (page - 1) * limit, ascending)
        .await?;

    let mut responses = Vec::with_capacity(meetups.len());
    for meetup in &meetups {
        let banner = banner_response(&state, &meetup.banner_id).await?;
        responses.push(MeetupResponse::from_model(meetup, banner));
    }

    Ok(Json(responses))
}

pub async fn create_meetup(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateMeetupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if payload.description.trim().is_empty() {
        return Err(AppError::Validation("Description is required".into()));
    }
    if payload.address.trim().is_empty() {
        return Err(AppError::Validation("Address is required".into()));
    }

    if payload.start_date < Utc::now() {
        return Err(AppError::Validation("Past dates are not permitted".into()));
    }
    if payload.end_date <= payload.start_date {
        return Err(AppError::Validation("End date must be after start date".into()));
    }

    state.file_repo.find_by_id(&payload.banner_id).await?
        .ok_or(AppError::Validation("Banner not found".to_string()))?;

    let meetup = Meetup::new(NewMeetupParams {
        title: payload.title,
        description: payload.description,
        start_date: payload.start_date,
        end_date: payload.end_date,
        address: payload.address,
        address_complement: payload.address_complement,
        banner_id: payload.banner_id,
        organizer_id: user_id,
    });

    let created = state.meetup_repo.create(&meetup).await?;

    info!("Meetup created: {} by {}", created.id, created.organizer_id);

    let banner = banner_response(&state, &created.banner_id).await?;
    Ok((StatusCode::CREATED, Json(MeetupResponse::from_model(&created, banner))))
}

pub async fn update_meetup(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(meetup_id): Path<String>,
    Json(payload): Json<UpdateMeetupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut meetup = state.meetup_repo.find_by_id(&meetup_id).await?
        .ok_or(AppError::NotFound("Meetup not found".to_string()))?;

    if meetup.organizer_id != user_id {
        return Err(AppError::Forbidden("You don't have permission to update this meetup".into()));
    }
    if meetup.past() {
        return Err(AppError::Forbidden("You cannot edit meetups that already happened".into()));
    }
    if payload.organizer_id.is_some() {
        return Err(AppError::Forbidden("You cannot change the meetup's organizer".into()));
    }

    if let Some(title) = payload.title {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".into()));
        }
        meetup.title = title;
    }
    if let Some(description) = payload.description {
        if description.trim().is_empty() {
            return Err(AppError::Validation("Description is required".into()));
        }
        meetup.description = description;
    }
    if let Some(address) = payload.address {
        if address.trim().is_empty() {
            return Err(AppError::Validation("Address is required".into()));
        }
        meetup.address = address;
    }
    if payload.address_complement.is_some() {
        meetup.address_complement = payload.address_complement;
    }
    if let Some(banner_id) = payload.banner_id {
        state.file_repo.find_by_id(&banner_id).await?
            .ok_or(AppError::Validation("Banner not found".to_string()))?;
        meetup.banner_id = banner_id;
    }

    if let Some(start_date) = payload.start_date {
        meetup.start_date = start_date;
    }
    if let Some(end_date) = payload.end_date {
        meetup.end_date = end_date;
    }
    if meetup.end_date <= meetup.start_date {
        return Err(AppError::Validation("End date must be after start date".into()));
    }

    let updated = state.meetup_repo.update(&meetup).await?;

    info!("Meetup updated: {}", updated.id);

    let banner = banner_response(&state, &updated.banner_id).await?;
    Ok(Json(MeetupResponse::from_model(&updated, banner)))
}

pub async fn delete_meetup(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(meetup_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let meetup = state.meetup_repo.find_by_id(&meetup_id).await?
        .ok_or(AppError::NotFound("Meetup not found".to_string()))?;

    if meetup.organizer_id != user_id {
        return Err(AppError::Forbidden("You don't have permission to delete this meetup".into()));
    }
    if meetup.past() {
        return Err(AppError::Forbidden("You cannot delete meetups that already happened".into()));
    }

    state.meetup_repo.delete(&meetup.id).await
        .map_err(|_| AppError::Validation("Meetup could not be deleted".into()))?;

    info!("Meetup deleted: {}", meetup.id);

    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
