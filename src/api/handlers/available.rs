use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::{
    requests::AvailableQuery,
    responses::{AvailableMeetupResponse, FileResponse, OrganizerResponse},
};
use crate::error::AppError;
use std::sync::Arc;
use chrono::{Duration, NaiveDate};

/// Meetups starting on the given calendar day, with their organizers.
pub async fn list_available(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Query(query): Query<AvailableQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.date
        .ok_or(AppError::Validation("Invalid date".to_string()))?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date".into()))?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 100);

    let day_start = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
    let day_end = day_start + Duration::days(1);

    let meetups = state.meetup_repo
        .list_by_period(day_start, day_end, limit, (page - 1) * limit)
        .await?;

    let mut responses = Vec::with_capacity(meetups.len());
    for meetup in &meetups {
        let organizer = state.user_repo.find_by_id(&meetup.organizer_id).await?
            .ok_or(AppError::Internal)?;

        let avatar = match &organizer.avatar_id {
            Some(avatar_id) => state.file_repo.find_by_id(avatar_id).await?
                .map(|f| FileResponse::from_model(&f, &state.config.app_url)),
            None => None,
        };

        responses.push(AvailableMeetupResponse::from_model(
            meetup,
            OrganizerResponse::from_model(&organizer, avatar),
        ));
    }

    Ok(Json(responses))
}
