use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::{
    requests::CreateSubscriptionRequest,
    responses::{FileResponse, SubscribedMeetupResponse},
};
use crate::domain::models::job::{Job, JobPayload, SUBSCRIPTION_MAIL};
use crate::domain::models::subscription::Subscription;
use crate::domain::services::conflict::find_schedule_conflict;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};

/// The requester's upcoming subscribed meetups, earliest first.
pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let meetups = state.subscription_repo
        .list_upcoming_meetups_for_user(&user_id, Utc::now())
        .await?;

    let mut responses = Vec::with_capacity(meetups.len());
    for meetup in &meetups {
        let banner = state.file_repo.find_by_id(&meetup.banner_id).await?
            .map(|f| FileResponse::from_model(&f, &state.config.app_url));
        responses.push(SubscribedMeetupResponse::from_model(meetup, banner));
    }

    Ok(Json(responses))
}

pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let meetup = state.meetup_repo.find_by_id(&payload.meetup_id).await?
        .ok_or(AppError::NotFound("Meetup not found".to_string()))?;

    if meetup.past() {
        return Err(AppError::Validation("You can only subscribe to upcoming meetups".into()));
    }

    if meetup.organizer_id == user_id {
        return Err(AppError::Forbidden("You are the organizer of this meetup".into()));
    }

    if state.subscription_repo.find_by_pair(&meetup.id, &user_id).await?.is_some() {
        return Err(AppError::Forbidden("You cannot subscribe to the same meetup twice".into()));
    }

    let subscribed = state.subscription_repo.list_meetups_for_user(&user_id).await?;
    if let Some(clash) = find_schedule_conflict(&meetup, &subscribed) {
        info!("Subscription rejected: {} overlaps {}", meetup.id, clash.id);
        return Err(AppError::Forbidden(
            "You are already subscribed to a meetup taking place at the same time".into(),
        ));
    }

    let subscription = Subscription::new(meetup.id.clone(), user_id.clone());
    let created = state.subscription_repo.create(&subscription).await?;

    info!("Subscription created: {} for meetup {}", created.id, meetup.id);

    let organizer = state.user_repo.find_by_id(&meetup.organizer_id).await?
        .ok_or(AppError::Internal)?;
    let subscriber = state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::Internal)?;

    let job = Job::new(
        SUBSCRIPTION_MAIL,
        JobPayload {
            meetup_title: meetup.title.clone(),
            meetup_start_date: meetup.start_date,
            organizer_name: organizer.name,
            organizer_email: organizer.email,
            subscriber_name: subscriber.name,
            subscriber_email: subscriber.email,
        },
        Utc::now(),
    );

    // A queue failure only costs the notification, never the subscription.
    if let Err(e) = state.job_repo.create(&job).await {
        warn!("Failed to enqueue subscription mail for {}: {:?}", created.id, e);
    }

    Ok(Json(created))
}
