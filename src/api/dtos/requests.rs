use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_id: Option<String>,
    pub old_password: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Deserialize)]
pub struct SessionRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateFileRequest {
    pub name: String,
    pub path: String,
}

#[derive(Deserialize)]
pub struct CreateMeetupRequest {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub address_complement: Option<String>,
    pub banner_id: String,
}

#[derive(Deserialize)]
pub struct UpdateMeetupRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub address_complement: Option<String>,
    pub banner_id: Option<String>,
    pub organizer_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSubscriptionRequest {
    pub meetup_id: String,
}

#[derive(Deserialize)]
pub struct MeetupListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub order: Option<String>,
}

#[derive(Deserialize)]
pub struct AvailableQuery {
    pub date: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
