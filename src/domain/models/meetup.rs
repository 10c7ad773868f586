use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Meetup {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub address_complement: Option<String>,
    pub banner_id: String,
    pub organizer_id: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewMeetupParams {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub address_complement: Option<String>,
    pub banner_id: String,
    pub organizer_id: String,
}

impl Meetup {
    pub fn new(params: NewMeetupParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: params.title,
            description: params.description,
            start_date: params.start_date,
            end_date: params.end_date,
            address: params.address,
            address_complement: params.address_complement,
            banner_id: params.banner_id,
            organizer_id: params.organizer_id,
            created_at: Utc::now(),
        }
    }

    /// Derived, never stored. Past meetups block edits, deletes and new
    /// subscriptions.
    pub fn past(&self) -> bool {
        self.start_date < Utc::now()
    }
}
