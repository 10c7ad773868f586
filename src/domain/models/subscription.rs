use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Subscription {
    pub id: String,
    pub meetup_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(meetup_id: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            meetup_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
