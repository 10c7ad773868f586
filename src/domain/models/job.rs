use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

pub const SUBSCRIPTION_MAIL: &str = "SUBSCRIPTION_MAIL";

/// Everything the worker needs to render and address the notification,
/// denormalized at enqueue time so the send does not depend on live rows.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JobPayload {
    pub meetup_title: String,
    pub meetup_start_date: DateTime<Utc>,
    pub organizer_name: String,
    pub organizer_email: String,
    pub subscriber_name: String,
    pub subscriber_email: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Job {
    pub id: String,
    pub job_type: String,
    pub payload: Json<JobPayload>,
    pub execute_at: DateTime<Utc>,
    pub status: String,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Job {
    pub fn new(job_type: &str, payload: JobPayload, execute_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            job_type: job_type.to_string(),
            payload: Json(payload),
            execute_at,
            status: "PENDING".to_string(),
            error_message: None,
            created_at: Utc::now(),
        }
    }
}
