use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored asset referenced by meetup banners and user avatars. The upload
/// transport lives outside this service; only the metadata is kept here.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct File {
    pub id: String,
    pub name: String,
    pub path: String,
    pub created_at: DateTime<Utc>,
}

impl File {
    pub fn new(name: String, path: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            path,
            created_at: Utc::now(),
        }
    }

    /// Public URL the asset is served from.
    pub fn url(&self, app_url: &str) -> String {
        format!("{}/files/{}", app_url, self.path)
    }
}
