use crate::domain::{models::meetup::Meetup, ports::MeetupRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::{DateTime, Utc};

pub struct SqliteMeetupRepo {
    pool: SqlitePool,
}

impl SqliteMeetupRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetupRepository for SqliteMeetupRepo {
    async fn create(&self, meetup: &Meetup) -> Result<Meetup, AppError> {
        sqlx::query_as::<_, Meetup>(
            "INSERT INTO meetups (id, title, description, start_date, end_date, address, address_complement, banner_id, organizer_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&meetup.id).bind(&meetup.title).bind(&meetup.description)
            .bind(meetup.start_date).bind(meetup.end_date).bind(&meetup.address)
            .bind(&meetup.address_complement).bind(&meetup.banner_id)
            .bind(&meetup.organizer_id).bind(meetup.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Meetup>, AppError> {
        sqlx::query_as::<_, Meetup>("SELECT * FROM meetups WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_organizer(
        &self,
        organizer_id: &str,
        limit: i64,
        offset: i64,
        ascending: bool,
    ) -> Result<Vec<Meetup>, AppError> {
        let query = if ascending {
            "SELECT * FROM meetups WHERE organizer_id = ? ORDER BY created_at ASC, id ASC LIMIT ? OFFSET ?"
        } else {
            "SELECT * FROM meetups WHERE organizer_id = ? ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
        };
        sqlx::query_as::<_, Meetup>(query)
            .bind(organizer_id).bind(limit).bind(offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Meetup>, AppError> {
        sqlx::query_as::<_, Meetup>(
            "SELECT * FROM meetups WHERE start_date >= ? AND start_date < ?
             ORDER BY start_date ASC LIMIT ? OFFSET ?"
        )
            .bind(start).bind(end).bind(limit).bind(offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, meetup: &Meetup) -> Result<Meetup, AppError> {
        sqlx::query_as::<_, Meetup>(
            "UPDATE meetups SET title = ?, description = ?, start_date = ?, end_date = ?, address = ?, address_complement = ?, banner_id = ?
             WHERE id = ?
             RETURNING *"
        )
            .bind(&meetup.title).bind(&meetup.description)
            .bind(meetup.start_date).bind(meetup.end_date)
            .bind(&meetup.address).bind(&meetup.address_complement)
            .bind(&meetup.banner_id).bind(&meetup.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM meetups WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Meetup not found".into()));
        }
        Ok(())
    }
}
