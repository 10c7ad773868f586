use crate::domain::{models::meetup::Meetup, ports::MeetupRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use chrono::{DateTime, Utc};

pub struct PostgresMeetupRepo {
    pool: PgPool,
}

impl PostgresMeetupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetupRepository for PostgresMeetupRepo {
    async fn create(&self, meetup: &Meetup) -> Result<Meetup, AppError> {
        sqlx::query_as::<_, Meetup>(
            "INSERT INTO meetups (id, title, description, start_date, end_date, address, address_complement, banner_id, organizer_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *"
        )
            .bind(&meetup.id).bind(&meetup.title).bind(&meetup.description)
            .bind(meetup.start_date).bind(meetup.end_date).bind(&meetup.address)
            .bind(&meetup.address_complement).bind(&meetup.banner_id)
            .bind(&meetup.organizer_id).bind(meetup.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Meetup>, AppError> {
        sqlx::query_as::<_, Meetup>("SELECT * FROM meetups WHERE id = $1")
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
            "SELECT * FROM meetups WHERE organizer_id = $1 ORDER BY created_at ASC, id ASC LIMIT $2 OFFSET $3"
        } else {
            "SELECT * FROM meetups WHERE organizer_id = $1 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
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
            "SELECT * FROM meetups WHERE start_date >= $1 AND start_date < $2
             ORDER BY start_date ASC LIMIT $3 OFFSET $4"
        )
            .bind(start).bind(end).bind(limit).bind(offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, meetup: &Meetup) -> Result<Meetup, AppError> {
        sqlx::query_as::<_, Meetup>(
            "UPDATE meetups SET title = $1, description = $2, start_date = $3, end_date = $4, address = $5, address_complement = $6, banner_id = $7
             WHERE id = $8
             RETURNING *"
        )
            .bind(&meetup.title).bind(&meetup.description)
            .bind(meetup.start_date).bind(meetup.end_date)
            .bind(&meetup.address).bind(&meetup.address_complement)
            .bind(&meetup.banner_id).bind(&meetup.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM meetups WHERE id = $1")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Meetup not found".into()));
        }
        Ok(())
    }
}
