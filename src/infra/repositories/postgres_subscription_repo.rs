use crate::domain::{
    models::{meetup::Meetup, subscription::Subscription},
    ports::SubscriptionRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use chrono::{DateTime, Utc};

pub struct PostgresSubscriptionRepo {
    pool: PgPool,
}

impl PostgresSubscriptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepo {
    async fn create(&self, subscription: &Subscription) -> Result<Subscription, AppError> {
        sqlx::query_as::<_, Subscription>(
            "INSERT INTO subscriptions (id, meetup_id, user_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING *"
        )
            .bind(&subscription.id).bind(&subscription.meetup_id)
            .bind(&subscription.user_id).bind(subscription.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_pair(
        &self,
        meetup_id: &str,
        user_id: &str,
    ) -> Result<Option<Subscription>, AppError> {
        sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE meetup_id = $1 AND user_id = $2"
        )
            .bind(meetup_id).bind(user_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_meetups_for_user(&self, user_id: &str) -> Result<Vec<Meetup>, AppError> {
        sqlx::query_as::<_, Meetup>(
            "SELECT m.* FROM meetups m
             INNER JOIN subscriptions s ON s.meetup_id = m.id
             WHERE s.user_id = $1"
        )
            .bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_upcoming_meetups_for_user(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Meetup>, AppError> {
        sqlx::query_as::<_, Meetup>(
            "SELECT m.* FROM meetups m
             INNER JOIN subscriptions s ON s.meetup_id = m.id
             WHERE s.user_id = $1 AND m.start_date > $2
             ORDER BY m.start_date ASC"
        )
            .bind(user_id).bind(now)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
