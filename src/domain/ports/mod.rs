use crate::domain::models::{
    file::File, job::Job, meetup::Meetup, subscription::Subscription, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
}

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn create(&self, file: &File) -> Result<File, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<File>, AppError>;
}

#[async_trait]
pub trait MeetupRepository: Send + Sync {
    async fn create(&self, meetup: &Meetup) -> Result<Meetup, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Meetup>, AppError>;
    /// The organizer's own meetups, paginated, ordered by creation time.
    async fn list_by_organizer(
        &self,
        organizer_id: &str,
        limit: i64,
        offset: i64,
        ascending: bool,
    ) -> Result<Vec<Meetup>, AppError>;
    /// Meetups starting within [start, end), paginated, ordered by start date.
    async fn list_by_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Meetup>, AppError>;
    async fn update(&self, meetup: &Meetup) -> Result<Meetup, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn create(&self, subscription: &Subscription) -> Result<Subscription, AppError>;
    async fn find_by_pair(
        &self,
        meetup_id: &str,
        user_id: &str,
    ) -> Result<Option<Subscription>, AppError>;
    /// Every meetup the user holds a subscription to, joined through the
    /// subscriptions table. Input to the schedule-conflict check.
    async fn list_meetups_for_user(&self, user_id: &str) -> Result<Vec<Meetup>, AppError>;
    /// Subscribed meetups that have not started yet, earliest first.
    async fn list_upcoming_meetups_for_user(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Meetup>, AppError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<Job, AppError>;
    async fn find_pending(&self, limit: i32) -> Result<Vec<Job>, AppError>;
    async fn update_status(&self, id: &str, status: &str, error_message: Option<String>) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}
