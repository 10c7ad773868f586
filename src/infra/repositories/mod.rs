pub mod sqlite_user_repo;
pub mod sqlite_file_repo;
pub mod sqlite_meetup_repo;
pub mod sqlite_subscription_repo;
pub mod sqlite_job_repo;

pub mod postgres_user_repo;
pub mod postgres_file_repo;
pub mod postgres_meetup_repo;
pub mod postgres_subscription_repo;
pub mod postgres_job_repo;
