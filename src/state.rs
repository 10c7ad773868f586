use std::sync::Arc;
use crate::domain::ports::{
    EmailService, FileRepository, JobRepository, MeetupRepository,
    SubscriptionRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub file_repo: Arc<dyn FileRepository>,
    pub meetup_repo: Arc<dyn MeetupRepository>,
    pub subscription_repo: Arc<dyn SubscriptionRepository>,
    pub job_repo: Arc<dyn JobRepository>,
    pub auth_service: Arc<AuthService>,
    pub email_service: Arc<dyn EmailService>,
    pub templates: Arc<Tera>,
}
