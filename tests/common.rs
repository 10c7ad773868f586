use meetup_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_user_repo::SqliteUserRepo,
        sqlite_file_repo::SqliteFileRepo,
        sqlite_meetup_repo::SqliteMeetupRepo,
        sqlite_subscription_repo::SqliteSubscriptionRepo,
        sqlite_job_repo::SqliteJobRepo,
    },
    domain::models::file::File,
    domain::ports::EmailService,
    domain::services::auth_service::AuthService,
    background::start_background_worker,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    Router,
};
use std::str::FromStr;
use async_trait::async_trait;
use tera::Tera;
use tower::ServiceExt;
use serde_json::{json, Value};

#[derive(Clone, Debug)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

/// Records outgoing mails instead of talking to the relay.
#[derive(Default)]
pub struct RecordingEmailService {
    pub sent: Mutex<Vec<SentMail>>,
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub emails: Arc<RecordingEmailService>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut tera = Tera::default();
        tera.add_raw_template(
            "subscription.html",
            "<html>{{ organizer_name }}: {{ subscriber_name }} ({{ subscriber_email }}) joined {{ meetup_title }} on {{ meetup_date }}</html>",
        ).unwrap();
        let templates = Arc::new(tera);

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            app_url: "http://localhost:3000".to_string(),
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            jwt_secret: "test-secret".to_string(),
        };

        let auth_service = Arc::new(AuthService::new(&config));
        let emails = Arc::new(RecordingEmailService::default());

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            file_repo: Arc::new(SqliteFileRepo::new(pool.clone())),
            meetup_repo: Arc::new(SqliteMeetupRepo::new(pool.clone())),
            subscription_repo: Arc::new(SqliteSubscriptionRepo::new(pool.clone())),
            job_repo: Arc::new(SqliteJobRepo::new(pool.clone())),
            auth_service,
            email_service: emails.clone(),
            templates,
        });

        // Start Background Worker
        let worker_state = state.clone();
        tokio::spawn(async move {
            start_background_worker(worker_state).await;
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            emails,
        }
    }

    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({
                    "name": name,
                    "email": email,
                    "password": password
                }).to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("User registration failed in test helper: status {}", response.status());
        }

        parse_body(response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/sessions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({
                    "email": email,
                    "password": password
                }).to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["token"].as_str().expect("No token in session body").to_string()
    }

    /// Registers a user and returns their bearer token.
    pub async fn signup_and_login(&self, name: &str, email: &str) -> String {
        self.register_user(name, email, "sup3rs3cret").await;
        self.login(email, "sup3rs3cret").await
    }

    /// Seeds a stored asset directly, bypassing the API.
    pub async fn seed_file(&self, name: &str) -> String {
        let file = File::new(name.to_string(), format!("{}.png", Uuid::new_v4()));
        let created = self.state.file_repo.create(&file).await.expect("Failed to seed file");
        created.id
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
