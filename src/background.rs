use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use crate::domain::models::job::{Job, SUBSCRIPTION_MAIL};
use crate::error::AppError;
use crate::state::AppState;

pub async fn start_background_worker(state: Arc<AppState>) {
    info!("Starting background job worker...");

    loop {
        match state.job_repo.find_pending(10).await {
            Ok(jobs) => {
                for job in jobs {
                    let job_id = job.id.clone();
                    let job_type = job.job_type.clone();

                    let span = info_span!(
                        "background_job",
                        job_id = %job_id,
                        job_type = %job_type,
                    );

                    let state = state.clone();

                    async move {
                        info!("Processing job: {}", job_type);
                        match process_job(&state, &job).await {
                            Ok(_) => {
                                info!("Job completed successfully");
                                if let Err(e) = state.job_repo.update_status(&job.id, "COMPLETED", None).await {
                                    error!("Failed to mark job as completed: {:?}", e);
                                }
                            },
                            Err(e) => {
                                let err_msg = format!("{}", e);
                                error!("Job failed with error: {}", err_msg);
                                if let Err(up_err) = state.job_repo.update_status(&job.id, "FAILED", Some(err_msg)).await {
                                    error!("Failed to mark job as failed: {:?}", up_err);
                                }
                            }
                        }
                    }
                        .instrument(span)
                        .await;
                }
            }
            Err(e) => error!("Failed to fetch pending jobs: {:?}", e),
        }
        sleep(Duration::from_secs(5)).await;
    }
}

async fn process_job(state: &Arc<AppState>, job: &Job) -> Result<(), AppError> {
    if job.job_type != SUBSCRIPTION_MAIL {
        return Err(AppError::InternalWithMsg(format!("Unknown job type {}", job.job_type)));
    }

    let payload = &job.payload.0;

    let mut context = tera::Context::new();
    context.insert("organizer_name", &payload.organizer_name);
    context.insert("subscriber_name", &payload.subscriber_name);
    context.insert("subscriber_email", &payload.subscriber_email);
    context.insert("meetup_title", &payload.meetup_title);
    context.insert(
        "meetup_date",
        &payload.meetup_start_date.format("%B %e, %Y at %H:%M").to_string(),
    );

    let html_body = state.templates.render("subscription.html", &context)
        .map_err(|e| AppError::InternalWithMsg(format!("Tera render error: {:?}", e)))?;

    let subject = format!("New subscription: {}", payload.meetup_title);

    info!("Sending subscription mail to {}", payload.organizer_email);
    state.email_service.send(&payload.organizer_email, &subject, &html_body).await?;

    Ok(())
}
