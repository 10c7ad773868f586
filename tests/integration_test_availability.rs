mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

async fn post_meetup(app: &TestApp, token: &str, title: &str, start: chrono::DateTime<Utc>) {
    let banner_id = app.seed_file("banner").await;
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/meetups")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "title": title,
                "description": "A meetup about things",
                "start_date": start.to_rfc3339(),
                "end_date": (start + Duration::hours(2)).to_rfc3339(),
                "address": "1 Main St",
                "banner_id": banner_id
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_available_requires_date() {
    let app = TestApp::new().await;
    let token = app.signup_and_login("Alice", "alice@example.com").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/meetups/available")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], "Invalid date");
}

#[tokio::test]
async fn test_available_requires_auth() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/meetups/available?date=2030-06-01")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_available_filters_by_day() {
    let app = TestApp::new().await;
    let token = app.signup_and_login("Alice", "alice@example.com").await;

    // Noon anchors keep both meetups inside their own calendar day.
    let day_one = (Utc::now() + Duration::days(10))
        .date_naive().and_hms_opt(12, 0, 0).unwrap().and_utc();
    let day_two = day_one + Duration::days(1);

    post_meetup(&app, &token, "On the day", day_one).await;
    post_meetup(&app, &token, "The day after", day_two).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/meetups/available?date={}", day_one.format("%Y-%m-%d")))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "On the day");
    assert_eq!(list[0]["organizer"]["email"], "alice@example.com");
    assert!(list[0]["organizer"]["avatar"].is_null());
}

#[tokio::test]
async fn test_available_pagination() {
    let app = TestApp::new().await;
    let token = app.signup_and_login("Alice", "alice@example.com").await;

    let day = (Utc::now() + Duration::days(10))
        .date_naive().and_hms_opt(9, 0, 0).unwrap().and_utc();

    for i in 0..3 {
        post_meetup(&app, &token, &format!("Meetup {}", i), day + Duration::hours(i)).await;
    }

    let date = day.format("%Y-%m-%d");
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/meetups/available?date={}&limit=2&page=1", date))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/meetups/available?date={}&limit=2&page=2", date))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_available_embeds_organizer_avatar() {
    let app = TestApp::new().await;
    let token = app.signup_and_login("Alice", "alice@example.com").await;

    let avatar_id = app.seed_file("avatar").await;
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/users")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"avatar_id": avatar_id}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let day = (Utc::now() + Duration::days(10))
        .date_naive().and_hms_opt(12, 0, 0).unwrap().and_utc();
    post_meetup(&app, &token, "With avatar", day).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/meetups/available?date={}", day.format("%Y-%m-%d")))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    let avatar = &body.as_array().unwrap()[0]["organizer"]["avatar"];
    assert!(avatar["url"].as_str().unwrap().starts_with("http://localhost:3000/files/"));
}
