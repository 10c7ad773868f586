mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_register_user() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "sup3rs3cret"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert!(body["id"].as_str().is_some());
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password_hash").is_none(), "Hash must never be exposed");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "sup3rs3cret").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "name": "Impostor",
                "email": "alice@example.com",
                "password": "an0therpass"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let app = TestApp::new().await;

    let cases = vec![
        json!({"name": "", "email": "a@a.com", "password": "sup3rs3cret"}),
        json!({"name": "A", "email": "not-an-email", "password": "sup3rs3cret"}),
        json!({"name": "A", "email": "a@a.com", "password": "short"}),
    ];

    for payload in cases {
        let res = app.router.clone().oneshot(
            Request::builder().method("POST").uri("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "sup3rs3cret").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/sessions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "email": "alice@example.com",
                "password": "wrongpass"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/sessions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "email": "ghost@example.com",
                "password": "sup3rs3cret"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_requires_auth() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "New Name"}).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new().await;
    let token = app.signup_and_login("Alice", "alice@example.com").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/users")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "name": "Alice Cooper",
                "email": "cooper@example.com"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["name"], "Alice Cooper");
    assert_eq!(body["email"], "cooper@example.com");
}

#[tokio::test]
async fn test_update_email_must_stay_unique() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "sup3rs3cret").await;
    let token = app.signup_and_login("Bob", "bob@example.com").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/users")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"email": "alice@example.com"}).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_change_password_requires_matching_old_password() {
    let app = TestApp::new().await;
    let token = app.signup_and_login("Alice", "alice@example.com").await;

    // Wrong old password is refused.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/users")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "old_password": "wrongpass",
                "password": "n3wpassword",
                "confirm_password": "n3wpassword"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Mismatched confirmation is refused.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/users")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "old_password": "sup3rs3cret",
                "password": "n3wpassword",
                "confirm_password": "different"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Correct old password goes through and the new one works.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/users")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "old_password": "sup3rs3cret",
                "password": "n3wpassword",
                "confirm_password": "n3wpassword"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let new_token = app.login("alice@example.com", "n3wpassword").await;
    assert!(!new_token.is_empty());
}
