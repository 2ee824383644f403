//! HTTP-level integration tests for the auth endpoints: signup, login,
//! refresh-token rotation, and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, signup};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_returns_tokens_and_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "lifter@example.com",
        "password": "test_password_123!",
        "display_name": "Lifter",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["email"], "lifter@example.com");
    assert_eq!(json["user"]["display_name"], "Lifter");
    assert!(
        json["user"].get("password_hash").is_none(),
        "hashes must never be serialized"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    signup(app.clone(), "dup@example.com").await;

    let body = serde_json::json!({
        "email": "dup@example.com",
        "password": "another_password_456!",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_rejects_weak_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "weak@example.com", "password": "short" });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, user_id) = signup(app.clone(), "login@example.com").await;

    let body = serde_json::json!({
        "email": "login@example.com",
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["user"]["id"], user_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    signup(app.clone(), "wrongpw@example.com").await;

    let body = serde_json::json!({
        "email": "wrongpw@example.com",
        "password": "incorrect_password",
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email_is_indistinguishable(pool: PgPool) {
    let app = common::build_test_app(pool);
    signup(app.clone(), "known@example.com").await;

    let known = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "email": "known@example.com", "password": "bad" }),
    )
    .await;
    let unknown = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "ghost@example.com", "password": "bad" }),
    )
    .await;

    assert_eq!(known.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    // Same message either way, so the endpoint cannot be used to probe for
    // registered emails.
    let known_json = body_json(known).await;
    let unknown_json = body_json(unknown).await;
    assert_eq!(known_json["error"], unknown_json["error"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_the_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "rotate@example.com", "password": "test_password_123!" }),
    )
    .await;
    let json = body_json(response).await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    // First exchange succeeds and yields a different refresh token.
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"].as_str().unwrap(), refresh_token);

    // The spent token is dead.
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_all_sessions(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "logout@example.com", "password": "test_password_123!" }),
    )
    .await;
    let json = body_json(response).await;
    let access_token = json["access_token"].as_str().unwrap().to_string();
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        serde_json::json!({}),
        &access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_routes_require_a_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/workouts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/workouts", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
