//! Integration tests for the dashboard summary and grouped workout list.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get_auth, patch_json_auth, post_json_auth, signup};
use ironlog_core::calendar;
use sqlx::PgPool;

async fn create_workout(app: axum::Router, token: &str, name: &str) -> i64 {
    let response = post_json_auth(
        app,
        "/api/v1/workouts",
        serde_json::json!({ "name": name }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn backdate_workout(pool: &PgPool, id: i64, date: chrono::DateTime<Utc>) {
    sqlx::query("UPDATE workouts SET date = $2, time_started = $2 WHERE id = $1")
        .bind(id)
        .bind(date)
        .execute(pool)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_summary_degrades_to_zero_for_empty_account(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = signup(app.clone(), "new@example.com").await;

    let response = get_auth(app, "/api/v1/stats/summary", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["workouts_this_week"], 0);
    assert_eq!(json["data"]["total_volume_this_week"], 0);
    assert_eq!(json["data"]["average_duration_mins"], 0);
    assert_eq!(json["data"]["current_streak_days"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_summary_counts_only_this_week(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, _) = signup(app.clone(), "a@example.com").await;

    let this_week = create_workout(app.clone(), &token, "Current").await;
    let last_week = create_workout(app.clone(), &token, "Old").await;
    backdate_workout(&pool, last_week, calendar::week_start(Utc::now()) - Duration::days(2)).await;

    // Volume: 100x10 + 200x5 counted, warmup 50x10 excluded, and the
    // out-of-week 999x1 excluded by date.
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/workouts/{this_week}/exercises"),
        serde_json::json!({ "exercise_name": "Bench" }),
        &token,
    )
    .await;
    let exercise = body_json(response).await["id"].as_i64().unwrap();

    post_json_auth(
        app.clone(),
        &format!("/api/v1/exercises/{exercise}/sets"),
        serde_json::json!({ "weight": 100.0, "reps": 10 }),
        &token,
    )
    .await;
    post_json_auth(
        app.clone(),
        &format!("/api/v1/exercises/{exercise}/sets"),
        serde_json::json!({ "weight": 200.0, "reps": 5 }),
        &token,
    )
    .await;
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/exercises/{exercise}/sets"),
        serde_json::json!({ "weight": 50.0, "reps": 10 }),
        &token,
    )
    .await;
    let warmup = body_json(response).await["id"].as_i64().unwrap();
    patch_json_auth(
        app.clone(),
        &format!("/api/v1/sets/{warmup}"),
        serde_json::json!({ "is_warmup": true }),
        &token,
    )
    .await;

    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/workouts/{last_week}/exercises"),
        serde_json::json!({ "exercise_name": "Deadlift" }),
        &token,
    )
    .await;
    let old_exercise = body_json(response).await["id"].as_i64().unwrap();
    post_json_auth(
        app.clone(),
        &format!("/api/v1/exercises/{old_exercise}/sets"),
        serde_json::json!({ "weight": 999.0, "reps": 1 }),
        &token,
    )
    .await;

    // Duration: only the current workout has one.
    patch_json_auth(
        app.clone(),
        &format!("/api/v1/workouts/{this_week}"),
        serde_json::json!({ "duration": 40 }),
        &token,
    )
    .await;

    let response = get_auth(app, "/api/v1/stats/summary", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["workouts_this_week"], 1);
    assert_eq!(json["data"]["total_volume_this_week"], 2000);
    assert_eq!(json["data"]["average_duration_mins"], 40);
    assert_eq!(json["data"]["current_streak_days"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_summary_cache_is_invalidated_by_mutations(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = signup(app.clone(), "a@example.com").await;

    let response = get_auth(app.clone(), "/api/v1/stats/summary", &token).await;
    assert_eq!(body_json(response).await["data"]["workouts_this_week"], 0);

    // The create must evict the cached zero-count summary.
    create_workout(app.clone(), &token, "Fresh").await;

    let response = get_auth(app, "/api/v1/stats/summary", &token).await;
    assert_eq!(body_json(response).await["data"]["workouts_this_week"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_grouped_buckets_by_calendar_period(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, _) = signup(app.clone(), "a@example.com").await;

    create_workout(app.clone(), &token, "Today").await;
    let last_week = create_workout(app.clone(), &token, "Last Week").await;
    backdate_workout(&pool, last_week, calendar::week_start(Utc::now()) - Duration::days(3)).await;
    let old = create_workout(app.clone(), &token, "January").await;
    backdate_workout(&pool, old, "2026-01-15T12:00:00Z".parse().unwrap()).await;

    let response = get_auth(app, "/api/v1/workouts/grouped", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let groups = json["data"].as_array().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0]["label"], "This Week");
    assert_eq!(groups[0]["workouts"][0]["name"], "Today");
    assert_eq!(groups[1]["label"], "Last Week");
    assert_eq!(groups[2]["label"], "January 2026");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_streak_spans_consecutive_days(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, _) = signup(app.clone(), "a@example.com").await;

    // Today, yesterday, and two workouts the day before (duplicates must
    // count once); the gap four days back ends the streak.
    create_workout(app.clone(), &token, "Today").await;
    for days_ago in [1, 2, 2, 4] {
        let id = create_workout(app.clone(), &token, "Past").await;
        backdate_workout(&pool, id, Utc::now() - Duration::days(days_ago)).await;
    }

    let response = get_auth(app, "/api/v1/stats/summary", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["current_streak_days"], 3);
}
