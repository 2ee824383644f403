pub mod auth;
pub mod exercises;
pub mod health;
pub mod meals;
pub mod records;
pub mod sets;
pub mod stats;
pub mod templates;
pub mod tools;
pub mod workouts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                  signup (public)
/// /auth/login                   login (public)
/// /auth/refresh                 refresh (public)
/// /auth/logout                  logout (requires auth)
///
/// /workouts                     list (?limit), create (POST)
/// /workouts/grouped             display buckets
/// /workouts/{id}                detail, patch, delete
/// /workouts/{id}/finish         finish (POST)
/// /workouts/{id}/exercises      add exercise (POST)
///
/// /exercises/history            distinct names for autocomplete
/// /exercises/{id}               patch, delete
/// /exercises/{id}/sets          add set (POST)
///
/// /sets/{id}                    patch, delete
///
/// /templates                    list, create
/// /templates/{id}               detail, delete
///
/// /stats/summary                dashboard numbers (cached)
///
/// /meals                        recent (?limit), manual entry (POST)
/// /meals/analyze                photo analysis (POST)
/// /meals/today                  macro totals
///
/// /records                      personal records (?exercise_name)
///
/// /tools/one-rep-max            Epley estimate (?weight&reps)
/// /tools/plates                 plate breakdown (?target&bar)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (signup, login, refresh, logout).
        .nest("/auth", auth::router())
        // Workout sessions and their nested exercises.
        .nest("/workouts", workouts::router())
        // Exercise-scoped operations and the name history.
        .nest("/exercises", exercises::router())
        // Individual set operations.
        .nest("/sets", sets::router())
        // Reusable workout templates.
        .nest("/templates", templates::router())
        // Dashboard summary.
        .nest("/stats", stats::router())
        // Meal log and photo analysis.
        .nest("/meals", meals::router())
        // Personal records (read-only).
        .nest("/records", records::router())
        // Stateless training tools.
        .nest("/tools", tools::router())
}
