//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod exercises;
pub mod meals;
pub mod records;
pub mod sets;
pub mod stats;
pub mod templates;
pub mod tools;
pub mod workouts;
