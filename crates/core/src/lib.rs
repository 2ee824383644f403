//! Shared domain types and pure logic for the Ironlog backend.
//!
//! Everything here is database- and HTTP-free: the error taxonomy, ID and
//! timestamp aliases, calendar math (week windows, streaks, display
//! buckets), and the training-tool arithmetic.

pub mod calendar;
pub mod error;
pub mod tools;
pub mod types;
