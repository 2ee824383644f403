//! Calendar math for dashboard statistics and workout grouping.
//!
//! The training week starts on Sunday at midnight UTC. All functions take
//! "now" as a parameter so aggregation queries and tests share one clock
//! convention.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::types::Timestamp;

/// Start of the week containing `now`: the most recent Sunday at 00:00 UTC.
pub fn week_start(now: Timestamp) -> Timestamp {
    let today = now.date_naive();
    let days_from_sunday = i64::from(today.weekday().num_days_from_sunday());
    let sunday = today - Duration::days(days_from_sunday);
    sunday.and_time(NaiveTime::MIN).and_utc()
}

/// Midnight UTC at the start of the day containing `now`.
pub fn day_start(now: Timestamp) -> Timestamp {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Midnight UTC at the start of the day after `now`.
pub fn next_day_start(now: Timestamp) -> Timestamp {
    day_start(now) + Duration::days(1)
}

/// Count consecutive calendar days with at least one workout, ending today.
///
/// `workout_days` may be in any order and may contain duplicates (several
/// workouts on one day count once). A streak may begin today or yesterday:
/// a user who trained every day through last night still has a live streak
/// this morning. The walk stops at the first gap of more than one day.
pub fn current_streak(workout_days: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut days: Vec<NaiveDate> = workout_days.to_vec();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let mut streak = 0u32;
    let mut expected = today;

    for day in days {
        if day == expected {
            streak += 1;
        } else if streak == 0 && day == today - Duration::days(1) {
            // No workout yet today; the streak starts from yesterday.
            streak = 1;
            expected = day;
        } else {
            break;
        }
        expected -= Duration::days(1);
    }

    streak
}

/// Display bucket for a workout date relative to `now`.
///
/// Buckets are computed from calendar comparison at call time and are never
/// stored: "This Week", "Last Week", "Earlier This Month", then a
/// "<Month> <Year>" label for anything older.
pub fn period_label(date: NaiveDate, now: Timestamp) -> String {
    let this_week = week_start(now).date_naive();
    let last_week = this_week - Duration::days(7);
    let today = now.date_naive();
    let this_month = first_of_month(today);

    if date >= this_week {
        "This Week".to_owned()
    } else if date >= last_week {
        "Last Week".to_owned()
    } else if date >= this_month {
        "Earlier This Month".to_owned()
    } else {
        date.format("%B %Y").to_string()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
