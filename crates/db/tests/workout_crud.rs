//! Repository-level tests for workouts, exercises, and sets: ordering
//! assignment, ownership scoping, cascade deletion, and the finish
//! computation.

mod common;

use chrono::{Duration, Utc};
use common::seed_user;
use ironlog_db::models::exercise::{CreateExercise, UpdateExercise};
use ironlog_db::models::set::{CreateSet, UpdateSet};
use ironlog_db::models::workout::{CreateWorkout, UpdateWorkout};
use ironlog_db::repositories::{ExerciseRepo, SetRepo, WorkoutRepo};
use sqlx::PgPool;

async fn seed_workout(pool: &PgPool, user_id: i64, name: &str) -> i64 {
    WorkoutRepo::create(
        pool,
        &CreateWorkout {
            user_id,
            name: name.to_owned(),
            template_id: None,
            notes: None,
        },
        Utc::now(),
    )
    .await
    .expect("seed workout")
    .id
}

#[sqlx::test]
async fn test_create_workout_starts_in_progress(pool: PgPool) {
    let user = seed_user(&pool, "a@example.com").await;
    let now = Utc::now();
    let workout = WorkoutRepo::create(
        &pool,
        &CreateWorkout {
            user_id: user,
            name: "Push Day".to_owned(),
            template_id: None,
            notes: None,
        },
        now,
    )
    .await
    .unwrap();

    assert_eq!(workout.name, "Push Day");
    assert_eq!(workout.duration, None);
    assert_eq!(workout.date, workout.time_started);
}

#[sqlx::test]
async fn test_workout_invisible_to_other_users(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;
    let id = seed_workout(&pool, owner, "Private").await;

    assert!(WorkoutRepo::find_by_id(&pool, owner, id).await.unwrap().is_some());
    assert!(WorkoutRepo::find_by_id(&pool, other, id).await.unwrap().is_none());

    // Foreign mutations match no rows and change nothing.
    let renamed = WorkoutRepo::update(
        &pool,
        other,
        id,
        &UpdateWorkout {
            name: Some("Hijacked".to_owned()),
            duration: None,
            notes: None,
        },
    )
    .await
    .unwrap();
    assert!(renamed.is_none());
    assert!(!WorkoutRepo::delete(&pool, other, id).await.unwrap());

    let still_there = WorkoutRepo::find_by_id(&pool, owner, id).await.unwrap().unwrap();
    assert_eq!(still_there.name, "Private");
}

#[sqlx::test]
async fn test_finish_computes_minutes_from_stored_start(pool: PgPool) {
    let user = seed_user(&pool, "a@example.com").await;
    let id = seed_workout(&pool, user, "Timed").await;

    let workout = WorkoutRepo::find_by_id(&pool, user, id).await.unwrap().unwrap();
    let finish_at = workout.time_started + Duration::minutes(47) + Duration::seconds(10);

    let finished = WorkoutRepo::finish(&pool, user, id, finish_at).await.unwrap().unwrap();
    assert_eq!(finished.duration, Some(47));

    // A second finish with a later clock overwrites (no double-finish guard).
    let refinished = WorkoutRepo::finish(&pool, user, id, finish_at + Duration::minutes(13))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(refinished.duration, Some(60));
}

#[sqlx::test]
async fn test_exercise_order_assignment(pool: PgPool) {
    let user = seed_user(&pool, "a@example.com").await;
    let workout = seed_workout(&pool, user, "Legs").await;

    for (i, name) in ["Squat", "Leg Press", "Leg Curl"].iter().enumerate() {
        let exercise = ExerciseRepo::create_with_next_order(
            &pool,
            user,
            workout,
            &CreateExercise {
                exercise_name: (*name).to_owned(),
                notes: None,
            },
        )
        .await
        .unwrap()
        .expect("owned workout");
        assert_eq!(exercise.exercise_order, i as i32);
    }

    // Deleting the middle exercise leaves a gap; the next insert continues
    // from the surviving maximum.
    let exercises = ExerciseRepo::list_by_workout(&pool, user, workout).await.unwrap();
    ExerciseRepo::delete(&pool, user, exercises[1].id).await.unwrap();

    let next = ExerciseRepo::create_with_next_order(
        &pool,
        user,
        workout,
        &CreateExercise {
            exercise_name: "Calf Raise".to_owned(),
            notes: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(next.exercise_order, 3);
}

#[sqlx::test]
async fn test_add_exercise_to_foreign_workout_is_refused(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;
    let workout = seed_workout(&pool, owner, "Private").await;

    let result = ExerciseRepo::create_with_next_order(
        &pool,
        other,
        workout,
        &CreateExercise {
            exercise_name: "Bench".to_owned(),
            notes: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn test_set_order_starts_at_one_and_defaults_from_previous(pool: PgPool) {
    let user = seed_user(&pool, "a@example.com").await;
    let workout = seed_workout(&pool, user, "Push").await;
    let exercise = ExerciseRepo::create_with_next_order(
        &pool,
        user,
        workout,
        &CreateExercise {
            exercise_name: "Bench".to_owned(),
            notes: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    // First set with nothing to inherit: weight/reps default to 0, rpe absent.
    let first = SetRepo::create_with_next_order(&pool, user, exercise.id, &CreateSet::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.set_order, 1);
    assert_eq!(first.weight, 0.0);
    assert_eq!(first.reps, 0);
    assert_eq!(first.rpe, None);

    SetRepo::update(
        &pool,
        user,
        first.id,
        &UpdateSet {
            weight: Some(185.0),
            reps: Some(8),
            rpe: Some(7.5),
            ..UpdateSet::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    // Second set inherits the previous set's values.
    let second = SetRepo::create_with_next_order(&pool, user, exercise.id, &CreateSet::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.set_order, 2);
    assert_eq!(second.weight, 185.0);
    assert_eq!(second.reps, 8);
    assert_eq!(second.rpe, Some(7.5));

    // Explicit values win over inheritance.
    let third = SetRepo::create_with_next_order(
        &pool,
        user,
        exercise.id,
        &CreateSet {
            weight: Some(205.0),
            reps: Some(5),
            rpe: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(third.set_order, 3);
    assert_eq!(third.weight, 205.0);
    assert_eq!(third.reps, 5);
    assert_eq!(third.rpe, Some(7.5));
}

#[sqlx::test]
async fn test_delete_workout_cascades(pool: PgPool) {
    let user = seed_user(&pool, "a@example.com").await;
    let workout = seed_workout(&pool, user, "Doomed").await;
    let exercise = ExerciseRepo::create_with_next_order(
        &pool,
        user,
        workout,
        &CreateExercise {
            exercise_name: "Row".to_owned(),
            notes: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    SetRepo::create_with_next_order(&pool, user, exercise.id, &CreateSet::default())
        .await
        .unwrap()
        .unwrap();

    assert!(WorkoutRepo::delete(&pool, user, workout).await.unwrap());

    let (exercises,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exercises")
        .fetch_one(&pool)
        .await
        .unwrap();
    let (sets,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(exercises, 0);
    assert_eq!(sets, 0);
}

#[sqlx::test]
async fn test_update_exercise_is_ownership_scoped(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;
    let workout = seed_workout(&pool, owner, "Pull").await;
    let exercise = ExerciseRepo::create_with_next_order(
        &pool,
        owner,
        workout,
        &CreateExercise {
            exercise_name: "Deadlift".to_owned(),
            notes: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    let result = ExerciseRepo::update(
        &pool,
        other,
        exercise.id,
        &UpdateExercise {
            exercise_name: Some("Hijacked".to_owned()),
            notes: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());

    let unchanged = ExerciseRepo::find_by_id(&pool, owner, exercise.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.exercise_name, "Deadlift");
}

#[sqlx::test]
async fn test_distinct_exercise_names(pool: PgPool) {
    let user = seed_user(&pool, "a@example.com").await;
    let w1 = seed_workout(&pool, user, "Day 1").await;
    let w2 = seed_workout(&pool, user, "Day 2").await;

    for (workout, name) in [(w1, "Bench"), (w1, "Squat"), (w2, "Bench"), (w2, "Curl")] {
        ExerciseRepo::create_with_next_order(
            &pool,
            user,
            workout,
            &CreateExercise {
                exercise_name: name.to_owned(),
                notes: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    }

    let names = ExerciseRepo::distinct_names(&pool, user, 20).await.unwrap();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"Bench".to_owned()));
    assert!(names.contains(&"Squat".to_owned()));
    assert!(names.contains(&"Curl".to_owned()));
}
