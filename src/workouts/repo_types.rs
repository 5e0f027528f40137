use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Workout record as read back for its owner; queries filter on `user_id`.
#[derive(Debug, Clone, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_used_kg: Option<f64>,
    pub calories_burned: i32,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    pub date: Date,
    pub created_at: OffsetDateTime,
}

/// Validated input for a new workout row.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_used_kg: Option<f64>,
    pub calories_burned: i32,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    pub date: Date,
}

/// Sum and count of a user's workouts over a date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow)]
pub struct WorkoutTotals {
    pub calories_burned: i64,
    pub count: i64,
}

/// One `GROUP BY date` row.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct DailyWorkoutRow {
    pub date: Date,
    pub calories_burned: i64,
    pub count: i64,
}
