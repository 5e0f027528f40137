use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::repo_types::{DailyWorkoutRow, NewWorkout, Workout, WorkoutTotals};

const WORKOUT_COLUMNS: &str = "id, exercise_name, sets, reps, weight_used_kg, \
     calories_burned, duration_minutes, notes, date, created_at";

pub async fn list_by_user(
    db: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<Workout>> {
    let rows = sqlx::query_as::<_, Workout>(&format!(
        r#"
        SELECT {WORKOUT_COLUMNS}
        FROM workouts
        WHERE user_id = $1
        ORDER BY date DESC, created_at DESC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// All of the user's workouts logged for one calendar day.
pub async fn list_on_date(db: &PgPool, user_id: Uuid, date: Date) -> anyhow::Result<Vec<Workout>> {
    let rows = sqlx::query_as::<_, Workout>(&format!(
        r#"
        SELECT {WORKOUT_COLUMNS}
        FROM workouts
        WHERE user_id = $1 AND date = $2
        ORDER BY created_at DESC
        "#
    ))
    .bind(user_id)
    .bind(date)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create(db: &PgPool, user_id: Uuid, new: &NewWorkout) -> anyhow::Result<Workout> {
    let row = sqlx::query_as::<_, Workout>(&format!(
        r#"
        INSERT INTO workouts (user_id, exercise_name, sets, reps, weight_used_kg,
                              calories_burned, duration_minutes, notes, date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {WORKOUT_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(&new.exercise_name)
    .bind(new.sets)
    .bind(new.reps)
    .bind(new.weight_used_kg)
    .bind(new.calories_burned)
    .bind(new.duration_minutes)
    .bind(&new.notes)
    .bind(new.date)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Delete a workout owned by `user_id`. Returns false when nothing matched.
pub async fn delete(db: &PgPool, user_id: Uuid, workout_id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
        .bind(workout_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}

pub async fn totals(
    db: &PgPool,
    user_id: Uuid,
    start: Date,
    end: Date,
) -> anyhow::Result<WorkoutTotals> {
    let row = sqlx::query_as::<_, WorkoutTotals>(
        r#"
        SELECT COALESCE(SUM(calories_burned), 0)::BIGINT AS calories_burned,
               COUNT(*) AS count
          FROM workouts
         WHERE user_id = $1 AND date BETWEEN $2 AND $3
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn daily(
    db: &PgPool,
    user_id: Uuid,
    start: Date,
    end: Date,
) -> anyhow::Result<Vec<DailyWorkoutRow>> {
    let rows = sqlx::query_as::<_, DailyWorkoutRow>(
        r#"
        SELECT date,
               COALESCE(SUM(calories_burned), 0)::BIGINT AS calories_burned,
               COUNT(*) AS count
          FROM workouts
         WHERE user_id = $1 AND date BETWEEN $2 AND $3
         GROUP BY date
         ORDER BY date
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
