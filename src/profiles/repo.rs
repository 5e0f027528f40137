use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{FitnessGoal, Profile};

const PROFILE_COLUMNS: &str = "user_id, age, weight_kg, height_cm, fitness_goal, created_at";

/// Fetch the user's profile, if one was ever created.
pub async fn find(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
    let profile = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(profile)
}

/// Create the default profile unless it already exists.
pub async fn ensure(db: &PgPool, user_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO profiles (user_id)
        VALUES ($1)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn get_or_create(db: &PgPool, user_id: Uuid) -> anyhow::Result<Profile> {
    ensure(db, user_id).await?;
    let profile = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_one(db)
    .await?;
    Ok(profile)
}

/// Replace the editable fields, creating the profile on first write.
pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    age: Option<i32>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    fitness_goal: FitnessGoal,
) -> anyhow::Result<Profile> {
    let profile = sqlx::query_as::<_, Profile>(&format!(
        r#"
        INSERT INTO profiles (user_id, age, weight_kg, height_cm, fitness_goal)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id) DO UPDATE
           SET age = EXCLUDED.age,
               weight_kg = EXCLUDED.weight_kg,
               height_cm = EXCLUDED.height_cm,
               fitness_goal = EXCLUDED.fitness_goal
        RETURNING {PROFILE_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(age)
    .bind(weight_kg)
    .bind(height_cm)
    .bind(fitness_goal)
    .fetch_one(db)
    .await?;
    Ok(profile)
}
