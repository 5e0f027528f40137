use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::repo_types::{DailyMealRow, Meal, MealTotals, NewMeal};

const MEAL_COLUMNS: &str = "id, meal_type, food_name, calories, protein_g, carbs_g, \
     fats_g, quantity, notes, date, created_at";

pub async fn list_by_user(
    db: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(&format!(
        r#"
        SELECT {MEAL_COLUMNS}
        FROM meals
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

pub async fn list_on_date(db: &PgPool, user_id: Uuid, date: Date) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(&format!(
        r#"
        SELECT {MEAL_COLUMNS}
        FROM meals
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

pub async fn create(db: &PgPool, user_id: Uuid, new: &NewMeal) -> anyhow::Result<Meal> {
    let row = sqlx::query_as::<_, Meal>(&format!(
        r#"
        INSERT INTO meals (user_id, meal_type, food_name, calories, protein_g, carbs_g,
                           fats_g, quantity, notes, date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {MEAL_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(new.meal_type)
    .bind(&new.food_name)
    .bind(new.calories)
    .bind(new.protein_g)
    .bind(new.carbs_g)
    .bind(new.fats_g)
    .bind(new.quantity)
    .bind(&new.notes)
    .bind(new.date)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn delete(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM meals WHERE id = $1 AND user_id = $2")
        .bind(meal_id)
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
) -> anyhow::Result<MealTotals> {
    let row = sqlx::query_as::<_, MealTotals>(
        r#"
        SELECT COALESCE(SUM(calories), 0)::BIGINT AS calories,
               COALESCE(SUM(protein_g), 0)::DOUBLE PRECISION AS protein_g,
               COALESCE(SUM(carbs_g), 0)::DOUBLE PRECISION AS carbs_g,
               COALESCE(SUM(fats_g), 0)::DOUBLE PRECISION AS fats_g,
               COUNT(*) AS count
          FROM meals
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
) -> anyhow::Result<Vec<DailyMealRow>> {
    let rows = sqlx::query_as::<_, DailyMealRow>(
        r#"
        SELECT date,
               COALESCE(SUM(calories), 0)::BIGINT AS calories,
               COALESCE(SUM(protein_g), 0)::DOUBLE PRECISION AS protein_g,
               COALESCE(SUM(carbs_g), 0)::DOUBLE PRECISION AS carbs_g,
               COALESCE(SUM(fats_g), 0)::DOUBLE PRECISION AS fats_g,
               COUNT(*) AS count
          FROM meals
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
