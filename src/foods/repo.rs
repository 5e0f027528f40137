use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::FoodTemplate;

/// Every template, ordered by meal type then name.
pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<FoodTemplate>> {
    let rows = sqlx::query_as::<_, FoodTemplate>(
        r#"
        SELECT id, food_name, meal_type, calories, protein_g, carbs_g, fats_g
          FROM food_templates
         ORDER BY meal_type, food_name
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn find(db: &PgPool, template_id: Uuid) -> anyhow::Result<Option<FoodTemplate>> {
    let row = sqlx::query_as::<_, FoodTemplate>(
        r#"
        SELECT id, food_name, meal_type, calories, protein_g, carbs_g, fats_g
          FROM food_templates
         WHERE id = $1
        "#,
    )
    .bind(template_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}
