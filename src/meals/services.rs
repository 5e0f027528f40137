use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::{repo, repo_types::Meal};
use crate::error::{AppError, AppResult};
use crate::foods::repo as foods_repo;

/// Log a fresh meal for `user_id` copied from a food template.
///
/// The new row duplicates the template's name, type and macros instead of
/// referencing it, so later template edits never rewrite a user's history.
pub async fn quick_add(
    db: &PgPool,
    user_id: Uuid,
    template_id: Uuid,
    date: Date,
) -> AppResult<Meal> {
    let template = foods_repo::find(db, template_id)
        .await?
        .ok_or(AppError::NotFound("food template"))?;
    let meal = repo::create(db, user_id, &template.to_new_meal(date)).await?;
    Ok(meal)
}
