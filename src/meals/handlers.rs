use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::{CreateMealRequest, MealResponse},
    repo,
};
use crate::{
    aggregation::range::today,
    auth::services::AuthUser,
    error::{AppError, AppResult},
    pagination::Pagination,
    state::AppState,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/:id", delete(delete_meal))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> AppResult<Json<Vec<MealResponse>>> {
    let (limit, offset) = p.bounds();
    let meals = repo::list_by_user(&state.db, user_id, limit, offset).await?;
    Ok(Json(meals.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateMealRequest>,
) -> AppResult<(StatusCode, Json<MealResponse>)> {
    let new = payload.into_new(today())?;
    let meal = repo::create(&state.db, user_id, &new).await?;
    info!(%user_id, meal_id = %meal.id, meal_type = ?meal.meal_type, "meal logged");
    Ok((StatusCode::CREATED, Json(meal.into())))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !repo::delete(&state.db, user_id, id).await? {
        warn!(%user_id, meal_id = %id, "delete of unknown meal");
        return Err(AppError::NotFound("meal"));
    }
    info!(%user_id, meal_id = %id, "meal deleted");
    Ok(StatusCode::NO_CONTENT)
}
