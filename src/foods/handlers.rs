use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{dto::FoodLibrary, repo};
use crate::{
    aggregation::range::today,
    auth::services::AuthUser,
    error::AppResult,
    meals::{dto::MealResponse, services::quick_add},
    state::AppState,
};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods))
        .route("/foods/:id/quick-add", post(quick_add_food))
}

#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> AppResult<Json<FoodLibrary>> {
    let templates = repo::list_all(&state.db).await?;
    Ok(Json(templates.into_iter().collect()))
}

#[instrument(skip(state))]
pub async fn quick_add_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<MealResponse>)> {
    let meal = quick_add(&state.db, user_id, id, today()).await?;
    info!(%user_id, template_id = %id, meal_id = %meal.id, "template added to meals");
    Ok((StatusCode::CREATED, Json(meal.into())))
}
