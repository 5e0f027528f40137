use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::{CreateWorkoutRequest, WorkoutResponse},
    repo,
};
use crate::{
    aggregation::range::today,
    auth::services::AuthUser,
    error::{AppError, AppResult},
    pagination::Pagination,
    state::AppState,
};

pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list_workouts).post(create_workout))
        .route("/workouts/:id", delete(delete_workout))
}

#[instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> AppResult<Json<Vec<WorkoutResponse>>> {
    let (limit, offset) = p.bounds();
    let rows = repo::list_by_user(&state.db, user_id, limit, offset).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_workout(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateWorkoutRequest>,
) -> AppResult<(StatusCode, Json<WorkoutResponse>)> {
    let new = payload.into_new(today())?;
    let workout = repo::create(&state.db, user_id, &new).await?;
    info!(%user_id, workout_id = %workout.id, date = %workout.date, "workout logged");
    Ok((StatusCode::CREATED, Json(workout.into())))
}

#[instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !repo::delete(&state.db, user_id, id).await? {
        warn!(%user_id, workout_id = %id, "delete of unknown workout");
        return Err(AppError::NotFound("workout"));
    }
    info!(%user_id, workout_id = %id, "workout deleted");
    Ok(StatusCode::NO_CONTENT)
}
