use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::{ProfileResponse, UpdateProfileRequest},
    repo,
};
use crate::{auth::services::AuthUser, error::AppResult, state::AppState};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    let profile = repo::get_or_create(&state.db, user_id).await?;
    Ok(Json(profile.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    payload.validate()?;
    let profile = repo::upsert(
        &state.db,
        user_id,
        payload.age,
        payload.weight_kg,
        payload.height_cm,
        payload.fitness_goal,
    )
    .await?;
    info!(%user_id, goal = ?profile.fitness_goal, "profile updated");
    Ok(Json(profile.into()))
}
