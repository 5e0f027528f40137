use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, instrument};

use super::{dto::RecommendationsResponse, engine::recommend};
use crate::{
    aggregation::{
        range::{today, DateRange},
        services::{summarize, WindowAverages},
    },
    auth::services::AuthUser,
    error::AppResult,
    state::AppState,
};

pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/recommendations", get(recommendations))
}

#[instrument(skip(state))]
pub async fn recommendations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<RecommendationsResponse>> {
    let store = state.store.as_ref();
    let window = DateRange::trailing(today(), state.config.trailing_window_days);

    let profile = store.find_profile(user_id).await?;
    let summary = summarize(store, user_id, window, false).await?;
    let averages = WindowAverages::from(&summary);

    let report = recommend(profile.as_ref(), &averages);
    debug!(%user_id, count = report.recommendations.len(), "recommendations built");

    Ok(Json(RecommendationsResponse {
        report,
        window,
        fitness_goal: profile.map(|p| p.fitness_goal),
    }))
}
