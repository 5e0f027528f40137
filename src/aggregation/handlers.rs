use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{DashboardResponse, ProgressQuery, ProgressResponse, SummaryQuery, SummaryResponse},
    range::{today, DateRange},
    services::summarize,
};
use crate::{
    auth::services::AuthUser,
    error::{ensure, AppResult},
    meals::repo as meals_repo,
    state::AppState,
    workouts::repo as workouts_repo,
};

pub fn aggregation_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/progress", get(progress))
        .route("/summary", get(summary))
}

/// Today's totals and entries plus trailing-window counts.
#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<DashboardResponse>> {
    let day = today();
    let store = state.store.as_ref();

    let today_summary = summarize(store, user_id, DateRange::single(day), false).await?;
    let window = DateRange::trailing(day, state.config.trailing_window_days);
    let week = summarize(store, user_id, window, false).await?;

    let workouts = workouts_repo::list_on_date(&state.db, user_id, day).await?;
    let meals = meals_repo::list_on_date(&state.db, user_id, day).await?;

    Ok(Json(DashboardResponse {
        date: day,
        today: (&today_summary).into(),
        workouts: workouts.into_iter().map(Into::into).collect(),
        meals: meals.into_iter().map(Into::into).collect(),
        week_workouts: week.workout_count,
        week_meals: week.meal_count,
    }))
}

#[instrument(skip(state))]
pub async fn progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<ProgressQuery>,
) -> AppResult<Json<ProgressResponse>> {
    let days = q.days.unwrap_or(state.config.trailing_window_days);
    let range = DateRange::trailing(today(), days);
    let s = summarize(state.store.as_ref(), user_id, range, true).await?;
    Ok(Json((&s).into()))
}

#[instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<SummaryQuery>,
) -> AppResult<Json<SummaryResponse>> {
    let range = DateRange::new(q.start, q.end);
    ensure(!range.exceeds_max_span(), "date range must not exceed 3661 days")?;
    let s = summarize(state.store.as_ref(), user_id, range, q.series).await?;
    Ok(Json((&s).into()))
}
