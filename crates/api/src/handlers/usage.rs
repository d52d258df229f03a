use axum::{
    extract::State,
    response::Json,
    routing::{get, put},
    Router,
};

use crate::{
    dto::{SetDailyLimitRequest, UsageSummaryResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/usage", get(get_usage_summary))
        .route("/usage/limit", put(set_daily_limit))
}

async fn get_usage_summary(
    State(state): State<AppState>,
) -> Result<Json<UsageSummaryResponse>, ApiError> {
    let usage = state.usage.get_summary.execute().await?;
    Ok(Json(usage.into()))
}

async fn set_daily_limit(
    State(state): State<AppState>,
    Json(req): Json<SetDailyLimitRequest>,
) -> Result<Json<UsageSummaryResponse>, ApiError> {
    let usage = state
        .usage
        .set_daily_limit
        .execute(req.daily_limit_ms)
        .await?;
    Ok(Json(usage.into()))
}
