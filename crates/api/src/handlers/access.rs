use axum::{extract::State, response::Json, routing::post, Router};
use sitegate_domain::{AccessDecision, UsageVerdict};
use tracing::{debug, error, instrument};

use crate::{
    dto::{CheckAccessRequest, ReportUsageRequest},
    errors::ApiError,
    state::AppState,
    utils::CallerOrigin,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/access/check", post(check_access))
        .route("/usage/report", post(report_usage))
}

/// Never fails: a store fault lets the navigation through rather than
/// stranding the user on an error.
#[instrument(skip(state, req), name = "api_check_access")]
async fn check_access(
    State(state): State<AppState>,
    Json(req): Json<CheckAccessRequest>,
) -> Json<AccessDecision> {
    match state.access.check_access.execute(&req.url).await {
        Ok(decision) => {
            debug!(allowed = decision.allowed, reason = ?decision.reason, "Access decided");
            Json(decision)
        }
        Err(e) => {
            error!(error = %e, "Access check failed, allowing");
            Json(AccessDecision::allow())
        }
    }
}

#[instrument(skip(state, req), name = "api_report_usage")]
async fn report_usage(
    State(state): State<AppState>,
    origin: CallerOrigin,
    Json(req): Json<ReportUsageRequest>,
) -> Result<Json<UsageVerdict>, ApiError> {
    let verdict = state
        .access
        .report_usage
        .execute(req.ms, origin.as_deref())
        .await?;
    Ok(Json(verdict))
}
