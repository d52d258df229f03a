use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use tracing::debug;

use crate::{
    dto::{
        BlockSiteRequest, SiteResponse, SiteStatusResponse, TemporaryUnblockRequest,
        TrackSiteRequest,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sites", get(list_sites))
        .route("/sites/{key}", put(track_site).delete(untrack_site))
        .route("/sites/{key}/status", get(get_site_status))
        .route("/sites/{key}/block", post(block_site))
        .route("/sites/{key}/unblock", post(temporary_unblock))
}

async fn list_sites(State(state): State<AppState>) -> Result<Json<Vec<SiteResponse>>, ApiError> {
    let sites = state.sites.list.execute().await?;
    let responses: Vec<SiteResponse> = sites
        .iter()
        .map(|(key, site)| SiteResponse::from_state(key, site))
        .collect();
    debug!(count = responses.len(), "Sites retrieved successfully");
    Ok(Json(responses))
}

async fn track_site(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<TrackSiteRequest>,
) -> Result<(StatusCode, Json<SiteResponse>), ApiError> {
    let (site_key, site) = state.sites.track.execute(&key, req.display_name).await?;
    Ok((
        StatusCode::CREATED,
        Json(SiteResponse::from_state(&site_key, &site)),
    ))
}

async fn untrack_site(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.sites.untrack.execute(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_site_status(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<SiteStatusResponse>, ApiError> {
    let status = state.sites.get_status.execute(&key).await?;
    Ok(Json(status.into()))
}

async fn block_site(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<BlockSiteRequest>,
) -> Result<Json<SiteResponse>, ApiError> {
    let (site_key, site) = state.sites.block.execute(&key, req.duration_ms).await?;
    Ok(Json(SiteResponse::from_state(&site_key, &site)))
}

async fn temporary_unblock(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<TemporaryUnblockRequest>,
) -> Result<Json<SiteResponse>, ApiError> {
    let (site_key, site) = state
        .sites
        .temporary_unblock
        .execute(&key, req.duration_ms)
        .await?;
    Ok(Json(SiteResponse::from_state(&site_key, &site)))
}
