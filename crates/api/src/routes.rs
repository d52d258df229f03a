use crate::handlers;
use crate::middleware::require_api_key;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::access::routes())
        .merge(handlers::usage::routes())
        .merge(handlers::sites::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state)
}
