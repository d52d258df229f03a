use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sitegate_domain::DomainError;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::SiteNotTracked(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::InvalidUrl(_)
            | DomainError::InvalidSiteKey(_)
            | DomainError::InvalidDuration(_)
            | DomainError::InvalidDailyLimit(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::Store(_) | DomainError::ConfigError(_) => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
