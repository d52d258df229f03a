use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

pub const CALLER_URL_HEADER: &str = "X-Caller-Url";

/// URL of the page a request was sent from.
///
/// Taken from `X-Caller-Url`, falling back to `Referer`. Never read from
/// the request body, so a report cannot name a site it was not sent from
/// without also forging the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerOrigin(pub Option<String>);

impl CallerOrigin {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CallerOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let origin = [CALLER_URL_HEADER, header::REFERER.as_str()]
            .into_iter()
            .filter_map(|name| parts.headers.get(name))
            .filter_map(|value| value.to_str().ok())
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(String::from);

        Ok(Self(origin))
    }
}
