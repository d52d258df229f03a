use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct CheckAccessRequest {
    pub url: String,
}

/// Milliseconds spent on the calling page. The page itself is identified by
/// request headers, see [`CallerOrigin`](crate::utils::CallerOrigin).
#[derive(Deserialize, Debug)]
pub struct ReportUsageRequest {
    pub ms: u64,
}
