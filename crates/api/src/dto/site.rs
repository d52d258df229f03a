use serde::{Deserialize, Serialize};
use sitegate_application::use_cases::SiteStatus;
use sitegate_domain::{SiteKey, SiteState};

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub site_key: String,
    pub display_name: String,
    pub is_blocked: bool,
    pub blocked_until: i64,
    pub unblock_until: i64,
    pub last_changed_at: i64,
}

impl SiteResponse {
    pub fn from_state(key: &SiteKey, state: &SiteState) -> Self {
        Self {
            site_key: key.to_string(),
            display_name: state.display_name.to_string(),
            is_blocked: state.is_blocked,
            blocked_until: state.blocked_until,
            unblock_until: state.unblock_until,
            last_changed_at: state.last_changed_at,
        }
    }
}

/// What the block page renders: the site's own windows plus the shared
/// budget and its reset time.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SiteStatusResponse {
    pub site_key: String,
    pub tracked: bool,
    pub display_name: String,
    pub is_blocked: bool,
    pub blocked_until: i64,
    pub unblock_until: i64,
    pub global_usage: u64,
    pub daily_limit_ms: u64,
    pub next_reset: i64,
}

impl From<SiteStatus> for SiteStatusResponse {
    fn from(status: SiteStatus) -> Self {
        Self {
            site_key: status.site_key.to_string(),
            tracked: status.tracked,
            display_name: status.state.display_name.to_string(),
            is_blocked: status.state.is_blocked,
            blocked_until: status.state.blocked_until,
            unblock_until: status.state.unblock_until,
            global_usage: status.usage.global_usage,
            daily_limit_ms: status.usage.daily_limit_ms,
            next_reset: status.usage.next_reset,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackSiteRequest {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Omitting `durationMs` blocks indefinitely.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlockSiteRequest {
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryUnblockRequest {
    pub duration_ms: u64,
}
