use serde::{Deserialize, Serialize};
use sitegate_domain::UsageState;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummaryResponse {
    pub global_usage: u64,
    pub daily_limit_ms: u64,
    pub remaining_ms: u64,
    pub next_reset: i64,
    pub last_updated: i64,
}

impl From<UsageState> for UsageSummaryResponse {
    fn from(state: UsageState) -> Self {
        Self {
            remaining_ms: state.remaining_ms(),
            global_usage: state.global_usage,
            daily_limit_ms: state.daily_limit_ms,
            next_reset: state.next_reset,
            last_updated: state.last_updated,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SetDailyLimitRequest {
    pub daily_limit_ms: u64,
}
