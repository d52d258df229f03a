use serde::{Deserialize, Serialize};

/// Five minutes of tracked browsing per day.
pub const DEFAULT_DAILY_LIMIT_MS: u64 = 300_000;

/// Shared daily budget consumed by every tracked destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageState {
    pub global_usage: u64,
    pub daily_limit_ms: u64,
    /// Epoch ms of the next local midnight.
    pub next_reset: i64,
    pub last_updated: i64,
}

impl UsageState {
    pub fn new(daily_limit_ms: u64, next_reset: i64, now: i64) -> Self {
        Self {
            global_usage: 0,
            daily_limit_ms,
            next_reset,
            last_updated: now,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.global_usage >= self.daily_limit_ms
    }

    pub fn remaining_ms(&self) -> u64 {
        self.daily_limit_ms.saturating_sub(self.global_usage)
    }

    pub fn is_reset_due(&self, now: i64) -> bool {
        now >= self.next_reset
    }

    pub fn reset(&mut self, now: i64, next_reset: i64) {
        self.global_usage = 0;
        self.next_reset = next_reset;
        self.last_updated = now;
    }

    pub fn add_usage(&mut self, ms: u64, now: i64) {
        self.global_usage = self.global_usage.saturating_add(ms);
        self.last_updated = now;
    }
}
