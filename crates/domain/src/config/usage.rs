use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::usage_state::DEFAULT_DAILY_LIMIT_MS;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsageConfig {
    /// Budget used when the usage record is first created. The stored
    /// limit wins afterwards.
    #[serde(default = "default_daily_limit_ms")]
    pub daily_limit_ms: u64,

    /// IANA zone used to find the daily reset midnight. Falls back to the
    /// system local zone.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl UsageConfig {
    pub fn time_zone(&self) -> Result<Option<Tz>, ConfigError> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| ConfigError::Validation(format!("Unknown time zone '{}'", name)))
            })
            .transpose()
    }
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            daily_limit_ms: default_daily_limit_ms(),
            timezone: None,
        }
    }
}

fn default_daily_limit_ms() -> u64 {
    DEFAULT_DAILY_LIMIT_MS
}
