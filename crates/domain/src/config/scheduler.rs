use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulerConfig {
    /// Arm one-shot expiry wake-ups when blocks and overrides are set.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Interval of the full sweep over tracked sites. `0` disables it.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sweep_interval_secs() -> u64 {
    60
}
