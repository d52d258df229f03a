use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::legacy::{LegacySites, DEFAULT_LEGACY_SITES};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LegacyConfig {
    /// Hosts that were hard-blocked by earlier releases. They are brought
    /// under usage tracking on first visit and any stale block is cleared.
    #[serde(default = "default_legacy_sites")]
    pub sites: Vec<String>,
}

impl LegacyConfig {
    pub fn to_legacy_sites(&self) -> Result<LegacySites, DomainError> {
        LegacySites::from_hosts(&self.sites)
    }
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            sites: default_legacy_sites(),
        }
    }
}

fn default_legacy_sites() -> Vec<String> {
    DEFAULT_LEGACY_SITES.iter().map(|s| s.to_string()).collect()
}
