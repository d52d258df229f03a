use sitegate_domain::{DomainError, SiteKey, SiteState, UsageState};
use std::sync::Arc;

use crate::services::{SiteRegistry, UsageLedger};

/// Everything the block page needs to render its countdowns.
#[derive(Debug, Clone)]
pub struct SiteStatus {
    pub site_key: SiteKey,
    pub tracked: bool,
    pub state: SiteState,
    pub usage: UsageState,
}

pub struct GetSiteStatusUseCase {
    registry: Arc<SiteRegistry>,
    ledger: Arc<UsageLedger>,
}

impl GetSiteStatusUseCase {
    pub fn new(registry: Arc<SiteRegistry>, ledger: Arc<UsageLedger>) -> Self {
        Self { registry, ledger }
    }

    /// Unknown sites report a default, unblocked state so the page can
    /// still show the reset time.
    pub async fn execute(&self, host: &str) -> Result<SiteStatus, DomainError> {
        let site_key = SiteKey::parse(host)?;
        let stored = self.registry.get(&site_key).await?;
        let usage = self.ledger.get_usage_state().await?;

        Ok(SiteStatus {
            tracked: stored.is_some(),
            state: stored.unwrap_or_else(|| SiteState::new(&site_key)),
            site_key,
            usage,
        })
    }
}
