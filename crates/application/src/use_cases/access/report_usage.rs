use sitegate_domain::{DomainError, SiteKey, UsageVerdict};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::services::{SiteRegistry, UsageLedger};

/// Accrues browsing time against the shared budget.
///
/// Only tracked destinations consume budget; time spent anywhere else is
/// ignored. The reported duration is trusted as-is.
pub struct ReportUsageUseCase {
    registry: Arc<SiteRegistry>,
    ledger: Arc<UsageLedger>,
}

impl ReportUsageUseCase {
    pub fn new(registry: Arc<SiteRegistry>, ledger: Arc<UsageLedger>) -> Self {
        Self { registry, ledger }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        ms: u64,
        caller_origin: Option<&str>,
    ) -> Result<UsageVerdict, DomainError> {
        let Some(origin) = caller_origin else {
            return Ok(UsageVerdict::allow());
        };

        let key = match SiteKey::from_url(origin) {
            Ok(key) => key,
            Err(e) => {
                debug!(error = %e, "Unattributable usage report");
                return Ok(UsageVerdict::allow());
            }
        };

        if self.registry.get(&key).await?.is_none() {
            return Ok(UsageVerdict::allow());
        }

        let usage = self.ledger.increment_usage(ms).await?;
        if usage.is_exhausted() {
            debug!(site_key = %key, global_usage = usage.global_usage, "Budget exhausted");
            Ok(UsageVerdict::deny())
        } else {
            Ok(UsageVerdict::allow())
        }
    }
}
