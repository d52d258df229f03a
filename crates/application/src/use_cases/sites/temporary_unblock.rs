use sitegate_domain::{DomainError, SiteKey, SiteState, SiteStatePatch};
use std::sync::Arc;
use tracing::{info, instrument};

use super::block_site::deadline;
use crate::ports::{Clock, ExpiryScheduler};
use crate::services::SiteRegistry;

/// Opens an override window on a tracked site. The window beats a block
/// but never the daily limit.
pub struct TemporaryUnblockUseCase {
    registry: Arc<SiteRegistry>,
    scheduler: Arc<dyn ExpiryScheduler>,
    clock: Arc<dyn Clock>,
}

impl TemporaryUnblockUseCase {
    pub fn new(
        registry: Arc<SiteRegistry>,
        scheduler: Arc<dyn ExpiryScheduler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            scheduler,
            clock,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        host: &str,
        duration_ms: u64,
    ) -> Result<(SiteKey, SiteState), DomainError> {
        if duration_ms == 0 {
            return Err(DomainError::InvalidDuration(
                "unblock duration must be greater than 0".to_string(),
            ));
        }

        let key = SiteKey::parse(host)?;
        if self.registry.get(&key).await?.is_none() {
            return Err(DomainError::SiteNotTracked(key.to_string()));
        }

        let unblock_until = deadline(self.clock.now_ms(), duration_ms)?;
        let state = self
            .registry
            .set(&key, SiteStatePatch::new().unblock_until(unblock_until))
            .await?;
        self.scheduler.schedule(&key, unblock_until);

        info!(site_key = %key, unblock_until, "Site temporarily unblocked");
        Ok((key, state))
    }
}
