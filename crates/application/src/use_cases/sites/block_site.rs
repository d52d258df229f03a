use sitegate_domain::{DomainError, SiteKey, SiteState, SiteStatePatch};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{Clock, ExpiryScheduler};
use crate::services::SiteRegistry;

pub struct BlockSiteUseCase {
    registry: Arc<SiteRegistry>,
    scheduler: Arc<dyn ExpiryScheduler>,
    clock: Arc<dyn Clock>,
}

impl BlockSiteUseCase {
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

    /// Blocks a tracked site for `duration_ms`, or indefinitely when no
    /// duration is given.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        host: &str,
        duration_ms: Option<u64>,
    ) -> Result<(SiteKey, SiteState), DomainError> {
        let key = SiteKey::parse(host)?;
        if self.registry.get(&key).await?.is_none() {
            return Err(DomainError::SiteNotTracked(key.to_string()));
        }

        let blocked_until = match duration_ms {
            Some(0) => {
                return Err(DomainError::InvalidDuration(
                    "block duration must be greater than 0".to_string(),
                ))
            }
            Some(ms) => deadline(self.clock.now_ms(), ms)?,
            None => 0,
        };

        let state = self
            .registry
            .set(
                &key,
                SiteStatePatch::new()
                    .is_blocked(true)
                    .blocked_until(blocked_until),
            )
            .await?;

        if blocked_until != 0 {
            self.scheduler.schedule(&key, blocked_until);
        }

        info!(site_key = %key, blocked_until, "Site blocked");
        Ok((key, state))
    }
}

pub(crate) fn deadline(now: i64, duration_ms: u64) -> Result<i64, DomainError> {
    i64::try_from(duration_ms)
        .ok()
        .and_then(|ms| now.checked_add(ms))
        .ok_or_else(|| DomainError::InvalidDuration(format!("{} ms is out of range", duration_ms)))
}
