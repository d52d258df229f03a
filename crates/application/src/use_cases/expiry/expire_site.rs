use sitegate_domain::{BlockStatus, DomainError, SiteKey, SiteState, SiteStatePatch};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::Clock;
use crate::services::SiteRegistry;

/// Clears block and override windows whose end has passed.
///
/// Re-derives everything from the current record, so a stale wake-up is a
/// no-op. An indefinite block (`blocked_until == 0`) is never cleared here.
pub struct ExpireSiteUseCase {
    registry: Arc<SiteRegistry>,
    clock: Arc<dyn Clock>,
}

impl ExpireSiteUseCase {
    pub fn new(registry: Arc<SiteRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// Returns whether anything was written.
    #[instrument(skip(self))]
    pub async fn execute(&self, key: &SiteKey) -> Result<bool, DomainError> {
        let Some(state) = self.registry.get(key).await? else {
            return Ok(false);
        };

        let now = self.clock.now_ms();
        if expired_windows(&state, now).is_none() {
            debug!(site_key = %key, "Nothing to expire");
            return Ok(false);
        }

        // the record may have changed since the read above
        let updated = self
            .registry
            .update_with(key, |current| expired_windows(current, now))
            .await?;

        if updated.is_none() {
            debug!(site_key = %key, "Windows renewed before expiry, left as is");
            return Ok(false);
        }

        info!(site_key = %key, "Expired windows cleared");
        Ok(true)
    }

    /// Runs [`execute`](Self::execute) over every tracked site and returns
    /// how many records changed.
    pub async fn execute_all(&self) -> Result<usize, DomainError> {
        let mut changed = 0;
        for (key, _) in self.registry.list().await? {
            if self.execute(&key).await? {
                changed += 1;
            }
        }
        Ok(changed)
    }
}

fn expired_windows(state: &SiteState, now: i64) -> Option<SiteStatePatch> {
    let mut patch = SiteStatePatch::new();

    if state.block_status(now) == BlockStatus::Expired {
        patch = patch.is_blocked(false).blocked_until(0);
    }
    if state.override_expired(now) {
        patch = patch.unblock_until(0);
    }

    (!patch.is_empty()).then_some(patch)
}
