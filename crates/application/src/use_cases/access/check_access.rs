use sitegate_domain::{
    AccessDecision, AccessReason, BlockStatus, DomainError, LegacySites, SiteKey, SiteStatePatch,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::Clock;
use crate::services::{SiteRegistry, UsageLedger};

/// Decides whether a navigation to a URL may proceed.
///
/// Precedence, highest first: daily limit, legacy block correction,
/// temporary unblock, active block, default allow.
pub struct CheckAccessUseCase {
    registry: Arc<SiteRegistry>,
    ledger: Arc<UsageLedger>,
    legacy: Arc<LegacySites>,
    clock: Arc<dyn Clock>,
}

impl CheckAccessUseCase {
    pub fn new(
        registry: Arc<SiteRegistry>,
        ledger: Arc<UsageLedger>,
        legacy: Arc<LegacySites>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            ledger,
            legacy,
            clock,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<AccessDecision, DomainError> {
        let key = match SiteKey::from_url(url) {
            Ok(key) => key,
            Err(e) => {
                debug!(error = %e, "Unparsable URL, failing open");
                return Ok(AccessDecision::allow());
            }
        };

        let Some(mut state) = self.registry.get(&key).await? else {
            if self.legacy.contains(&key) {
                self.registry.set(&key, SiteStatePatch::new()).await?;
                info!(site_key = %key, "Legacy site registered for usage tracking");
            }
            return Ok(AccessDecision::allow());
        };

        let usage = self.ledger.get_usage_state().await?;
        if usage.is_exhausted() {
            debug!(
                site_key = %key,
                global_usage = usage.global_usage,
                daily_limit_ms = usage.daily_limit_ms,
                "Daily limit reached"
            );
            return Ok(AccessDecision::deny(AccessReason::DailyLimitReached, key));
        }

        if state.is_blocked && self.legacy.contains(&key) {
            state = self.registry.set(&key, SiteStatePatch::clear_block()).await?;
            info!(site_key = %key, "Cleared stale block inherited from legacy policy");
        }

        let now = self.clock.now_ms();
        if state.is_temporarily_unblocked(now) {
            return Ok(AccessDecision::allow_with(AccessReason::TemporarilyUnblocked));
        }

        let status = state.block_status(now);
        if status.denies_access() {
            return Ok(AccessDecision::deny(AccessReason::SiteBlocked, key));
        }
        if status != BlockStatus::Expired {
            return Ok(AccessDecision::allow());
        }

        let cleared = self
            .registry
            .update_with(&key, |current| {
                (current.block_status(now) == BlockStatus::Expired)
                    .then(SiteStatePatch::clear_block)
            })
            .await?;
        if cleared.is_some() {
            info!(site_key = %key, "Block expired and cleared");
            return Ok(AccessDecision::allow_with(AccessReason::BlockExpired));
        }

        // a new block landed between the read above and the clear
        let renewed = self
            .registry
            .block_status(&key)
            .await?
            .is_some_and(|status| status.denies_access());
        if renewed {
            debug!(site_key = %key, "Block renewed before expiry could clear it");
            Ok(AccessDecision::deny(AccessReason::SiteBlocked, key))
        } else {
            Ok(AccessDecision::allow())
        }
    }
}
