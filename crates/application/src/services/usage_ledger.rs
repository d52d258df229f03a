use sitegate_domain::{DomainError, UsageState};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::ports::{Clock, UsageStateRepository};

/// Single owner of the shared daily usage record.
///
/// Every accessor applies the lazy midnight reset first, so no caller can
/// observe yesterday's usage. Read-modify-write cycles are serialized by an
/// internal lock.
pub struct UsageLedger {
    repo: Arc<dyn UsageStateRepository>,
    clock: Arc<dyn Clock>,
    initial_limit_ms: u64,
    lock: Mutex<()>,
}

impl UsageLedger {
    pub fn new(
        repo: Arc<dyn UsageStateRepository>,
        clock: Arc<dyn Clock>,
        initial_limit_ms: u64,
    ) -> Self {
        Self {
            repo,
            clock,
            initial_limit_ms,
            lock: Mutex::new(()),
        }
    }

    /// Returns the usage record after applying any due reset.
    ///
    /// Side effects: creates the record with the initial limit on first
    /// use, and when `now >= next_reset` zeroes `global_usage`, advances
    /// `next_reset` to the next local midnight and persists the result.
    pub async fn get_usage_state(&self) -> Result<UsageState, DomainError> {
        let _guard = self.lock.lock().await;
        self.refreshed(self.clock.now_ms()).await
    }

    /// Adds `ms` of tracked usage after applying any due reset.
    pub async fn increment_usage(&self, ms: u64) -> Result<UsageState, DomainError> {
        let _guard = self.lock.lock().await;
        let now = self.clock.now_ms();

        let mut state = self.refreshed(now).await?;
        state.add_usage(ms, now);
        self.repo.save(&state).await?;

        debug!(
            added_ms = ms,
            global_usage = state.global_usage,
            daily_limit_ms = state.daily_limit_ms,
            "Usage recorded"
        );
        Ok(state)
    }

    pub async fn set_daily_limit(&self, ms: u64) -> Result<UsageState, DomainError> {
        if ms == 0 {
            return Err(DomainError::InvalidDailyLimit(
                "daily limit must be greater than 0".to_string(),
            ));
        }

        let _guard = self.lock.lock().await;
        let now = self.clock.now_ms();

        let mut state = self.refreshed(now).await?;
        state.daily_limit_ms = ms;
        state.last_updated = now;
        self.repo.save(&state).await?;

        info!(daily_limit_ms = ms, "Daily limit updated");
        Ok(state)
    }

    async fn refreshed(&self, now: i64) -> Result<UsageState, DomainError> {
        let Some(mut state) = self.repo.load().await? else {
            let state = UsageState::new(
                self.initial_limit_ms,
                self.clock.next_midnight_after(now),
                now,
            );
            self.repo.save(&state).await?;
            info!(
                daily_limit_ms = state.daily_limit_ms,
                next_reset = state.next_reset,
                "Usage record initialized"
            );
            return Ok(state);
        };

        if state.is_reset_due(now) {
            let previous_usage = state.global_usage;
            state.reset(now, self.clock.next_midnight_after(now));
            self.repo.save(&state).await?;
            info!(
                previous_usage,
                next_reset = state.next_reset,
                "Daily usage reset"
            );
        }

        Ok(state)
    }
}
