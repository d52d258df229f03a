use sitegate_domain::{BlockStatus, DomainError, SiteKey, SiteState, SiteStatePatch};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::ports::{Clock, SiteStateRepository};

/// Owner of the per-destination table.
///
/// `set` is a read-merge-write cycle; the internal lock keeps two cycles on
/// the registry from interleaving and losing a field.
pub struct SiteRegistry {
    repo: Arc<dyn SiteStateRepository>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl SiteRegistry {
    pub fn new(repo: Arc<dyn SiteStateRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn get(&self, key: &SiteKey) -> Result<Option<SiteState>, DomainError> {
        self.repo.get(key).await
    }

    pub async fn list(&self) -> Result<Vec<(SiteKey, SiteState)>, DomainError> {
        self.repo.get_all().await
    }

    /// Merges `patch` into the stored record (or a fresh one), stamps
    /// `last_changed_at` and persists. Returns the stored record.
    pub async fn set(
        &self,
        key: &SiteKey,
        patch: SiteStatePatch,
    ) -> Result<SiteState, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut state = self
            .repo
            .get(key)
            .await?
            .unwrap_or_else(|| SiteState::new(key));
        state.apply(&patch);
        state.last_changed_at = self.clock.now_ms();

        self.repo.save(key, &state).await?;
        debug!(site_key = %key, ?patch, "Site state updated");
        Ok(state)
    }

    /// Re-reads the record under the write lock and lets `derive` decide
    /// the patch from what is stored now. Returns `None` without writing
    /// when the site is gone or `derive` yields no patch, so a decision made
    /// on an older read never overwrites a newer write.
    pub async fn update_with<F>(
        &self,
        key: &SiteKey,
        derive: F,
    ) -> Result<Option<SiteState>, DomainError>
    where
        F: FnOnce(&SiteState) -> Option<SiteStatePatch> + Send,
    {
        let _guard = self.write_lock.lock().await;

        let Some(mut state) = self.repo.get(key).await? else {
            return Ok(None);
        };
        let Some(patch) = derive(&state).filter(|p| !p.is_empty()) else {
            debug!(site_key = %key, "Conditional update skipped");
            return Ok(None);
        };

        state.apply(&patch);
        state.last_changed_at = self.clock.now_ms();
        self.repo.save(key, &state).await?;
        debug!(site_key = %key, ?patch, "Site state updated");
        Ok(Some(state))
    }

    pub async fn remove(&self, key: &SiteKey) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;
        self.repo.delete(key).await
    }

    /// Block status of a tracked site, ignoring overrides and usage.
    /// `None` when the site is untracked.
    pub async fn block_status(&self, key: &SiteKey) -> Result<Option<BlockStatus>, DomainError> {
        let now = self.clock.now_ms();
        Ok(self.repo.get(key).await?.map(|s| s.block_status(now)))
    }
}
