#![allow(dead_code)]

use async_trait::async_trait;
use sitegate_application::ports::{
    Clock, ExpiryScheduler, SiteStateRepository, UsageStateRepository,
};
use sitegate_application::services::{SiteRegistry, UsageLedger};
use sitegate_application::use_cases::{
    BlockSiteUseCase, CheckAccessUseCase, ExpireSiteUseCase, GetSiteStatusUseCase,
    GetUsageSummaryUseCase, ListSitesUseCase, ReportUsageUseCase, SetDailyLimitUseCase,
    TemporaryUnblockUseCase, TrackSiteUseCase, UntrackSiteUseCase,
};
use sitegate_domain::{DomainError, LegacySites, SiteKey, SiteState, UsageState};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub const DAY_MS: i64 = 86_400_000;
/// 2026-10-16T12:00:00Z
pub const NOW: i64 = 1_792_152_000_000;
pub const LIMIT_MS: u64 = 300_000;

pub fn key(host: &str) -> SiteKey {
    SiteKey::parse(host).unwrap()
}

pub fn site(host: &str) -> SiteState {
    SiteState::new(&key(host))
}

pub fn blocked_site(host: &str, blocked_until: i64) -> SiteState {
    let mut state = site(host);
    state.is_blocked = true;
    state.blocked_until = blocked_until;
    state
}

pub struct MockSiteStateRepository {
    sites: Arc<RwLock<HashMap<SiteKey, SiteState>>>,
    writes: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
    write_after_next_read: Mutex<Option<(SiteKey, SiteState)>>,
}

impl MockSiteStateRepository {
    pub fn new() -> Self {
        Self {
            sites: Arc::new(RwLock::new(HashMap::new())),
            writes: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
            write_after_next_read: Mutex::new(None),
        }
    }

    /// Stores `state` right after the next `get` has returned, as if a
    /// concurrent writer landed between a caller's read and its update.
    pub fn write_after_next_read(&self, host: &str, state: SiteState) {
        *self.write_after_next_read.lock().unwrap() = Some((key(host), state));
    }

    pub async fn insert(&self, host: &str, state: SiteState) {
        self.sites.write().await.insert(key(host), state);
    }

    pub async fn state_of(&self, host: &str) -> Option<SiteState> {
        self.sites.read().await.get(&key(host)).cloned()
    }

    pub async fn count(&self) -> usize {
        self.sites.read().await.len()
    }

    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::Store("site store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SiteStateRepository for MockSiteStateRepository {
    async fn get(&self, key: &SiteKey) -> Result<Option<SiteState>, DomainError> {
        self.check_failure()?;
        let current = self.sites.read().await.get(key).cloned();

        let pending = self.write_after_next_read.lock().unwrap().take();
        if let Some((pending_key, state)) = pending {
            self.writes.fetch_add(1, Ordering::Relaxed);
            self.sites.write().await.insert(pending_key, state);
        }

        Ok(current)
    }

    async fn get_all(&self) -> Result<Vec<(SiteKey, SiteState)>, DomainError> {
        self.check_failure()?;
        Ok(self
            .sites
            .read()
            .await
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    async fn save(&self, key: &SiteKey, state: &SiteState) -> Result<(), DomainError> {
        self.check_failure()?;
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.sites.write().await.insert(key.clone(), state.clone());
        Ok(())
    }

    async fn delete(&self, key: &SiteKey) -> Result<bool, DomainError> {
        self.check_failure()?;
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(self.sites.write().await.remove(key).is_some())
    }
}

pub struct MockUsageStateRepository {
    state: Arc<RwLock<Option<UsageState>>>,
    writes: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl MockUsageStateRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(None)),
            writes: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn put(&self, state: UsageState) {
        *self.state.write().await = Some(state);
    }

    pub async fn stored(&self) -> Option<UsageState> {
        self.state.read().await.clone()
    }

    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl UsageStateRepository for MockUsageStateRepository {
    async fn load(&self) -> Result<Option<UsageState>, DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::Store("usage store unavailable".to_string()));
        }
        Ok(self.state.read().await.clone())
    }

    async fn save(&self, state: &UsageState) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::Store("usage store unavailable".to_string()));
        }
        self.writes.fetch_add(1, Ordering::Relaxed);
        *self.state.write().await = Some(state.clone());
        Ok(())
    }
}

/// Manually driven clock; midnights are UTC.
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn at(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::Relaxed);
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::Relaxed)
    }

    fn next_midnight_after(&self, now_ms: i64) -> i64 {
        (now_ms.div_euclid(DAY_MS) + 1) * DAY_MS
    }
}

pub struct RecordingExpiryScheduler {
    scheduled: Mutex<Vec<(SiteKey, i64)>>,
}

impl RecordingExpiryScheduler {
    pub fn new() -> Self {
        Self {
            scheduled: Mutex::new(Vec::new()),
        }
    }

    pub fn scheduled(&self) -> Vec<(SiteKey, i64)> {
        self.scheduled.lock().unwrap().clone()
    }
}

impl ExpiryScheduler for RecordingExpiryScheduler {
    fn schedule(&self, key: &SiteKey, at_ms: i64) {
        self.scheduled.lock().unwrap().push((key.clone(), at_ms));
    }
}

/// Fully wired application layer over in-memory ports.
pub struct Harness {
    pub sites: Arc<MockSiteStateRepository>,
    pub usage: Arc<MockUsageStateRepository>,
    pub clock: Arc<FixedClock>,
    pub scheduler: Arc<RecordingExpiryScheduler>,
    pub registry: Arc<SiteRegistry>,
    pub ledger: Arc<UsageLedger>,
    pub legacy: Arc<LegacySites>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_legacy(LegacySites::default())
    }

    pub fn with_legacy(legacy: LegacySites) -> Self {
        let sites = Arc::new(MockSiteStateRepository::new());
        let usage = Arc::new(MockUsageStateRepository::new());
        let clock = Arc::new(FixedClock::at(NOW));
        let scheduler = Arc::new(RecordingExpiryScheduler::new());
        let registry = Arc::new(SiteRegistry::new(sites.clone(), clock.clone()));
        let ledger = Arc::new(UsageLedger::new(usage.clone(), clock.clone(), LIMIT_MS));

        Self {
            sites,
            usage,
            clock,
            scheduler,
            registry,
            ledger,
            legacy: Arc::new(legacy),
        }
    }

    /// Seeds the usage record with `global_usage` consumed today.
    pub async fn with_usage(&self, global_usage: u64) {
        self.usage
            .put(UsageState {
                global_usage,
                daily_limit_ms: LIMIT_MS,
                next_reset: self.clock.next_midnight_after(NOW),
                last_updated: NOW,
            })
            .await;
    }

    pub fn check_access(&self) -> CheckAccessUseCase {
        CheckAccessUseCase::new(
            self.registry.clone(),
            self.ledger.clone(),
            self.legacy.clone(),
            self.clock.clone(),
        )
    }

    pub fn report_usage(&self) -> ReportUsageUseCase {
        ReportUsageUseCase::new(self.registry.clone(), self.ledger.clone())
    }

    pub fn expire(&self) -> ExpireSiteUseCase {
        ExpireSiteUseCase::new(self.registry.clone(), self.clock.clone())
    }

    pub fn track(&self) -> TrackSiteUseCase {
        TrackSiteUseCase::new(self.registry.clone())
    }

    pub fn untrack(&self) -> UntrackSiteUseCase {
        UntrackSiteUseCase::new(self.registry.clone())
    }

    pub fn block(&self) -> BlockSiteUseCase {
        BlockSiteUseCase::new(
            self.registry.clone(),
            self.scheduler.clone(),
            self.clock.clone(),
        )
    }

    pub fn unblock(&self) -> TemporaryUnblockUseCase {
        TemporaryUnblockUseCase::new(
            self.registry.clone(),
            self.scheduler.clone(),
            self.clock.clone(),
        )
    }

    pub fn status(&self) -> GetSiteStatusUseCase {
        GetSiteStatusUseCase::new(self.registry.clone(), self.ledger.clone())
    }

    pub fn list(&self) -> ListSitesUseCase {
        ListSitesUseCase::new(self.registry.clone())
    }

    pub fn usage_summary(&self) -> GetUsageSummaryUseCase {
        GetUsageSummaryUseCase::new(self.ledger.clone())
    }

    pub fn set_limit(&self) -> SetDailyLimitUseCase {
        SetDailyLimitUseCase::new(self.ledger.clone())
    }
}
