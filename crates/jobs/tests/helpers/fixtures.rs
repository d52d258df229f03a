#![allow(dead_code)]

use sitegate_application::ports::Clock;
use sitegate_application::services::SiteRegistry;
use sitegate_application::use_cases::ExpireSiteUseCase;
use sitegate_domain::{SiteKey, SiteState, SiteStatePatch};
use sitegate_infrastructure::database::create_memory_pool;
use sitegate_infrastructure::repositories::SqliteSiteStateRepository;
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// 2026-10-16T12:00:00Z
pub const NOW: i64 = 1_792_152_000_000;

pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn at(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
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
        const DAY_MS: i64 = 86_400_000;
        (now_ms.div_euclid(DAY_MS) + 1) * DAY_MS
    }
}

pub fn key(host: &str) -> SiteKey {
    SiteKey::parse(host).unwrap()
}

/// Registry and expiry use case over an in-memory SQLite store.
pub struct Fixture {
    pub pool: SqlitePool,
    pub clock: Arc<FixedClock>,
    pub registry: Arc<SiteRegistry>,
    pub expire: Arc<ExpireSiteUseCase>,
}

impl Fixture {
    pub async fn new() -> Self {
        let pool = create_memory_pool().await.unwrap();
        let clock = Arc::new(FixedClock::at(NOW));
        let repo = Arc::new(SqliteSiteStateRepository::new(pool.clone()));
        let registry = Arc::new(SiteRegistry::new(repo, clock.clone()));
        let expire = Arc::new(ExpireSiteUseCase::new(registry.clone(), clock.clone()));

        Self {
            pool,
            clock,
            registry,
            expire,
        }
    }

    pub async fn block(&self, host: &str, blocked_until: i64) {
        self.registry
            .set(
                &key(host),
                SiteStatePatch::new()
                    .is_blocked(true)
                    .blocked_until(blocked_until),
            )
            .await
            .unwrap();
    }

    pub async fn state(&self, host: &str) -> SiteState {
        self.registry.get(&key(host)).await.unwrap().unwrap()
    }
}
