use sitegate_domain::SiteKey;

/// Arms a one-shot wake-up that re-evaluates a site's block state at
/// `at_ms`.
///
/// Fire-and-forget: access decisions never depend on a wake-up firing, so
/// implementations may drop requests (for instance when shutting down).
pub trait ExpiryScheduler: Send + Sync {
    fn schedule(&self, key: &SiteKey, at_ms: i64);
}

/// Scheduler used when proactive cleanup is disabled.
pub struct NoopExpiryScheduler;

impl ExpiryScheduler for NoopExpiryScheduler {
    fn schedule(&self, _key: &SiteKey, _at_ms: i64) {}
}
