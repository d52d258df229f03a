use chrono::{Local, Utc};
use chrono_tz::Tz;
use sitegate_application::ports::Clock;
use sitegate_domain::time::next_midnight_after;

/// Wall clock. Midnights are taken in the configured zone, or the host's
/// local zone when none is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: Option<Tz>,
}

impl SystemClock {
    pub fn new(zone: Option<Tz>) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn next_midnight_after(&self, now_ms: i64) -> i64 {
        match &self.zone {
            Some(tz) => next_midnight_after(now_ms, tz),
            None => next_midnight_after(now_ms, &Local),
        }
    }
}
