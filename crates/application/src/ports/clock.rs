/// Source of "now" and of the daily reset boundary.
pub trait Clock: Send + Sync {
    /// Current instant in epoch milliseconds.
    fn now_ms(&self) -> i64;

    /// Next local midnight strictly after `now_ms`.
    fn next_midnight_after(&self, now_ms: i64) -> i64;
}
