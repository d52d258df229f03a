use chrono::{DateTime, NaiveTime, TimeZone};

pub const DAY_MS: i64 = 86_400_000;

/// Next local 00:00:00.000 strictly after `now_ms`, in `tz`.
///
/// When `now_ms` sits exactly on a midnight the result is the following one,
/// a full day later. If midnight does not exist on the next day (a DST gap),
/// the first valid instant of that day is used.
pub fn next_midnight_after<Tz: TimeZone>(now_ms: i64, tz: &Tz) -> i64 {
    let Some(now) = DateTime::from_timestamp_millis(now_ms) else {
        return now_ms.saturating_add(DAY_MS);
    };
    let Some(tomorrow) = now.with_timezone(tz).date_naive().succ_opt() else {
        return now_ms.saturating_add(DAY_MS);
    };

    (0..24)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| tz.from_local_datetime(&tomorrow.and_time(time)).earliest())
        .map(|instant| instant.timestamp_millis())
        .unwrap_or_else(|| now_ms.saturating_add(DAY_MS))
}
