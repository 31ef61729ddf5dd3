//! Schedule predicates over Unix-second timestamps.
//! A timestamp of 0 means "not scheduled" and never opens a window.

/// `now` is inside `[start_ts, end_ts)` and the window has been scheduled.
pub fn is_within_window(now_ts: i64, start_ts: i64, end_ts: i64) -> bool {
    start_ts != 0 && now_ts >= start_ts && now_ts < end_ts
}

/// `now` is at or after `start_ts` and the start has been scheduled.
pub fn has_started(now_ts: i64, start_ts: i64) -> bool {
    start_ts != 0 && now_ts >= start_ts
}

/// A deadline is still pending strictly before it is reached.
pub fn is_before(now_ts: i64, deadline_ts: i64) -> bool {
    now_ts < deadline_ts
}
