use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Remaining time until a goods-issue deadline, broken into display
/// components. `expired` is true iff `total_ms <= 0`, which after the
/// roll-forward in [`remaining_time`] can only happen when the target
/// equals `now` to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_ms: i64,
    pub expired: bool,
}

/// Format a date as zero-padded DD/MM/YYYY, the form used by the GI DATE
/// field of the delivery extract.
pub fn format_local_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parse a strict HH:MM:SS clock time. Returns `None` for anything else,
/// including out-of-range components; callers treat such values as
/// unscheduled rather than failing.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S").ok()
}

/// Time left until `target`, interpreted as a clock time occurring today.
/// A target already behind `now` is the next day's deadline, so it rolls
/// forward exactly one day, never more. Must be re-evaluated as "now"
/// advances; the result is only valid for the instant it was computed.
pub fn remaining_time(target: NaiveTime, now: NaiveDateTime) -> TimeRemaining {
    let mut target_at = now.date().and_time(target);
    if target_at < now {
        target_at = target_at + Duration::days(1);
    }

    let total_ms = (target_at - now).num_milliseconds();
    TimeRemaining {
        hours: total_ms / 3_600_000,
        minutes: (total_ms % 3_600_000) / 60_000,
        seconds: (total_ms % 60_000) / 1_000,
        total_ms,
        expired: total_ms <= 0,
    }
}
