use super::clock::{parse_clock_time, remaining_time, TimeRemaining};
use chrono::NaiveDateTime;

/// Urgency tier for a goods-issue countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTier {
    Expired,
    Critical,
    Warning,
    Normal,
}

/// Map a remaining duration to its urgency tier. Pure and stateless;
/// callers recompute it every tick because "now" keeps advancing.
pub fn classify(remaining: &TimeRemaining) -> CountdownTier {
    if remaining.expired {
        CountdownTier::Expired
    } else if remaining.hours == 0 && remaining.minutes < 30 {
        CountdownTier::Critical
    } else if remaining.hours == 0 {
        CountdownTier::Warning
    } else {
        CountdownTier::Normal
    }
}

/// Countdown state for a group header: the remaining time when the key is
/// a valid clock time, and the tier either way. The unscheduled sentinel
/// and unparseable keys render with the expired tier and no countdown.
pub fn group_countdown(key: &str, now: NaiveDateTime) -> (Option<TimeRemaining>, CountdownTier) {
    match parse_clock_time(key) {
        Some(target) => {
            let remaining = remaining_time(target, now);
            let tier = classify(&remaining);
            (Some(remaining), tier)
        }
        None => (None, CountdownTier::Expired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grouping::UNSCHEDULED;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn remaining(hours: i64, minutes: i64) -> TimeRemaining {
        let total_ms = (hours * 3600 + minutes * 60) * 1000;
        TimeRemaining {
            hours,
            minutes,
            seconds: 0,
            total_ms,
            expired: total_ms <= 0,
        }
    }

    #[test]
    fn test_classify_tiers() {
        assert_eq!(classify(&remaining(0, 0)), CountdownTier::Expired);
        assert_eq!(classify(&remaining(0, 5)), CountdownTier::Critical);
        assert_eq!(classify(&remaining(0, 29)), CountdownTier::Critical);
        assert_eq!(classify(&remaining(0, 45)), CountdownTier::Warning);
        assert_eq!(classify(&remaining(1, 0)), CountdownTier::Normal);
        assert_eq!(classify(&remaining(5, 30)), CountdownTier::Normal);
    }

    #[test]
    fn test_exactly_thirty_minutes_is_warning() {
        assert_eq!(classify(&remaining(0, 30)), CountdownTier::Warning);
    }

    #[test]
    fn test_classify_is_pure() {
        let input = remaining(0, 12);
        assert_eq!(classify(&input), classify(&input));
    }

    #[test]
    fn test_group_countdown_parses_clock_keys() {
        let now = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let (remaining, tier) = group_countdown("09:20:00", now);
        assert_eq!(tier, CountdownTier::Critical);
        assert_eq!(remaining.map(|r| r.minutes), Some(20));
    }

    #[test]
    fn test_group_countdown_sentinel_is_expired() {
        let now = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let (remaining, tier) = group_countdown(UNSCHEDULED, now);
        assert_eq!(tier, CountdownTier::Expired);
        assert_eq!(remaining, None);
    }
}
