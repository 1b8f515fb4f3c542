use super::clock::format_local_date;
use super::record::DeliveryRecord;
use chrono::NaiveDate;

/// Which priority bands are currently enabled. Only the three known bands
/// can be toggled; everything else is always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrioritySelection {
    pub p10: bool,
    pub p20: bool,
    pub p30: bool,
}

impl Default for PrioritySelection {
    fn default() -> Self {
        Self {
            p10: true,
            p20: true,
            p30: true,
        }
    }
}

impl PrioritySelection {
    /// Whether a record with this (trimmed) priority passes the filter
    pub fn allows(&self, priority: &str) -> bool {
        match priority {
            "" => true,
            "10" => self.p10,
            "20" => self.p20,
            "30" => self.p30,
            _ => true,
        }
    }
}

/// User-driven inputs to the filter engine. Lives for the session; resets
/// on restart.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub search_term: String,
    pub priorities: PrioritySelection,
    pub show_tomorrow: bool,
}

/// Apply the date-window, search, and priority predicates in that order.
/// Predicates are independent and conjunctive; the result preserves input
/// order.
pub fn filter_records(
    records: &[DeliveryRecord],
    state: &FilterState,
    reference_date: NaiveDate,
) -> Vec<DeliveryRecord> {
    let today = format_local_date(reference_date);
    let term = state.search_term.trim().to_lowercase();

    records
        .iter()
        .filter(|rec| matches_date_window(rec, &today, state.show_tomorrow))
        .filter(|rec| matches_search(rec, &term))
        .filter(|rec| state.priorities.allows(&rec.priority))
        .cloned()
        .collect()
}

fn matches_date_window(rec: &DeliveryRecord, today: &str, show_tomorrow: bool) -> bool {
    if rec.gi_date.is_empty() {
        // Undated lines ride along with the today view only
        return !show_tomorrow;
    }
    if show_tomorrow {
        // Anything that is not today counts as "tomorrow" for display,
        // including stale or far-future dates
        rec.gi_date != today
    } else {
        rec.gi_date == today
    }
}

fn matches_search(rec: &DeliveryRecord, term: &str) -> bool {
    term.is_empty() || (!rec.delivery.is_empty() && rec.delivery.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TODAY: &str = "01/01/2025";

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn record(delivery: &str, priority: &str, gi_date: &str, gi_time: &str) -> DeliveryRecord {
        DeliveryRecord {
            delivery: delivery.to_string(),
            priority: priority.to_string(),
            gi_date: gi_date.to_string(),
            gi_time: gi_time.to_string(),
            ..Default::default()
        }
    }

    fn deliveries(records: &[DeliveryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.delivery.as_str()).collect()
    }

    #[test]
    fn test_today_window_keeps_only_today() {
        let records = vec![
            record("A1", "10", TODAY, "10:00:00"),
            record("A2", "20", "02/01/2025", ""),
        ];
        let state = FilterState::default();

        let filtered = filter_records(&records, &state, reference_date());
        assert_eq!(deliveries(&filtered), vec!["A1"]);
    }

    #[test]
    fn test_tomorrow_window_keeps_everything_not_today() {
        let records = vec![
            record("A1", "10", TODAY, "10:00:00"),
            record("A2", "20", "02/01/2025", ""),
            record("A3", "", "31/12/2024", ""),
        ];
        let state = FilterState {
            show_tomorrow: true,
            ..Default::default()
        };

        // Yesterday's leftover counts as "tomorrow" too
        let filtered = filter_records(&records, &state, reference_date());
        assert_eq!(deliveries(&filtered), vec!["A2", "A3"]);
    }

    #[test]
    fn test_undated_records_belong_to_the_today_view() {
        let records = vec![record("A1", "", "", "")];

        let today = FilterState::default();
        assert_eq!(filter_records(&records, &today, reference_date()).len(), 1);

        let tomorrow = FilterState {
            show_tomorrow: true,
            ..Default::default()
        };
        assert!(filter_records(&records, &tomorrow, reference_date()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![
            record("80012345", "10", TODAY, ""),
            record("80099999", "10", TODAY, ""),
        ];
        let state = FilterState {
            search_term: "  123  ".to_string(),
            ..Default::default()
        };

        let filtered = filter_records(&records, &state, reference_date());
        assert_eq!(deliveries(&filtered), vec!["80012345"]);
    }

    #[test]
    fn test_search_drops_records_without_delivery() {
        let records = vec![record("", "10", TODAY, "")];
        let state = FilterState {
            search_term: "a".to_string(),
            ..Default::default()
        };

        assert!(filter_records(&records, &state, reference_date()).is_empty());
    }

    #[test]
    fn test_empty_priority_always_survives() {
        let records = vec![record("A1", "", TODAY, "")];
        let state = FilterState {
            priorities: PrioritySelection {
                p10: false,
                p20: false,
                p30: false,
            },
            ..Default::default()
        };

        assert_eq!(filter_records(&records, &state, reference_date()).len(), 1);
    }

    #[test]
    fn test_unknown_priority_is_never_excludable() {
        let records = vec![record("A1", "40", TODAY, "")];
        let state = FilterState {
            priorities: PrioritySelection {
                p10: false,
                p20: false,
                p30: false,
            },
            ..Default::default()
        };

        assert_eq!(filter_records(&records, &state, reference_date()).len(), 1);
    }

    #[test]
    fn test_disabled_band_is_excluded() {
        let records = vec![
            record("A1", "10", TODAY, ""),
            record("A2", "20", TODAY, ""),
        ];
        let state = FilterState {
            priorities: PrioritySelection {
                p10: false,
                p20: true,
                p30: true,
            },
            ..Default::default()
        };

        let filtered = filter_records(&records, &state, reference_date());
        assert_eq!(deliveries(&filtered), vec!["A2"]);
    }

    #[test]
    fn test_result_preserves_input_order() {
        let records = vec![
            record("C", "10", TODAY, ""),
            record("A", "20", TODAY, ""),
            record("B", "30", TODAY, ""),
        ];
        let state = FilterState::default();

        let filtered = filter_records(&records, &state, reference_date());
        assert_eq!(deliveries(&filtered), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_combined_filters_worked_example() {
        let records = vec![
            record("A1", "10", "01/01/2025", "10:00:00"),
            record("A2", "20", "02/01/2025", ""),
        ];

        let today = FilterState::default();
        assert_eq!(
            deliveries(&filter_records(&records, &today, reference_date())),
            vec!["A1"]
        );

        let tomorrow = FilterState {
            show_tomorrow: true,
            ..Default::default()
        };
        assert_eq!(
            deliveries(&filter_records(&records, &tomorrow, reference_date())),
            vec!["A2"]
        );

        // "a2" matches case-insensitively, but only in the tomorrow window
        let search_tomorrow = FilterState {
            search_term: "a2".to_string(),
            show_tomorrow: true,
            ..Default::default()
        };
        assert_eq!(
            deliveries(&filter_records(&records, &search_tomorrow, reference_date())),
            vec!["A2"]
        );

        let search_today = FilterState {
            search_term: "a2".to_string(),
            ..Default::default()
        };
        assert!(filter_records(&records, &search_today, reference_date()).is_empty());
    }
}
