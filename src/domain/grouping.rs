use super::record::DeliveryRecord;
use std::collections::BTreeMap;

/// Group key for records without a scheduled goods-issue time
pub const UNSCHEDULED: &str = "No GI Time";

/// Partition records into buckets keyed by GI time, preserving input order
/// within each bucket. Keys iterate lexicographically, which puts clock
/// times first and the unscheduled sentinel last. Rebuilt from scratch on
/// every call; there is no incremental update.
pub fn group_by_time(records: &[DeliveryRecord]) -> BTreeMap<String, Vec<DeliveryRecord>> {
    let mut groups: BTreeMap<String, Vec<DeliveryRecord>> = BTreeMap::new();

    for rec in records {
        let key = if rec.gi_time.is_empty() {
            UNSCHEDULED.to_string()
        } else {
            rec.gi_time.clone()
        };
        groups.entry(key).or_default().push(rec.clone());
    }

    groups
}
