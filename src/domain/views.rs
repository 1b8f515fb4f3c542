use super::record::DeliveryRecord;
use std::collections::{BTreeMap, HashMap};

/// A flattened row for rendering the grouped delivery table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatRow {
    /// Group header with its key, member count, and expansion state
    GroupHeader {
        key: String,
        count: usize,
        expanded: bool,
    },
    /// One delivery inside an expanded group, addressed by group key and
    /// index within the group
    Delivery { key: String, index: usize },
}

/// One flattened handling-unit pick row for the detail modal. The modal
/// shows every location pick of every transport order, annotated with its
/// handling unit's profile and first/last pick info.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickRow {
    pub handling_unit: String,
    pub transport_order: String,
    pub location: String,
    pub material: String,
    pub batch: String,
    pub quantity: String,
    pub profile: String,
    pub initiated_by: String,
    pub initiated_on: String,
    pub initiated_time: String,
    pub last_by: String,
    pub last_pick_on: String,
    pub last_time: String,
}

/// Priority band used for badge coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBand {
    P10,
    P20,
    P30,
    Other,
}

/// Flatten grouped records and the expansion map into a linear row list
/// for rendering and selection. Collapsed groups contribute only their
/// header; groups default to collapsed until toggled.
pub fn flatten_groups(
    groups: &BTreeMap<String, Vec<DeliveryRecord>>,
    expanded: &HashMap<String, bool>,
) -> Vec<FlatRow> {
    let mut rows = Vec::new();

    for (key, members) in groups {
        let is_expanded = expanded.get(key).copied().unwrap_or(false);
        rows.push(FlatRow::GroupHeader {
            key: key.clone(),
            count: members.len(),
            expanded: is_expanded,
        });

        if is_expanded {
            for index in 0..members.len() {
                rows.push(FlatRow::Delivery {
                    key: key.clone(),
                    index,
                });
            }
        }
    }

    rows
}

/// Flatten a delivery's handling units into pick rows, HU by HU, transport
/// order by transport order. Empty for deliveries without HU detail.
pub fn pick_rows(record: &DeliveryRecord) -> Vec<PickRow> {
    let mut rows = Vec::new();

    for (hu, detail) in &record.handling_units {
        for (to, picks) in &detail.transport_orders {
            for pick in picks {
                rows.push(PickRow {
                    handling_unit: hu.clone(),
                    transport_order: to.clone(),
                    location: pick.location.clone(),
                    material: pick.material.clone(),
                    batch: pick.batch.clone(),
                    quantity: pick.quantity.clone(),
                    profile: detail.profile.clone(),
                    initiated_by: detail.initiated_by.clone(),
                    initiated_on: detail.initiated_on.clone(),
                    initiated_time: detail.initiated_time.clone(),
                    last_by: detail.last_by.clone(),
                    last_pick_on: detail.last_pick_on.clone(),
                    last_time: detail.last_time.clone(),
                });
            }
        }
    }

    rows
}

/// Band a (trimmed) priority value for display
pub fn priority_band(priority: &str) -> PriorityBand {
    match priority.trim() {
        "10" => PriorityBand::P10,
        "20" => PriorityBand::P20,
        "30" => PriorityBand::P30,
        _ => PriorityBand::Other,
    }
}

/// Expansion toggle glyph for group headers
pub fn expand_glyph(expanded: bool) -> &'static str {
    if expanded {
        "−"
    } else {
        "+"
    }
}

/// Regional-indicator flag for a 2-letter country code
pub fn country_flag(code: &str) -> Option<String> {
    const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

    let code = code.trim().to_uppercase();
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }

    let mut flag = String::new();
    for c in code.chars() {
        flag.push(char::from_u32(REGIONAL_INDICATOR_A + (c as u32 - 'A' as u32))?);
    }
    Some(flag)
}
