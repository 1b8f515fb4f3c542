use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// One shipment line in canonical form. Every field is a string; absent or
/// malformed optional wire fields come through as empty strings, and
/// downstream consumers tolerate them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryRecord {
    pub delivery: String,
    /// Trimmed; one of "10", "20", "30", or empty/other
    pub priority: String,
    pub status: String,
    pub created: String,
    pub time: String,
    /// DD/MM/YYYY, or empty when the line carries no goods-issue date
    pub gi_date: String,
    /// HH:MM:SS, or empty when the line is unscheduled
    pub gi_time: String,
    /// 2-letter code, or empty
    pub country: String,
    pub handling_unit_count: String,
    pub handling_units: BTreeMap<String, HandlingUnitDetail>,
}

/// Pick history and transport orders for one handling unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandlingUnitDetail {
    pub profile: String,
    pub initiated_by: String,
    pub initiated_on: String,
    pub initiated_time: String,
    pub last_by: String,
    pub last_pick_on: String,
    pub last_time: String,
    pub transport_orders: BTreeMap<String, Vec<LocationPick>>,
}

/// One picked line of a transport order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPick {
    pub location: String,
    pub material: String,
    pub batch: String,
    pub quantity: String,
}

/// Open-workload counters for one date window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StatsWindow {
    #[serde(default)]
    pub total_lines_open: u64,
    #[serde(default)]
    pub total_items_open: u64,
}

/// The statistics document: one counter pair per date window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub today: StatsWindow,
    #[serde(default)]
    pub tomorrow: StatsWindow,
}

/// Accept a wire scalar as its string form. The extract is inconsistent
/// about quoting, so delivery numbers and priorities arrive as either JSON
/// strings or bare numbers; null collapses to empty.
fn stringish<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// One delivery line as served by the VL06F extract
#[derive(Debug, Clone, Deserialize)]
pub struct RawDelivery {
    #[serde(rename = "DELIVERY", default, deserialize_with = "stringish")]
    pub delivery: String,
    #[serde(rename = "DELIVERY PRIORITY", default, deserialize_with = "stringish")]
    pub priority: String,
    #[serde(rename = "STATUS", default, deserialize_with = "stringish")]
    pub status: String,
    #[serde(rename = "CREATED", default, deserialize_with = "stringish")]
    pub created: String,
    #[serde(rename = "TIME", default, deserialize_with = "stringish")]
    pub time: String,
    #[serde(rename = "GI DATE", default, deserialize_with = "stringish")]
    pub gi_date: String,
    #[serde(rename = "GI TIME", default, deserialize_with = "stringish")]
    pub gi_time: String,
    #[serde(rename = "COUNTRY", default, deserialize_with = "stringish")]
    pub country: String,
    #[serde(rename = "HUS", default, deserialize_with = "stringish")]
    pub handling_unit_count: String,
    #[serde(rename = "HU INFO", default)]
    pub hu_info: BTreeMap<String, RawHandlingUnit>,
}

/// HU INFO entry as served
#[derive(Debug, Clone, Deserialize)]
pub struct RawHandlingUnit {
    #[serde(rename = "PROFILE", default, deserialize_with = "stringish")]
    pub profile: String,
    #[serde(rename = "INITIATED_BY", default, deserialize_with = "stringish")]
    pub initiated_by: String,
    #[serde(rename = "INITIATED_ON", default, deserialize_with = "stringish")]
    pub initiated_on: String,
    #[serde(rename = "INITIATED_TIME", default, deserialize_with = "stringish")]
    pub initiated_time: String,
    #[serde(rename = "LAST_BY", default, deserialize_with = "stringish")]
    pub last_by: String,
    #[serde(rename = "LAST_PICK_ON", default, deserialize_with = "stringish")]
    pub last_pick_on: String,
    #[serde(rename = "LAST_TIME", default, deserialize_with = "stringish")]
    pub last_time: String,
    #[serde(rename = "TO_NUMBERS", default)]
    pub transport_orders: BTreeMap<String, RawTransportOrder>,
}

/// TO_NUMBERS entry as served
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransportOrder {
    #[serde(rename = "LOCATIONS", default)]
    pub locations: Vec<RawLocationPick>,
}

/// LOCATIONS entry as served
#[derive(Debug, Clone, Deserialize)]
pub struct RawLocationPick {
    #[serde(rename = "LOCATION", default, deserialize_with = "stringish")]
    pub location: String,
    #[serde(rename = "MATERIAL", default, deserialize_with = "stringish")]
    pub material: String,
    #[serde(rename = "BATCH", default, deserialize_with = "stringish")]
    pub batch: String,
    #[serde(rename = "TO ITEM QTY", default, deserialize_with = "stringish")]
    pub quantity: String,
}

impl From<RawDelivery> for DeliveryRecord {
    /// Normalize a wire object. Total: trims the priority, carries every
    /// other field as provided, and lets serde defaults stand in for
    /// missing values.
    fn from(raw: RawDelivery) -> Self {
        Self {
            delivery: raw.delivery,
            priority: raw.priority.trim().to_string(),
            status: raw.status,
            created: raw.created,
            time: raw.time,
            gi_date: raw.gi_date,
            gi_time: raw.gi_time,
            country: raw.country,
            handling_unit_count: raw.handling_unit_count,
            handling_units: raw
                .hu_info
                .into_iter()
                .map(|(hu, detail)| (hu, HandlingUnitDetail::from(detail)))
                .collect(),
        }
    }
}

impl From<RawHandlingUnit> for HandlingUnitDetail {
    fn from(raw: RawHandlingUnit) -> Self {
        Self {
            profile: raw.profile,
            initiated_by: raw.initiated_by,
            initiated_on: raw.initiated_on,
            initiated_time: raw.initiated_time,
            last_by: raw.last_by,
            last_pick_on: raw.last_pick_on,
            last_time: raw.last_time,
            transport_orders: raw
                .transport_orders
                .into_iter()
                .map(|(to, order)| {
                    let picks = order.locations.into_iter().map(LocationPick::from).collect();
                    (to, picks)
                })
                .collect(),
        }
    }
}

impl From<RawLocationPick> for LocationPick {
    fn from(raw: RawLocationPick) -> Self {
        Self {
            location: raw.location,
            material: raw.material,
            batch: raw.batch,
            quantity: raw.quantity,
        }
    }
}
