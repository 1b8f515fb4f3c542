pub mod clock;
pub mod countdown;
pub mod enums;
pub mod filter;
pub mod grouping;
pub mod record;
pub mod views;

pub use clock::{format_local_date, parse_clock_time, remaining_time, TimeRemaining};
pub use countdown::{classify, group_countdown, CountdownTier};
pub use enums::{LoadState, UiMode};
pub use filter::{filter_records, FilterState, PrioritySelection};
pub use grouping::{group_by_time, UNSCHEDULED};
pub use record::{
    DeliveryRecord, HandlingUnitDetail, LocationPick, RawDelivery, StatsSnapshot, StatsWindow,
};
pub use views::{
    country_flag, expand_glyph, flatten_groups, pick_rows, priority_band, FlatRow, PickRow,
    PriorityBand,
};
