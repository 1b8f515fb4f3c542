use crate::domain::{filter_records, group_by_time, FilterState};
use crate::fetch::{self, SourceConfig};
use anyhow::Result;
use chrono::Local;

/// Fetch both documents once and print the filtered, grouped table to
/// stdout. The non-interactive counterpart of the dashboard, useful for
/// shift-handover notes or piping into other tools.
pub fn run(source: SourceConfig, show_tomorrow: bool) -> Result<()> {
    let client = fetch::build_client()?;
    let records = fetch::fetch_deliveries(&client, &source)?;
    let stats = fetch::fetch_statistics(&client, &source).ok();

    let filter = FilterState {
        show_tomorrow,
        ..Default::default()
    };
    let filtered = filter_records(&records, &filter, Local::now().date_naive());
    let groups = group_by_time(&filtered);

    let window = if show_tomorrow { "tomorrow" } else { "today" };
    println!("Outbound deliveries ({window}): {}", filtered.len());

    if let Some(stats) = stats {
        let counters = if show_tomorrow {
            stats.tomorrow
        } else {
            stats.today
        };
        println!(
            "Open lines: {}   Open items: {}",
            counters.total_lines_open, counters.total_items_open
        );
    }

    for (gi_time, members) in &groups {
        println!();
        println!("== {gi_time} ({} deliveries)", members.len());
        for record in members {
            let priority = if record.priority.is_empty() {
                "--".to_string()
            } else {
                record.priority.clone()
            };
            println!(
                "  {:<12} [{priority}] {:<14} {:<4} {} HUs",
                record.delivery, record.status, record.country, record.handling_unit_count
            );
        }
    }

    Ok(())
}
