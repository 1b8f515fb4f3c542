use crate::app::AppState;
use crate::domain::{
    country_flag, expand_glyph, group_countdown, priority_band, CountdownTier, DeliveryRecord,
    FlatRow, TimeRemaining,
};
use crate::ui::styles::{
    border_style, default_style, dim_style, priority_style, selected_style, tier_style,
    title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the grouped delivery table. Group headers carry the live
/// countdown and its tier color; both are recomputed from the current
/// clock on every draw, so the 1 Hz tick only needs to trigger a render.
pub fn render_table_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let now = Local::now().naive_local();
    let rows = app.visible_rows();

    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            " No data found",
            dim_style(),
        )))]
    } else {
        rows.iter()
            .enumerate()
            .map(|(idx, row)| {
                let line = match row {
                    FlatRow::GroupHeader {
                        key,
                        count,
                        expanded,
                    } => {
                        let (remaining, tier) = group_countdown(key, now);
                        group_header_line(key, *count, *expanded, remaining, tier)
                    }
                    FlatRow::Delivery { key, index } => match app
                        .groups
                        .get(key)
                        .and_then(|members| members.get(*index))
                    {
                        Some(record) => delivery_line(record),
                        None => Line::raw(""),
                    },
                };

                let item = ListItem::new(line);
                if idx == app.selected_index {
                    item.style(selected_style())
                } else {
                    item
                }
            })
            .collect()
    };

    let title = format!(" Deliveries by GI time ({} groups) ", app.groups.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected_index.min(rows.len().saturating_sub(1))));
    f.render_stateful_widget(list, area, &mut state);
}

/// One group header row: toggle glyph, GI time, member count, countdown
fn group_header_line(
    key: &str,
    count: usize,
    expanded: bool,
    remaining: Option<TimeRemaining>,
    tier: CountdownTier,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!(" [{}] ", expand_glyph(expanded)), dim_style()),
        Span::styled(format!("{key} "), tier_style(tier)),
        Span::styled(format!("({count} deliveries)"), dim_style()),
    ];

    if let Some(remaining) = remaining {
        spans.push(Span::styled(
            format!(
                "   ⏳ {:02}:{:02}:{:02}",
                remaining.hours, remaining.minutes, remaining.seconds
            ),
            tier_style(tier),
        ));
    }

    Line::from(spans)
}

/// One delivery row inside an expanded group
fn delivery_line(record: &DeliveryRecord) -> Line<'static> {
    let band = priority_band(&record.priority);
    let priority_text = if record.priority.is_empty() {
        "  ".to_string()
    } else {
        record.priority.clone()
    };

    let country = match country_flag(&record.country) {
        Some(flag) => format!("{flag} {}", record.country),
        None => record.country.clone(),
    };

    Line::from(vec![
        Span::raw("     "),
        Span::styled(format!("{:<12}", record.delivery), default_style()),
        Span::styled(format!("[{priority_text}] "), priority_style(band)),
        Span::styled(format!("{:<14}", record.status), default_style()),
        Span::styled(
            format!("{} {}  ", record.created, record.time),
            dim_style(),
        ),
        Span::styled(
            format!("GI {} {}  ", record.gi_date, record.gi_time),
            dim_style(),
        ),
        Span::raw(format!("{:<6}", country)),
        Span::styled(format!("{} HUs", record.handling_unit_count), dim_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_header_line_contents() {
        let remaining = TimeRemaining {
            hours: 1,
            minutes: 5,
            seconds: 9,
            total_ms: 3_909_000,
            expired: false,
        };
        let line = format!(
            "{:?}",
            group_header_line("10:00:00", 3, false, Some(remaining), CountdownTier::Normal)
        );

        assert!(line.contains("[+]"));
        assert!(line.contains("10:00:00"));
        assert!(line.contains("(3 deliveries)"));
        assert!(line.contains("01:05:09"));
    }

    #[test]
    fn test_group_header_line_without_countdown() {
        let line = format!(
            "{:?}",
            group_header_line("No GI Time", 1, true, None, CountdownTier::Expired)
        );

        assert!(line.contains("[−]"));
        assert!(line.contains("No GI Time"));
        assert!(!line.contains("⏳"));
    }

    #[test]
    fn test_delivery_line_contents() {
        let record = DeliveryRecord {
            delivery: "80012345".to_string(),
            priority: "10".to_string(),
            status: "In picking".to_string(),
            gi_date: "01/01/2025".to_string(),
            gi_time: "10:00:00".to_string(),
            country: "ES".to_string(),
            handling_unit_count: "4".to_string(),
            ..Default::default()
        };

        let line = format!("{:?}", delivery_line(&record));
        assert!(line.contains("80012345"));
        assert!(line.contains("[10]"));
        assert!(line.contains("In picking"));
        assert!(line.contains("4 HUs"));
    }
}
