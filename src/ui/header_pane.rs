use crate::app::{AppState, StatsState};
use crate::domain::{StatsWindow, UiMode};
use crate::ui::styles::{
    active_filter_style, default_style, dim_style, disabled_filter_style, error_style, hint_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the header pane: dashboard title with the active date window,
/// open-workload counters, priority toggles, and the search box.
pub fn render_header_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let window_label = if app.filter.show_tomorrow {
        " Tomorrow "
    } else {
        " Today "
    };

    let title_line = Line::from(vec![
        Span::styled(" Dockwatch — Outbound Deliveries ", title_style()),
        Span::styled(format!("[{}]", window_label.trim()), active_filter_style()),
    ]);

    let lines = vec![
        title_line,
        stats_line(app),
        priorities_line(app),
        search_line(app),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

/// Counters for the window matching the today/tomorrow toggle
fn stats_line(app: &AppState) -> Line<'static> {
    match &app.stats {
        StatsState::Loading => Line::from(vec![
            Span::raw(" Lines open: "),
            Span::styled("Loading…", hint_style()),
            Span::raw("   Items open: "),
            Span::styled("Loading…", hint_style()),
        ]),
        StatsState::Error => Line::from(vec![
            Span::raw(" Lines open: "),
            Span::styled("Error", error_style()),
            Span::raw("   Items open: "),
            Span::styled("Error", error_style()),
        ]),
        StatsState::Ready(snapshot) => {
            let window: StatsWindow = if app.filter.show_tomorrow {
                snapshot.tomorrow
            } else {
                snapshot.today
            };
            Line::from(vec![
                Span::raw(" Lines open: "),
                Span::styled(group_thousands(window.total_lines_open), default_style()),
                Span::raw("   Items open: "),
                Span::styled(group_thousands(window.total_items_open), default_style()),
            ])
        }
    }
}

fn priorities_line(app: &AppState) -> Line<'static> {
    let p = app.filter.priorities;
    let mut spans = vec![Span::raw(" Priorities: ")];
    for (key, label, enabled) in [("1", "10", p.p10), ("2", "20", p.p20), ("3", "30", p.p30)] {
        spans.push(Span::styled(format!("[{key}] "), hint_style()));
        let style = if enabled {
            active_filter_style()
        } else {
            disabled_filter_style()
        };
        spans.push(Span::styled(label.to_string(), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn search_line(app: &AppState) -> Line<'static> {
    let mut spans = vec![Span::raw(" Search: ")];
    if app.ui_mode == UiMode::Search {
        spans.push(Span::styled(
            format!("{}▏", app.filter.search_term),
            active_filter_style(),
        ));
    } else if app.filter.search_term.is_empty() {
        spans.push(Span::styled("(press / to filter)".to_string(), hint_style()));
    } else {
        spans.push(Span::styled(
            app.filter.search_term.clone(),
            default_style(),
        ));
    }
    spans.push(Span::styled(
        format!("   {} deliveries match", app.filtered_count()),
        dim_style(),
    ));
    Line::from(spans)
}

/// Format an integer with thousands separators, e.g. 1234567 → "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_stats_line_shows_window_for_toggle() {
        use crate::domain::StatsSnapshot;

        let mut app = AppState::new();
        app.stats = StatsState::Ready(StatsSnapshot {
            today: StatsWindow {
                total_lines_open: 100,
                total_items_open: 200,
            },
            tomorrow: StatsWindow {
                total_lines_open: 300,
                total_items_open: 400,
            },
        });

        let today = format!("{:?}", stats_line(&app));
        assert!(today.contains("100"));

        app.filter.show_tomorrow = true;
        let tomorrow = format!("{:?}", stats_line(&app));
        assert!(tomorrow.contains("300"));
    }

    #[test]
    fn test_stats_line_error_placeholder() {
        let mut app = AppState::new();
        app.stats = StatsState::Error;

        let line = format!("{:?}", stats_line(&app));
        assert!(line.contains("Error"));
    }
}
