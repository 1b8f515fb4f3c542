use crate::app::AppState;
use crate::domain::LoadState;
use crate::ui::styles::{dim_style, error_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status line: load state of the delivery list and the time
/// of the last successful refresh.
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![match &app.load_state {
        LoadState::Loading => Span::styled(" Loading data…", hint_style()),
        LoadState::Ready => Span::styled(" Data loaded", dim_style()),
        LoadState::Error(message) => {
            Span::styled(format!(" Error loading data: {message}"), error_style())
        }
    }];

    if let Some(loaded_at) = app.last_loaded_at {
        spans.push(Span::styled(
            format!("   last update {}", loaded_at.format("%H:%M:%S")),
            dim_style(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
