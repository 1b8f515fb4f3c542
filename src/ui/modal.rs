use crate::app::AppState;
use crate::domain::{pick_rows, PickRow};
use crate::ui::{
    layout::create_modal_area,
    styles::{dim_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the delivery detail modal: every location pick of every
/// handling unit, annotated with profile and first/last pick info.
pub fn render_detail_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(detail) = &app.detail else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let rows = pick_rows(&detail.record);
    let lines = if rows.is_empty() {
        vec![
            Line::raw(""),
            Line::from(Span::styled(
                "  No detailed information available for this delivery",
                dim_style(),
            )),
        ]
    } else {
        rows.iter().flat_map(pick_row_lines).collect()
    };

    // Saturate the scroll offset so the last page stays full
    let visible = modal_area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    let offset = detail.scroll.min(max_scroll);
    let lines: Vec<Line> = lines.into_iter().skip(offset).collect();

    let title = format!(" Delivery Details: {} ", detail.record.delivery);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}

/// Two lines per pick: the picked material line and its handling-unit
/// annotation
fn pick_row_lines(row: &PickRow) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::raw(format!(" HU {}", row.handling_unit)),
            Span::raw(format!(" · TO {}", row.transport_order)),
            Span::raw(format!(" · {}", row.location)),
            Span::raw(format!(" · mat {}", row.material)),
            Span::raw(format!(" · batch {}", row.batch)),
            Span::raw(format!(" · qty {}", row.quantity)),
        ]),
        Line::from(Span::styled(
            format!(
                "    profile {} · first {} {} {} · last {} {} {}",
                row.profile,
                row.initiated_by,
                row.initiated_on,
                row.initiated_time,
                row.last_by,
                row.last_pick_on,
                row.last_time
            ),
            dim_style(),
        )),
    ]
}
