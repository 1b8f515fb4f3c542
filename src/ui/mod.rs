pub mod header_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod status_bar;
pub mod styles;
pub mod table_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use header_pane::render_header_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_detail_modal;
use ratatui::Frame;
use status_bar::render_status_bar;
use table_pane::render_table_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_header_pane(f, app, layout.header_area);
    render_table_pane(f, app, layout.table_area);
    render_status_bar(f, app, layout.status_area);

    // Detail modal on top of everything
    if app.ui_mode == UiMode::Detail {
        render_detail_modal(f, app, size);
    }
}
