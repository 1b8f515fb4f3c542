use crate::app::AppState;
use crate::domain::{PriorityBand, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle a keyboard event. Returns `Ok(true)` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Search => handle_search_mode(app, key),
        UiMode::Detail => handle_detail_mode(app, key),
    }
}

/// Keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle a group or open the delivery detail modal
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_selected();
            Ok(false)
        }

        // Date window: 't' toggles, arrows jump directly (left to
        // tomorrow, right back to today)
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_tomorrow();
            Ok(false)
        }
        KeyCode::Left => {
            if !app.filter.show_tomorrow {
                app.toggle_tomorrow();
            }
            Ok(false)
        }
        KeyCode::Right => {
            if app.filter.show_tomorrow {
                app.toggle_tomorrow();
            }
            Ok(false)
        }

        // Priority band toggles
        KeyCode::Char('1') => {
            app.toggle_priority(PriorityBand::P10);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.toggle_priority(PriorityBand::P20);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.toggle_priority(PriorityBand::P30);
            Ok(false)
        }

        // Search
        KeyCode::Char('/') => {
            app.start_search();
            Ok(false)
        }

        // Manual refresh, ahead of the scheduled one
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.request_refresh();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Keys while editing the search term; every edit re-filters
fn handle_search_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_search();
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_search();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.search_pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.search_push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Keys while the detail modal is open
fn handle_detail_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            app.close_detail();
            Ok(false)
        }
        KeyCode::Up => {
            app.scroll_detail_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.scroll_detail_down();
            Ok(false)
        }
        KeyCode::PageUp => {
            for _ in 0..5 {
                app.scroll_detail_up();
            }
            Ok(false)
        }
        KeyCode::PageDown => {
            for _ in 0..5 {
                app.scroll_detail_down();
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = AppState::new();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
        assert!(handle_key(&mut app, press(KeyCode::Esc)).unwrap());
        assert!(!handle_key(&mut app, press(KeyCode::Char('z'))).unwrap());
    }

    #[test]
    fn test_date_window_keys() {
        let mut app = AppState::new();

        handle_key(&mut app, press(KeyCode::Char('t'))).unwrap();
        assert!(app.filter.show_tomorrow);

        // Right snaps back to today; a second press is a no-op
        handle_key(&mut app, press(KeyCode::Right)).unwrap();
        assert!(!app.filter.show_tomorrow);
        handle_key(&mut app, press(KeyCode::Right)).unwrap();
        assert!(!app.filter.show_tomorrow);

        handle_key(&mut app, press(KeyCode::Left)).unwrap();
        assert!(app.filter.show_tomorrow);
    }

    #[test]
    fn test_priority_keys() {
        let mut app = AppState::new();

        handle_key(&mut app, press(KeyCode::Char('2'))).unwrap();
        assert!(!app.filter.priorities.p20);
        handle_key(&mut app, press(KeyCode::Char('2'))).unwrap();
        assert!(app.filter.priorities.p20);
    }

    #[test]
    fn test_search_mode_typing() {
        let mut app = AppState::new();

        handle_key(&mut app, press(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Search);

        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.filter.search_term, "a2");

        // Esc does not quit from search mode, it clears the term
        assert!(!handle_key(&mut app, press(KeyCode::Esc)).unwrap());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.filter.search_term, "");
    }

    #[test]
    fn test_search_submit_keeps_term() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('/'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('8'))).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.filter.search_term, "8");
    }

    #[test]
    fn test_refresh_key() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('g'))).unwrap();
        assert!(app.take_refresh_request());
    }
}
