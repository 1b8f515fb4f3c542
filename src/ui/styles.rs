use crate::domain::{CountdownTier, PriorityBand};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Dimmed style for secondary row fields
pub fn dim_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Active filter / toggle indicator style
pub fn active_filter_style() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Disabled filter indicator style
pub fn disabled_filter_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Group header style for a countdown tier
pub fn tier_style(tier: CountdownTier) -> Style {
    match tier {
        CountdownTier::Normal => Style::default().fg(Color::Green),
        CountdownTier::Warning => Style::default().fg(Color::Yellow),
        CountdownTier::Critical => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        CountdownTier::Expired => Style::default().fg(Color::DarkGray),
    }
}

/// Priority badge style for a band
pub fn priority_style(band: PriorityBand) -> Style {
    match band {
        PriorityBand::P10 => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        PriorityBand::P20 => Style::default().fg(Color::Yellow),
        PriorityBand::P30 => Style::default().fg(Color::Green),
        PriorityBand::Other => Style::default().fg(Color::Gray),
    }
}
