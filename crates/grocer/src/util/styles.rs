//! Common styling for lists, headers and completed items

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Highlight for the selected row
pub const SELECTED_COLOR: Color = Color::Yellow;

/// Help and placeholder text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Category headings
pub const HEADER_COLOR: Color = Color::Cyan;

/// Actions such as "create new list"
pub const ACTION_COLOR: Color = Color::Blue;

pub fn selected_style() -> Style {
    Style::default()
        .fg(SELECTED_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn completed_style() -> Style {
    Style::default()
        .fg(HELP_COLOR)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(HEADER_COLOR)
        .add_modifier(Modifier::BOLD)
}

/// Bordered block with a padded title
pub fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}
