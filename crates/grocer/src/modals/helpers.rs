//! Drawing pieces shared by every modal.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

/// Split `value` around the cursor (a char index) into the text before it,
/// the char under it, and the rest. Past the end, the cursor is a blank cell.
fn split_at_cursor(value: &str, cursor: usize) -> (String, String, String) {
    let mut chars = value.chars();
    let before: String = chars.by_ref().take(cursor).collect();
    let at = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    (before, at, chars.collect())
}

/// A single input line with a block cursor
pub fn render_cursor_line(value: &str, cursor: usize, prefix: &str) -> Line<'static> {
    let (before, at, after) = split_at_cursor(value, cursor);
    Line::from(vec![
        Span::raw(format!("{prefix}{before}")),
        Span::styled(at, Style::default().bg(Color::White).fg(Color::Black)),
        Span::raw(after),
    ])
}

/// Window of an input value that fits the box, with the cursor re-based onto it
#[derive(Debug, PartialEq, Eq)]
pub struct ScrolledView {
    pub display_value: String,
    pub cursor_pos: usize,
}

/// Keep the cursor in view when `value` is wider than `max_width`.
/// Two columns are reserved for the cursor cell and padding.
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let visible = max_width.saturating_sub(2);
    let len = value.chars().count();
    if len <= visible {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let start = cursor_pos
        .saturating_sub(visible / 2)
        .min(len - visible);
    ScrolledView {
        display_value: value.chars().skip(start).take(visible).collect(),
        cursor_pos: cursor_pos - start,
    }
}

/// Clear a centered box, draw its border and title, and lay out `N` rows inside
pub fn render_modal_frame<const N: usize>(
    frame: &mut Frame,
    title: &str,
    (width, height): (u16, u16),
    border_color: Color,
    rows: [Constraint; N],
) -> [Rect; N] {
    let area = centered_rect(width, height, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    Layout::vertical(rows).areas(inner)
}

/// Row of `[key] action` hints at the bottom of a modal
#[derive(Default)]
pub struct HelpText {
    spans: Vec<Span<'static>>,
}

impl HelpText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: &'static str, color: Color, desc: &'static str) -> Self {
        if !self.spans.is_empty() {
            self.spans.push(Span::raw("  "));
        }
        self.spans.push(Span::styled(key, Style::default().fg(color)));
        self.spans.push(Span::raw(" "));
        self.spans.push(Span::raw(desc));
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(Line::from(self.spans))
    }
}
