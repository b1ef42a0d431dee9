//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown in an empty field
const PLACEHOLDER: &str = "Wprowadź tekst...";

/// Draw a single-line form field with its character counter
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let value = if field.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(field.as_text(), Style::default().fg(Color::White))
    };
    let mut spans = vec![value];
    if is_active {
        // Cursor sits before the placeholder of an empty field
        let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));
        if field.is_empty() {
            spans.insert(0, cursor_span);
        } else {
            spans.push(cursor_span);
        }
    }

    let counter_style = if field.len() >= field.max_length() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .title_bottom(
            Line::from(Span::styled(format!(" {} ", field.counter()), counter_style))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw help text line
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
