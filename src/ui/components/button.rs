//! Action buttons of the form

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    /// Focused on the buttons row
    Selected,
    /// Visible but refuses activation
    Disabled,
}

impl ButtonState {
    fn border_style(self) -> Style {
        match self {
            Self::Selected => Style::default().fg(Color::Cyan),
            Self::Idle | Self::Disabled => Style::default().fg(Color::DarkGray),
        }
    }

    fn label_style(self) -> Style {
        match self {
            Self::Idle => Style::default(),
            Self::Selected => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Self::Disabled => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        }
    }
}

/// Render a bordered button with its keyboard shortcut in the bottom border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    shortcut: &str,
    state: ButtonState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(state.border_style())
        .title_bottom(
            Line::from(Span::styled(
                format!(" {shortcut} "),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        );

    let paragraph = Paragraph::new(label)
        .style(state.label_style())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
