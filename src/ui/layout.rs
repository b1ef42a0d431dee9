//! Screen layout (form panel, status bar) and mouse hit-testing

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the form panel
pub const PANEL_WIDTH: u16 = 64;
/// Height of the form panel including borders
pub const PANEL_HEIGHT: u16 = 21;

/// Areas of the whole screen
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    pub form: FormLayout,
    pub status_bar: Rect,
}

/// Areas inside the centered form panel
#[derive(Debug, Clone)]
pub struct FormLayout {
    pub panel: Rect,
    pub header: Rect,
    pub fields: [Rect; 3],
    pub buttons: Vec<Rect>,
    pub banner: Rect,
    pub help: Rect,
}

/// Something clickable on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Field(usize),
    Button(usize),
}

/// Split the terminal into the form and the bottom status bar
pub fn screen_layout(area: Rect, button_count: usize) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        form: form_layout(chunks[0], button_count),
        status_bar: chunks[1],
    }
}

/// Center the form panel in `area` and lay out its rows
pub fn form_layout(area: Rect, button_count: usize) -> FormLayout {
    let width = area.width.min(PANEL_WIDTH);
    let height = area.height.min(PANEL_HEIGHT);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .vertical_margin(1)
        .constraints([
            Constraint::Length(2),             // Title + subtitle
            Constraint::Length(3),             // Field 1
            Constraint::Length(3),             // Field 2
            Constraint::Length(3),             // Field 3
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(3),             // Saved banner
            Constraint::Length(1),             // Help text
        ])
        .split(panel);

    let count = button_count.max(1);
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(rows[5])
        .to_vec();

    FormLayout {
        panel,
        header: rows[0],
        fields: [rows[1], rows[2], rows[3]],
        buttons,
        banner: rows[6],
        help: rows[7],
    }
}

impl FormLayout {
    /// Find the field or button under a mouse position
    pub fn hit(&self, column: u16, row: u16) -> Option<FormTarget> {
        let pos = Position::new(column, row);
        if let Some(idx) = self.fields.iter().position(|r| r.contains(pos)) {
            return Some(FormTarget::Field(idx));
        }
        self.buttons
            .iter()
            .position(|r| r.contains(pos))
            .map(FormTarget::Button)
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" szablon: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.template_location(), Style::default().fg(Color::Blue)),
        Span::raw(" | "),
        Span::styled("katalog: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.output_location(), Style::default().fg(Color::Blue)),
    ];

    if let Some(path) = &app.state.last_download {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("ostatni: {}", path.display()),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u16, height: u16) -> Rect {
        Rect::new(0, 0, width, height)
    }

    #[test]
    fn test_panel_is_centered() {
        let layout = form_layout(screen(100, 41), 3);
        assert_eq!(layout.panel, Rect::new(18, 10, PANEL_WIDTH, PANEL_HEIGHT));
    }

    #[test]
    fn test_panel_shrinks_on_small_terminal() {
        let layout = form_layout(screen(40, 10), 3);
        assert_eq!(layout.panel.width, 40);
        assert_eq!(layout.panel.height, 10);
    }

    #[test]
    fn test_status_bar_is_last_row() {
        let layout = screen_layout(screen(80, 30), 2);
        assert_eq!(layout.status_bar, Rect::new(0, 29, 80, 1));
    }

    #[test]
    fn test_one_button_rect_per_button() {
        assert_eq!(form_layout(screen(100, 40), 3).buttons.len(), 3);
        assert_eq!(form_layout(screen(100, 40), 2).buttons.len(), 2);
    }

    #[test]
    fn test_fields_stack_below_header() {
        let layout = form_layout(screen(100, 40), 3);
        assert_eq!(layout.fields[0].y, layout.header.y + 2);
        assert_eq!(layout.fields[1].y, layout.fields[0].y + 3);
        assert_eq!(layout.fields[2].y, layout.fields[1].y + 3);
    }

    #[test]
    fn test_hit_fields_and_buttons() {
        let layout = form_layout(screen(100, 40), 3);
        let field = layout.fields[1];
        assert_eq!(layout.hit(field.x + 1, field.y + 1), Some(FormTarget::Field(1)));

        let button = layout.buttons[2];
        assert_eq!(
            layout.hit(button.x + 1, button.y + 1),
            Some(FormTarget::Button(2))
        );
    }

    #[test]
    fn test_hit_outside_returns_none() {
        let layout = form_layout(screen(100, 40), 3);
        assert_eq!(layout.hit(0, 0), None);
        assert_eq!(layout.hit(layout.header.x, layout.header.y), None);
    }
}
