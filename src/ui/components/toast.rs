//! Notification overlay

use crate::state::{Toast, ToastQueue, ToastVariant};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use uuid::Uuid;

/// Maximum width of a toast
const TOAST_WIDTH: u16 = 44;

/// Where a toast lands on screen, with its wrapped description
struct PlacedToast<'a> {
    toast: &'a Toast,
    area: Rect,
    lines: Vec<String>,
}

/// Stack visible toasts in the top-right corner of `area`. With `animate`
/// unset every toast is placed where it comes to rest.
fn place_toasts<'a>(
    area: Rect,
    toasts: &'a ToastQueue,
    animate: bool,
) -> Vec<PlacedToast<'a>> {
    let width = TOAST_WIDTH.min(area.width);
    let mut placed = Vec::new();
    if width < 5 {
        return placed;
    }

    let mut y = area.y;
    for toast in toasts.visible() {
        let lines = wrap_text(&toast.description, width.saturating_sub(4) as usize);
        let height = (lines.len() as u16 + 3).min(area.bottom().saturating_sub(y));
        if height < 3 {
            break;
        }

        // Slide in from the right edge
        let progress = if animate { toast.enter_progress() } else { 1.0 };
        let offset = ((1.0 - progress) * f32::from(width)) as u16;
        let x = area.right().saturating_sub(width) + offset.min(width);
        placed.push(PlacedToast {
            toast,
            area: Rect {
                x,
                y,
                width: area.right().saturating_sub(x),
                height,
            },
            lines,
        });
        y = y.saturating_add(height);
    }
    placed
}

/// Find the toast under a mouse position
pub fn toast_at(area: Rect, toasts: &ToastQueue, column: u16, row: u16) -> Option<Uuid> {
    let pos = Position::new(column, row);
    place_toasts(area, toasts, false)
        .into_iter()
        .find(|p| p.area.contains(pos))
        .map(|p| p.toast.id)
}

/// Render visible toasts stacked in the top-right corner
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    for placed in place_toasts(area, toasts, true) {
        if placed.area.width > 0 {
            render_toast(frame, placed);
        }
    }
}

fn render_toast(frame: &mut Frame, placed: PlacedToast) {
    let color = match placed.toast.variant {
        ToastVariant::Normal => Color::Cyan,
        ToastVariant::Destructive => Color::Red,
    };

    let mut content = vec![Line::from(Span::styled(
        placed.toast.title.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    content.extend(placed.lines.into_iter().map(Line::from));

    frame.render_widget(Clear, placed.area);
    frame.render_widget(
        Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        ),
        placed.area,
    );
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current_line.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("Dokument został pobrany /home/me/Downloads/dokument.docx", 24),
            vec!["Dokument został pobrany", "/home/me/Downloads/dokument.docx"]
        );
    }

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn test_toast_at_finds_shown_toast() {
        let mut queue = ToastQueue::default();
        assert_eq!(toast_at(screen(), &queue, 99, 1), None);

        let id = queue.normal("Zapisano", "Dane zostały zapisane pomyślnie.");
        let placed = place_toasts(screen(), &queue, false);
        assert_eq!(placed.len(), 1);
        let area = placed[0].area;
        assert_eq!(area.y, 0);
        assert_eq!(area.right(), 100);

        assert_eq!(toast_at(screen(), &queue, 99, 1), Some(id));
        assert_eq!(toast_at(screen(), &queue, 0, 1), None);
        assert_eq!(toast_at(screen(), &queue, 99, area.bottom()), None);
    }

    #[test]
    fn test_fresh_toast_starts_off_screen() {
        let mut queue = ToastQueue::default();
        queue.normal("Saved", "x");
        let placed = place_toasts(screen(), &queue, true);
        assert!(placed[0].area.x > screen().right() - TOAST_WIDTH);
    }

    #[test]
    fn test_no_toasts_on_tiny_screen() {
        let mut queue = ToastQueue::default();
        queue.normal("Saved", "x");
        assert!(place_toasts(Rect::new(0, 0, 4, 2), &queue, false).is_empty());
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_wrap_text_counts_characters() {
        assert_eq!(wrap_text("żółć żółć", 9), vec!["żółć żółć"]);
    }
}
