//! Document form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, DOWNLOAD_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{FormButton, FormVariant};
use crate::ui::components::{render_button, ButtonState};
use crate::ui::layout::FormLayout;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the document form into its precomputed layout
pub fn draw_document_form(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let form = &app.state.form;

    frame.render_widget(Clear, layout.panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, layout.panel);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Generator dokumentów",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Wypełnij pola i pobierz dokument",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, layout.header);

    for (idx, area) in layout.fields.iter().enumerate() {
        draw_field(
            frame,
            *area,
            &form.fields[idx],
            form.active_field_index == idx,
        );
    }

    for (idx, (button, area)) in form.buttons().iter().zip(&layout.buttons).enumerate() {
        let state = if *button == FormButton::Download && !form.is_download_enabled() {
            ButtonState::Disabled
        } else if form.is_buttons_row_active() && form.selected_button == idx {
            ButtonState::Selected
        } else {
            ButtonState::Idle
        };
        render_button(frame, *area, button.label(), shortcut(*button), state);
    }

    if form.variant == FormVariant::SaveGated && form.is_saved() {
        let banner = Paragraph::new("✓ Dane zapisane - możesz pobrać dokument")
            .style(Style::default().fg(Color::Green))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
        frame.render_widget(banner, layout.banner);
    }

    draw_help_text(
        frame,
        layout.help,
        &[
            ("Tab", "dalej"),
            ("Enter", "wybierz"),
            ("Esc", "zamknij"),
            ("Ctrl+Q", "wyjście"),
        ],
    );
}

fn shortcut(button: FormButton) -> &'static str {
    match button {
        FormButton::Save => SAVE_SHORTCUT,
        FormButton::Download => DOWNLOAD_SHORTCUT,
        FormButton::Clear => CLEAR_SHORTCUT,
    }
}
