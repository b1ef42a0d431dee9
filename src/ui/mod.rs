//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;

pub use components::toast_at;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = layout::screen_layout(area, app.state.form.buttons().len());

    forms::draw_document_form(frame, &screen.form, app);
    layout::draw_status_bar(frame, screen.status_bar, app);

    // Notifications float above everything else
    if !app.state.toasts.is_empty() {
        components::render_toasts(frame, area, &app.state.toasts);
    }
}
