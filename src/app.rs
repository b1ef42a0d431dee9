//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_action_modifier;
use crate::state::{AppState, Form, FormButton, FormVariant, FormWarning};
use crate::template::{
    self, render_document, DirectorySink, DocumentSink, FileTemplateSource, TemplateSource,
    TemplateValues,
};
use crate::ui::layout::{screen_layout, FormTarget};
use crate::ui::toast_at;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where templates are read from
    source: Box<dyn TemplateSource>,
    /// Where rendered documents go
    sink: Box<dyn DocumentSink>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App reading and writing the configured locations
    pub fn new(config: &TuiConfig) -> Self {
        let source = FileTemplateSource::new(config.template_path());
        let sink = DirectorySink::new(config.output_dir());
        Self::with_backends(config.variant(), Box::new(source), Box::new(sink))
    }

    pub fn with_backends(
        variant: FormVariant,
        source: Box<dyn TemplateSource>,
        sink: Box<dyn DocumentSink>,
    ) -> Self {
        Self {
            state: AppState::new(variant),
            source,
            sink,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.toasts.prune_expired();
    }

    /// Whether the next frames animate and need fast redraws
    pub fn is_animating(&self) -> bool {
        self.state.toasts.is_animating()
    }

    pub fn template_location(&self) -> String {
        self.source.location()
    }

    pub fn output_location(&self) -> String {
        self.sink.location()
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.state.toasts.dismiss();
            return Ok(());
        }

        // AltGr arrives as Ctrl+Alt and types characters such as ą or ł
        let is_alt_gr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if is_action_modifier(key.modifiers) && !is_alt_gr {
            match key.code {
                KeyCode::Char('q') => self.quit = true,
                KeyCode::Char('s') if self.state.form.buttons().contains(&FormButton::Save) => {
                    self.activate(FormButton::Save).await;
                }
                KeyCode::Char('d') => self.activate(FormButton::Download).await,
                KeyCode::Char('l') => self.activate(FormButton::Clear).await,
                _ => {}
            }
            return Ok(());
        }

        let form = &mut self.state.form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter if form.is_buttons_row_active() => {
                let button = form.selected_button();
                self.activate(button).await;
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) && !is_alt_gr => {}
            KeyCode::Char(c) => {
                if !form.input_char(c) {
                    tracing::trace!("Ignored input {c:?} on field {}", form.active_field());
                }
            }
            KeyCode::Backspace => {
                form.backspace();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle pasted text (bracketed paste)
    pub fn handle_paste(&mut self, text: &str) {
        if !self.state.form.paste(text) {
            tracing::debug!("Paste of {} chars rejected", text.chars().count());
        }
    }

    /// Handle mouse clicks on toasts, fields and buttons
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        let Some((height, width)) = self.terminal_size else {
            return Ok(());
        };

        let area = Rect::new(0, 0, width, height);
        // Toasts float above the form
        if let Some(id) = toast_at(area, &self.state.toasts, mouse.column, mouse.row) {
            self.state.toasts.dismiss_id(id);
            return Ok(());
        }

        let layout = screen_layout(area, self.state.form.buttons().len());
        match layout.form.hit(mouse.column, mouse.row) {
            Some(FormTarget::Field(idx)) => self.state.form.set_active_field(idx),
            Some(FormTarget::Button(idx)) => {
                if let Some(button) = self.state.form.buttons().get(idx).copied() {
                    self.state.form.focus_button(button);
                    self.activate(button).await;
                }
            }
            None => {}
        }
        Ok(())
    }

    /// Run a button's action
    pub async fn activate(&mut self, button: FormButton) {
        match button {
            FormButton::Save => self.save(),
            FormButton::Download => self.download().await,
            FormButton::Clear => self.clear(),
        }
    }

    /// Mark the form as saved
    pub fn save(&mut self) {
        match self.state.form.save() {
            Ok(()) => {
                tracing::info!("Form saved");
                self.state
                    .toasts
                    .normal("Zapisano", "Dane zostały zapisane pomyślnie.");
            }
            Err(warning) => self.warn(warning),
        }
    }

    /// Reset all fields
    pub fn clear(&mut self) {
        self.state.form.clear();
        tracing::info!("Form cleared");
        self.state
            .toasts
            .normal("Wyczyszczono", "Formularz został wyczyszczony.");
    }

    /// Render the template with the current values and deliver it
    pub async fn download(&mut self) {
        if let Err(warning) = self.state.form.check_download() {
            self.warn(warning);
            return;
        }

        let values = self.state.form.template_values();
        match self.generate(&values).await {
            Ok(path) => {
                tracing::info!("Document written to {}", path.display());
                self.state.toasts.normal(
                    "Pobrano",
                    &format!("Dokument został pobrany pomyślnie.\n{}", path.display()),
                );
                self.state.last_download = Some(path);
            }
            Err(e) => {
                tracing::error!("Error generating document: {e}");
                self.state
                    .toasts
                    .destructive("Błąd", "Nie udało się wygenerować dokumentu.");
            }
        }
    }

    async fn generate(&self, values: &TemplateValues) -> template::Result<PathBuf> {
        let document = render_document(self.source.as_ref(), values).await?;
        self.sink.save(&document).await
    }

    fn warn(&mut self, warning: FormWarning) {
        tracing::debug!("Action refused: {warning:?}");
        self.state.toasts.destructive("Uwaga", warning.message());
    }
}
