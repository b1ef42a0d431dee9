//! Form state management for the document form

use super::field::FormField;
use crate::template::TemplateValues;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Whether a separate save step gates the download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    /// Save must succeed before download is allowed
    #[default]
    SaveGated,
    /// Download is allowed whenever some field has text
    Direct,
}

impl FormVariant {
    /// Buttons shown on the button row, left to right
    pub fn buttons(&self) -> &'static [FormButton] {
        match self {
            Self::SaveGated => &[FormButton::Save, FormButton::Download, FormButton::Clear],
            Self::Direct => &[FormButton::Download, FormButton::Clear],
        }
    }
}

/// Actions available on the button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Save,
    Download,
    Clear,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Save => "SAVE",
            Self::Download => "DOWNLOAD",
            Self::Clear => "CLEAR",
        }
    }
}

/// A refused action. These are guarded preconditions, reported to the user
/// as warnings rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormWarning {
    /// All three fields are empty
    NoInput,
    /// Download requested before the data was saved
    NotSaved,
}

impl FormWarning {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoInput => "Wprowadź tekst w co najmniej jednym polu.",
            Self::NotSaved => "Zapisz dane przed pobraniem dokumentu.",
        }
    }
}

/// Placeholder names, in field order
pub const FIELD_NAMES: [&str; 3] = ["text-input-1", "text-input-2", "text-input-3"];

/// The three-field document form
#[derive(Debug, Clone)]
pub struct DocumentForm {
    pub fields: [FormField; 3],
    pub variant: FormVariant,
    saved: bool,
    pub active_field_index: usize,
    /// Index into `variant.buttons()` when the buttons row is active
    pub selected_button: usize,
}

impl DocumentForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            fields: [
                FormField::text(FIELD_NAMES[0], "Pole tekstowe 1"),
                FormField::text(FIELD_NAMES[1], "Pole tekstowe 2"),
                FormField::text(FIELD_NAMES[2], "Pole tekstowe 3"),
            ],
            variant,
            saved: false,
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Index of the buttons row in the focus order
    pub const BUTTONS_ROW: usize = 3;

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    pub fn buttons(&self) -> &'static [FormButton] {
        self.variant.buttons()
    }

    pub fn selected_button(&self) -> FormButton {
        let buttons = self.buttons();
        buttons[self.selected_button.min(buttons.len() - 1)]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % self.buttons().len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = self.buttons().len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Focus the buttons row with the given button selected
    pub fn focus_button(&mut self, button: FormButton) {
        if let Some(idx) = self.buttons().iter().position(|b| *b == button) {
            self.active_field_index = Self::BUTTONS_ROW;
            self.selected_button = idx;
        }
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Replace a field's value. Over-long values are silently ignored.
    /// Any accepted edit drops the saved flag.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let Some(field) = self.fields.iter_mut().find(|f| f.name == name) else {
            return false;
        };
        let accepted = field.set_text(value);
        if accepted {
            self.saved = false;
        }
        accepted
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) -> bool {
        let accepted = self.get_active_field_mut().is_some_and(|f| f.push_char(c));
        if accepted {
            self.saved = false;
        }
        accepted
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) -> bool {
        let accepted = self.get_active_field_mut().is_some_and(|f| f.pop_char());
        if accepted {
            self.saved = false;
        }
        accepted
    }

    /// Append pasted text to the active field as a single edit.
    /// Line breaks are dropped since the inputs are single-line.
    pub fn paste(&mut self, text: &str) -> bool {
        let Some(field) = self.get_field(self.active_field_index) else {
            return false;
        };
        let name = field.name.clone();
        let mut value = field.as_text().to_string();
        value.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        self.set_field(&name, &value)
    }

    pub fn is_all_empty(&self) -> bool {
        self.fields.iter().all(|f| f.is_empty())
    }

    /// Reset every field and the saved flag
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.saved = false;
    }

    /// Mark the form as saved, provided at least one field has text
    pub fn save(&mut self) -> Result<(), FormWarning> {
        if self.is_all_empty() {
            return Err(FormWarning::NoInput);
        }
        self.saved = true;
        Ok(())
    }

    /// Check whether a download may start
    pub fn check_download(&self) -> Result<(), FormWarning> {
        match self.variant {
            FormVariant::SaveGated if !self.saved => Err(FormWarning::NotSaved),
            FormVariant::Direct if self.is_all_empty() => Err(FormWarning::NoInput),
            _ => Ok(()),
        }
    }

    /// Whether the download button is drawn enabled
    pub fn is_download_enabled(&self) -> bool {
        self.check_download().is_ok()
    }

    /// Values keyed by placeholder name
    pub fn template_values(&self) -> TemplateValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.as_text().to_string()))
            .collect()
    }
}

impl Default for DocumentForm {
    fn default() -> Self {
        Self::new(FormVariant::default())
    }
}

impl Form for DocumentForm {
    fn field_count(&self) -> usize {
        4 // three text fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
