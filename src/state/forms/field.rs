//! Form field value objects

/// Maximum number of characters a text field accepts
pub const MAX_LENGTH: usize = 50;

/// Represents a single length-limited text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Key used for the template placeholder (`{{name}}`)
    pub name: String,
    pub label: String,
    value: String,
    max_length: usize,
}

impl FormField {
    /// Create a new empty text field with the default length limit
    pub fn text(name: &str, label: &str) -> Self {
        Self::with_max_length(name, label, MAX_LENGTH)
    }

    /// Create a new empty text field with a custom length limit
    pub fn with_max_length(name: &str, label: &str, max_length: usize) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            max_length,
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Current length in characters
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value. Values longer than the limit are rejected and
    /// leave the field untouched.
    ///
    /// Returns true if the value was stored.
    pub fn set_text(&mut self, value: &str) -> bool {
        if value.chars().count() > self.max_length {
            return false;
        }
        self.value = value.to_string();
        true
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) -> bool {
        if self.len() >= self.max_length {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Character counter shown next to the field, e.g. `12/50`
    pub fn counter(&self) -> String {
        format!("{}/{}", self.len(), self.max_length)
    }
}
