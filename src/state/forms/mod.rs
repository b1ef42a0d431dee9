//! Form domain layer
//!
//! Type-safe, length-limited field handling for the document form.

mod field;
mod form_state;

pub use field::{FormField, MAX_LENGTH};
pub use form_state::{DocumentForm, Form, FormButton, FormVariant, FormWarning};
