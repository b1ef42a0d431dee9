//! Application state definitions

use super::forms::{DocumentForm, FormVariant};
use super::toast::ToastQueue;
use std::path::PathBuf;

/// Everything the UI draws from
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: DocumentForm,
    pub toasts: ToastQueue,
    /// Where the last successful download was written
    pub last_download: Option<PathBuf>,
}

impl AppState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            form: DocumentForm::new(variant),
            ..Default::default()
        }
    }
}
