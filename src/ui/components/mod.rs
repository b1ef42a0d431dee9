//! Reusable UI components

mod button;
mod toast;

pub use button::{render_button, ButtonState, BUTTON_HEIGHT};
pub use toast::{render_toasts, toast_at};
