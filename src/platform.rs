//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier accepted alongside Ctrl for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for form help text
#[cfg(target_os = "macos")]
pub const SAVE_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Download shortcut display
#[cfg(target_os = "macos")]
pub const DOWNLOAD_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const DOWNLOAD_SHORTCUT: &str = "Ctrl+D";

/// Clear shortcut display
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "Ctrl+L";

/// Whether a key carries a shortcut modifier. Ctrl is accepted everywhere.
pub fn is_action_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(ACTION_MODIFIER)
}
