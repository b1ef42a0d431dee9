//! Transient notifications shown over the form

use std::time::{Duration, Instant};
use uuid::Uuid;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Normal,
    Destructive,
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    /// When the toast was shown
    pub shown_at: Instant,
}

impl Toast {
    /// How long a toast stays on screen
    pub const DURATION: Duration = Duration::from_secs(5);
    /// Slide-in animation length
    const ENTER_DURATION: Duration = Duration::from_millis(200);

    pub fn new(title: &str, description: &str, variant: ToastVariant) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            variant,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::DURATION
    }

    /// Slide-in progress from 0.0 (just shown) to 1.0 (settled)
    pub fn enter_progress(&self) -> f32 {
        let elapsed = self.shown_at.elapsed().as_secs_f32();
        let progress = (elapsed / Self::ENTER_DURATION.as_secs_f32()).min(1.0);
        simple_easing::cubic_out(progress)
    }

    pub fn is_animating(&self) -> bool {
        self.shown_at.elapsed() < Self::ENTER_DURATION
    }
}

/// Notification queue. Only the newest `limit` toasts are kept; with the
/// default limit of one a new toast replaces the visible one.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    limit: usize,
}

impl ToastQueue {
    pub const DEFAULT_LIMIT: usize = 1;

    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Show a toast, evicting the oldest ones past the limit
    pub fn push(&mut self, toast: Toast) -> Uuid {
        let id = toast.id;
        self.toasts.insert(0, toast);
        self.toasts.truncate(self.limit);
        id
    }

    pub fn normal(&mut self, title: &str, description: &str) -> Uuid {
        self.push(Toast::new(title, description, ToastVariant::Normal))
    }

    pub fn destructive(&mut self, title: &str, description: &str) -> Uuid {
        self.push(Toast::new(title, description, ToastVariant::Destructive))
    }

    /// Dismiss the newest toast
    pub fn dismiss(&mut self) -> Option<Toast> {
        if self.toasts.is_empty() {
            None
        } else {
            Some(self.toasts.remove(0))
        }
    }

    pub fn dismiss_id(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts whose display time is over
    pub fn prune_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Toasts newest first
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_animating(&self) -> bool {
        self.toasts.iter().any(Toast::is_animating)
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }
}
