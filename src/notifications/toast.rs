//! Toast model and its phase machine.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identifier of a toast, unique within one [`super::NotificationCenter`].
pub type ToastId = u64;

/// Kind of notification; selects the icon and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// Icon drawn next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIcon {
    /// Circle with a check mark
    CheckCircle,
    /// Circle with a cross
    CrossCircle,
}

impl ToastKind {
    pub fn icon(self) -> ToastIcon {
        match self {
            ToastKind::Success => ToastIcon::CheckCircle,
            ToastKind::Error => ToastIcon::CrossCircle,
        }
    }

    /// Class name the host styles the toast with.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Lifecycle of a toast node.
///
/// `Visible -> Closing -> Removed`, or `Visible -> Removed` on manual close or
/// replacement. `Removed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Closing,
    Removed,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
    phase: ToastPhase,
}

impl Toast {
    pub fn new(id: ToastId, message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            created_at: Utc::now(),
            phase: ToastPhase::Visible,
        }
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Start the exit transition. Returns `false` unless the toast was visible.
    pub fn begin_exit(&mut self) -> bool {
        if self.phase != ToastPhase::Visible {
            return false;
        }
        self.phase = ToastPhase::Closing;
        true
    }

    /// Mark the toast removed. Returns `false` if it already was.
    pub fn remove(&mut self) -> bool {
        if self.phase == ToastPhase::Removed {
            return false;
        }
        self.phase = ToastPhase::Removed;
        true
    }
}
