//! Active toast ownership and auto-dismiss timers.

use super::toast::{Toast, ToastId, ToastKind};
use crate::config::Config;
use crate::ui::NotificationSurface;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Delays driving the automatic removal of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    /// Time a toast stays fully visible
    pub dismiss_after: Duration,

    /// Length of the exit transition before the node is detached
    pub exit_transition: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            dismiss_after: Duration::from_millis(5000),
            exit_transition: Duration::from_millis(300),
        }
    }
}

impl NotificationTiming {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dismiss_after: config.dismiss_after(),
            exit_transition: config.exit_transition(),
        }
    }
}

#[derive(Debug, Default)]
struct CenterState {
    next_id: ToastId,
    active: Option<Toast>,
}

/// Owner of the single active toast.
///
/// Cheap to clone; clones share the same state. Auto-dismiss timers are tokio
/// tasks holding a clone, and every transition they attempt is checked against
/// the currently active toast id, so a timer that outlives its toast does
/// nothing.
#[derive(Clone)]
pub struct NotificationCenter {
    state: Arc<Mutex<CenterState>>,
    surface: Arc<dyn NotificationSurface>,
    timing: NotificationTiming,
}

impl NotificationCenter {
    pub fn new(surface: Arc<dyn NotificationSurface>, timing: NotificationTiming) -> Self {
        Self {
            state: Arc::new(Mutex::new(CenterState::default())),
            surface,
            timing,
        }
    }

    fn state(&self) -> MutexGuard<'_, CenterState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Show a toast, replacing whichever one is currently displayed.
    ///
    /// Schedules the automatic removal when called inside a tokio runtime.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let (replaced, toast) = {
            let mut state = self.state();
            let replaced = state.active.take().map(|mut old| {
                old.remove();
                old.id
            });

            state.next_id += 1;
            let toast = Toast::new(state.next_id, message, kind);
            state.active = Some(toast.clone());
            (replaced, toast)
        };

        if let Some(old_id) = replaced {
            tracing::debug!(toast = old_id, "Replacing active notification");
            self.surface.detach(old_id);
        }

        tracing::info!(toast = toast.id, kind = ?toast.kind, "{}", toast.message);
        self.surface.mount(&toast);
        self.schedule_auto_dismiss(toast.id);
        toast.id
    }

    /// Close a toast from its close control. Detaches immediately.
    ///
    /// Returns `false` when the toast is no longer active.
    pub fn close(&self, id: ToastId) -> bool {
        let removed = {
            let mut state = self.state();
            if state.active.as_ref().is_some_and(|toast| toast.id == id) {
                if let Some(mut toast) = state.active.take() {
                    toast.remove();
                }
                true
            } else {
                false
            }
        };

        if removed {
            tracing::debug!(toast = id, "Notification closed");
            self.surface.detach(id);
        }
        removed
    }

    /// Snapshot of the active toast, if any.
    pub fn active(&self) -> Option<Toast> {
        self.state().active.clone()
    }

    fn begin_exit(&self, id: ToastId) -> bool {
        let started = {
            let mut state = self.state();
            match state.active.as_mut() {
                Some(toast) if toast.id == id => toast.begin_exit(),
                _ => false,
            }
        };

        if started {
            self.surface.start_exit(id);
        }
        started
    }

    fn schedule_auto_dismiss(&self, id: ToastId) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(toast = id, "No async runtime; notification will not auto-dismiss");
            return;
        };

        let center = self.clone();
        handle.spawn(async move {
            tokio::time::sleep(center.timing.dismiss_after).await;
            if center.begin_exit(id) {
                tokio::time::sleep(center.timing.exit_transition).await;
                center.close(id);
            }
        });
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("timing", &self.timing)
            .field("active", &self.active().map(|t| t.id))
            .finish()
    }
}
