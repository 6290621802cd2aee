//! Notification toasts.
//!
//! At most one toast is shown at a time. Each toast closes itself after a
//! fixed delay (an exit transition followed by detaching the node), and can be
//! closed earlier from its close control. Both paths go through the same
//! idempotent transition, so whichever fires second is a no-op.

mod center;
mod toast;

pub use center::{NotificationCenter, NotificationTiming};
pub use toast::{Toast, ToastIcon, ToastId, ToastKind, ToastPhase};
