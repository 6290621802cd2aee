//! Host UI boundary.
//!
//! The controller never touches markup. It talks to the host through the traits
//! in [`traits`]; a console host is provided for headless use.

pub mod console;
mod error_display;
mod submit_control;
mod traits;

pub use console::{ConsoleForm, ConsoleToasts, TracingAnalytics};
pub use error_display::ErrorDisplay;
pub use submit_control::{SubmitGuard, LOADING_LABEL};
pub use traits::{AnalyticsEvent, AnalyticsSink, FormView, NotificationSurface};
