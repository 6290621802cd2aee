//! Submit control loading state.

use crate::ui::FormView;
use std::sync::Arc;

/// Label shown on the submit control while a submission is in flight.
pub const LOADING_LABEL: &str = "Sending...";

/// Holds the submit control in its loading state.
///
/// Engaging the guard disables the control and swaps in the loading label.
/// Dropping it restores the original label and re-enables the control, once,
/// whichever way the submission ended.
pub struct SubmitGuard {
    view: Arc<dyn FormView>,
    original_label: String,
}

impl SubmitGuard {
    pub fn engage(view: Arc<dyn FormView>, loading_label: &str) -> Self {
        let original_label = view.submit_label();
        view.set_submit_control(loading_label, false);
        Self {
            view,
            original_label,
        }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.view.set_submit_control(&self.original_label, true);
    }
}
