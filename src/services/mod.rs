//! Application service layer.
//!
//! Services hold the form's behavior and talk to the outside world only through
//! the view, submitter and notification seams they are constructed with.

mod contact_form;

pub use contact_form::{
    ContactFormController, SubmissionOutcome, SubmissionState, GENERIC_FAILURE_MESSAGE,
    NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
