//! Contact form handlers
//!
//! Field-level validation runs on blur; submit validates the whole form and
//! only then starts the network round trip. Validation failures never reach
//! the transport. Terminal transitions (Success/Error) unlock the submit
//! control again; the view derives the lock from the phase, so the control
//! can never stay stuck disabled.

use folio_core::types::{FormField, FormValues, SubmissionPhase};
use folio_core::validate;
use tracing::{info, warn};

use crate::state::{AppState, Status};

use super::{Task, UpdateAction, UpdateResult};

/// Summary status shown when submit-time validation fails
pub const SUMMARY_ERROR: &str = "Please fix the errors above before submitting.";
/// Status shown when the submission was delivered and acknowledged
pub const SENT_OK: &str = "Message sent successfully!";
/// Status shown when the request could not be sent or received
pub const NETWORK_ERROR: &str = "Network error. Please try again later.";
/// Status shown when the server answered with a non-2xx status
pub const SERVER_ERROR: &str = "Server error. Please try again later.";

pub fn handle_field_blurred(state: &mut AppState, field: FormField, value: &str) -> UpdateResult {
    if !state.form_enabled() {
        return UpdateResult::none();
    }
    state
        .form
        .set_field_error(field, validate::first_error(field, value));
    UpdateResult::none()
}

pub fn handle_submit_pressed(state: &mut AppState, values: FormValues) -> UpdateResult {
    let Some(endpoint) = state.page.form.as_ref().map(|f| f.endpoint.clone()) else {
        return UpdateResult::none();
    };
    if state.form.phase.locks_submit() {
        // The control is disabled while a request is in flight; a stray
        // repeat activation must not start a second one.
        return UpdateResult::none();
    }

    state.form.phase = SubmissionPhase::Validating;
    state.form.reset_feedback();

    for (field, errors) in validate::validate_values(&values) {
        state
            .form
            .set_field_error(field, errors.into_iter().next());
    }

    if state.form.has_errors() {
        state.form.phase = SubmissionPhase::Error;
        state.form.status = Some(Status::error(SUMMARY_ERROR));
        return UpdateResult::none();
    }

    state.form.phase = SubmissionPhase::Sending;
    state.form.pending = Some(values.clone());
    UpdateResult::action(UpdateAction::SpawnTask(Task::SubmitForm {
        endpoint,
        values,
    }))
}

pub fn handle_submission_delivered(state: &mut AppState, status: u16) -> UpdateResult {
    if state.form.phase != SubmissionPhase::Sending {
        return UpdateResult::none();
    }
    state.form.pending = None;

    if (200..300).contains(&status) {
        info!(status, "contact form delivered");
        state.form.phase = SubmissionPhase::Success;
        state.form.confirmation_visible = true;
        state.form.status = Some(Status::success(SENT_OK));
        state.form.errors.clear();
        return UpdateResult::action(UpdateAction::ResetFormFields);
    }

    warn!(status, "contact form rejected by server");
    state.form.phase = SubmissionPhase::Error;
    state.form.status = Some(Status::error(SERVER_ERROR));
    UpdateResult::none()
}

pub fn handle_submission_failed(state: &mut AppState, error: &str) -> UpdateResult {
    if state.form.phase != SubmissionPhase::Sending {
        return UpdateResult::none();
    }
    warn!(error, "contact form transport failed");
    state.form.pending = None;
    state.form.phase = SubmissionPhase::Error;
    state.form.status = Some(Status::error(NETWORK_ERROR));
    UpdateResult::none()
}
