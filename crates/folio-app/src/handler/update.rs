//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::AppState;

use super::{form, menu, nav, pdf, tabs, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or effects for the engine.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    debug!(?message, "dispatch");

    match message {
        Message::PageLoaded { fragment } => nav::handle_page_loaded(state, fragment),

        // ─────────────────────────────────────────────────────────
        // Mobile Menu
        // ─────────────────────────────────────────────────────────
        Message::MenuTogglePressed => menu::handle_toggle(state),
        Message::MenuLinkActivated => menu::handle_link_activated(state),
        Message::EscapePressed => menu::handle_escape(state),

        // ─────────────────────────────────────────────────────────
        // Tab Switcher
        // ─────────────────────────────────────────────────────────
        Message::TabPressed { token } => tabs::handle_tab_pressed(state, &token),

        // ─────────────────────────────────────────────────────────
        // Nav Highlighter
        // ─────────────────────────────────────────────────────────
        Message::SectionIntersected { section_id } => {
            nav::handle_section_intersected(state, section_id)
        }
        Message::AnchorClicked { target_id } => nav::handle_anchor_clicked(state, target_id),

        // ─────────────────────────────────────────────────────────
        // Contact Form
        // ─────────────────────────────────────────────────────────
        Message::FieldBlurred { field, value } => form::handle_field_blurred(state, field, &value),
        Message::SubmitPressed { values } => form::handle_submit_pressed(state, values),
        Message::SubmissionDelivered { status } => form::handle_submission_delivered(state, status),
        Message::SubmissionFailed { error } => form::handle_submission_failed(state, &error),

        // ─────────────────────────────────────────────────────────
        // PDF Export
        // ─────────────────────────────────────────────────────────
        Message::ExportPressed => pdf::handle_export_pressed(state),
        Message::ConverterMissing => pdf::handle_converter_missing(state),
        Message::ExportCompleted => pdf::handle_export_completed(state),
        Message::ExportFailed { error } => pdf::handle_export_failed(state, &error),
    }
}
