//! PDF export handlers
//!
//! The export control drives a two-state machine `{Idle, Generating}`. The
//! conversion itself runs as a background task; every outcome (saved file,
//! missing library, conversion failure) returns the machine to Idle, which
//! is what re-enables the control and restores its label.

use folio_core::types::ExportPhase;
use tracing::{info, warn};

use crate::state::AppState;

use super::{Task, UpdateAction, UpdateResult};

/// Notice shown when the conversion library is absent from the page
pub const LIBRARY_MISSING: &str = "PDF library not available. Opening print dialog instead.";
/// Prompt offered when conversion started but failed
pub const FALLBACK_PROMPT: &str = "PDF generation failed. Would you like to use the browser's \
     print function instead? (You can save as PDF from there)";

pub fn handle_export_pressed(state: &mut AppState) -> UpdateResult {
    if !state.export_enabled() || state.export.phase.locks_control() {
        return UpdateResult::none();
    }
    state.export.phase = ExportPhase::Generating;
    UpdateResult::action(UpdateAction::SpawnTask(Task::ExportPdf))
}

pub fn handle_converter_missing(state: &mut AppState) -> UpdateResult {
    state.export.phase = ExportPhase::Idle;
    UpdateResult::actions(vec![
        UpdateAction::Alert {
            message: LIBRARY_MISSING.to_string(),
        },
        UpdateAction::Print,
    ])
}

pub fn handle_export_completed(state: &mut AppState) -> UpdateResult {
    info!("PDF generated successfully");
    state.export.phase = ExportPhase::Idle;
    UpdateResult::none()
}

pub fn handle_export_failed(state: &mut AppState, error: &str) -> UpdateResult {
    warn!(error, "PDF generation failed");
    state.export.phase = ExportPhase::Idle;
    UpdateResult::action(UpdateAction::ConfirmPrintFallback {
        message: FALLBACK_PROMPT.to_string(),
    })
}
