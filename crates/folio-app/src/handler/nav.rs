//! Scroll-driven nav highlighter and anchor click handlers
//!
//! The viewport observer reports sections as they become current; direct
//! anchor clicks win immediately and the observer stays eventually
//! consistent behind them. The observer path is the only writer of the URL
//! fragment.

use tracing::trace;

use crate::page::DEFAULT_SECTION;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Seed the highlighter before any scroll happens: the load-time fragment
/// wins when present and non-empty, else the landing section.
pub fn handle_page_loaded(state: &mut AppState, fragment: Option<String>) -> UpdateResult {
    let id = fragment
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_SECTION.to_string());
    state.nav.current = Some(id);
    UpdateResult::none()
}

/// The observer reported a section current: highlight it and mirror the id
/// into the URL fragment (replace, no history entry, no scroll).
pub fn handle_section_intersected(state: &mut AppState, section_id: String) -> UpdateResult {
    state.nav.current = Some(section_id.clone());
    UpdateResult::action(UpdateAction::ReplaceFragment { id: section_id })
}

/// A direct in-page anchor click: smooth-scroll to the target and set it
/// current immediately instead of waiting for the observer to fire.
pub fn handle_anchor_clicked(state: &mut AppState, target_id: String) -> UpdateResult {
    if !state.page.is_scroll_target(&target_id) {
        trace!(target_id, "anchor target not on page, keeping default navigation");
        return UpdateResult::none();
    }

    state.nav.current = Some(target_id.clone());
    UpdateResult::action(UpdateAction::ScrollIntoView { id: target_id })
}
