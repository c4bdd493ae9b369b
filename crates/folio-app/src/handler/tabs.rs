//! Experience/Education tab switcher

use folio_core::types::Tab;
use tracing::trace;

use crate::state::AppState;

use super::UpdateResult;

/// A tab control was activated. The raw `data-tab` token comes straight
/// from the control; unknown tokens are ignored.
pub fn handle_tab_pressed(state: &mut AppState, token: &str) -> UpdateResult {
    if !state.tabs_enabled() {
        return UpdateResult::none();
    }

    let Some(tab) = Tab::from_token(token) else {
        trace!(token, "ignoring unknown tab token");
        return UpdateResult::none();
    };

    state.tabs.selected = tab;
    UpdateResult::none()
}
