//! Mobile menu handlers
//!
//! Two-state machine `{closed, open}`. Opening moves focus to the first
//! menu link so the just-revealed menu is reachable by keyboard; closing
//! via Escape returns focus to the toggle. Closing an already-closed menu
//! is a no-op.

use crate::page::MENU_TOGGLE;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_toggle(state: &mut AppState) -> UpdateResult {
    let Some(menu) = &state.page.menu else {
        return UpdateResult::none();
    };

    if state.menu.open {
        state.menu.open = false;
        return UpdateResult::none();
    }

    state.menu.open = true;
    match &menu.first_link {
        Some(link) => UpdateResult::action(UpdateAction::Focus { id: link.clone() }),
        None => UpdateResult::none(),
    }
}

pub fn handle_link_activated(state: &mut AppState) -> UpdateResult {
    if state.page.menu.is_none() || !state.menu.open {
        return UpdateResult::none();
    }
    // Close without forcing focus; the activated link keeps it.
    state.menu.open = false;
    UpdateResult::none()
}

pub fn handle_escape(state: &mut AppState) -> UpdateResult {
    // Escape only ever closes.
    if state.page.menu.is_none() || !state.menu.open {
        return UpdateResult::none();
    }
    state.menu.open = false;
    UpdateResult::action(UpdateAction::Focus {
        id: MENU_TOGGLE.to_string(),
    })
}
