//! State → page synchronization (View in TEA pattern)
//!
//! `apply()` writes the current state onto the page surface after every
//! update. All writes are idempotent: re-applying an unchanged state leaves
//! the page untouched, which is what makes repeated open/close and stray
//! events flicker-free.

use folio_core::types::{FormField, SubmissionPhase, Tab};

use crate::page::{
    self, ACTIVE_CLASS, HIDDEN_CLASS, ICON_MENU_CLOSED, ICON_MENU_OPEN, STATUS_BASE_CLASS,
};
use crate::services::DomSurface;
use crate::state::AppState;

/// Label shown on the submit control while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";
/// Label shown on the export control while conversion is in progress
pub const GENERATING_LABEL: &str = "Generating PDF...";

/// Synchronize every controller's visible state onto the page.
pub fn apply(state: &AppState, dom: &mut impl DomSurface) {
    apply_menu(state, dom);
    apply_tabs(state, dom);
    apply_nav(state, dom);
    apply_form(state, dom);
    apply_export(state, dom);
}

fn apply_menu(state: &AppState, dom: &mut impl DomSurface) {
    let Some(menu) = &state.page.menu else {
        return;
    };

    if state.menu.open {
        dom.add_class(page::NAV_MENU, ACTIVE_CLASS);
        dom.set_attr(page::MENU_TOGGLE, "aria-expanded", "true");
    } else {
        dom.remove_class(page::NAV_MENU, ACTIVE_CLASS);
        dom.set_attr(page::MENU_TOGGLE, "aria-expanded", "false");
    }

    if let Some(icon) = &menu.icon {
        let glyph = if state.menu.open {
            ICON_MENU_OPEN
        } else {
            ICON_MENU_CLOSED
        };
        dom.set_attr(icon, "class", glyph);
    }
}

fn apply_tabs(state: &AppState, dom: &mut impl DomSurface) {
    if !state.tabs_enabled() {
        return;
    }

    for control in &state.page.tabs {
        if control.tab == state.tabs.selected {
            dom.add_class(&control.id, ACTIVE_CLASS);
        } else {
            dom.remove_class(&control.id, ACTIVE_CLASS);
        }
    }

    // Exactly one of the two lists is visible.
    for tab in [Tab::Experience, Tab::Education] {
        if tab == state.tabs.selected {
            dom.remove_class(tab.list_id(), HIDDEN_CLASS);
        } else {
            dom.add_class(tab.list_id(), HIDDEN_CLASS);
        }
    }
}

fn apply_nav(state: &AppState, dom: &mut impl DomSurface) {
    for link in &state.page.nav_links {
        if state.nav.current.as_deref() == Some(link.target.as_str()) {
            dom.add_class(&link.id, ACTIVE_CLASS);
        } else {
            dom.remove_class(&link.id, ACTIVE_CLASS);
        }
    }
}

fn apply_form(state: &AppState, dom: &mut impl DomSurface) {
    let Some(form) = &state.page.form else {
        return;
    };

    for field in FormField::ALL {
        let message = state.form.errors.get(&field).map(String::as_str);
        dom.set_text(field.error_id(), message.unwrap_or(""));
    }

    match &state.form.status {
        Some(status) => {
            dom.set_text(page::FORM_STATUS, &status.text);
            dom.set_attr(
                page::FORM_STATUS,
                "class",
                &format!("{} {}", STATUS_BASE_CLASS, status.tone.css_class()),
            );
        }
        None => {
            dom.set_text(page::FORM_STATUS, "");
            dom.set_attr(page::FORM_STATUS, "class", STATUS_BASE_CLASS);
        }
    }

    dom.set_visible(page::FORM_OK, state.form.confirmation_visible);

    let sending = state.form.phase == SubmissionPhase::Sending;
    dom.set_disabled(page::SUBMIT_BTN, sending);
    if sending {
        dom.set_text(page::SUBMIT_BTN, SENDING_LABEL);
    } else {
        dom.set_text(page::SUBMIT_BTN, &form.submit_label);
    }
}

fn apply_export(state: &AppState, dom: &mut impl DomSurface) {
    let Some(export) = &state.page.export else {
        return;
    };

    let generating = state.export.phase.locks_control();
    dom.set_disabled(page::DOWNLOAD_BTN, generating);
    if generating {
        dom.set_text(page::DOWNLOAD_BTN, GENERATING_LABEL);
    } else {
        dom.set_text(page::DOWNLOAD_BTN, &export.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageRegistry;
    use crate::services::MemoryDom;
    use crate::state::Status;
    use folio_core::types::ExportPhase;

    fn fresh() -> (AppState, MemoryDom) {
        let dom = MemoryDom::standard_page();
        let state = AppState::new(PageRegistry::discover(&dom));
        (state, dom)
    }

    #[test]
    fn test_menu_sync_keeps_aria_consistent() {
        let (mut state, mut dom) = fresh();

        state.menu.open = true;
        apply(&state, &mut dom);
        assert!(dom.has_class(page::NAV_MENU, ACTIVE_CLASS));
        assert_eq!(
            dom.attr(page::MENU_TOGGLE, "aria-expanded").as_deref(),
            Some("true")
        );
        assert_eq!(
            dom.attr(page::MENU_TOGGLE_ICON, "class").as_deref(),
            Some(ICON_MENU_OPEN)
        );

        state.menu.open = false;
        apply(&state, &mut dom);
        assert!(!dom.has_class(page::NAV_MENU, ACTIVE_CLASS));
        assert_eq!(
            dom.attr(page::MENU_TOGGLE, "aria-expanded").as_deref(),
            Some("false")
        );
        assert_eq!(
            dom.attr(page::MENU_TOGGLE_ICON, "class").as_deref(),
            Some(ICON_MENU_CLOSED)
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (mut state, mut dom) = fresh();
        state.menu.open = true;
        state.tabs.selected = Tab::Education;
        apply(&state, &mut dom);
        let snapshot = format!("{dom:?}");
        apply(&state, &mut dom);
        assert_eq!(format!("{dom:?}"), snapshot);
    }

    #[test]
    fn test_tab_sync_is_exclusive() {
        let (mut state, mut dom) = fresh();

        state.tabs.selected = Tab::Education;
        apply(&state, &mut dom);
        assert!(dom.has_class("segEducation", ACTIVE_CLASS));
        assert!(!dom.has_class("segExperience", ACTIVE_CLASS));
        assert!(dom.has_class("xp-tab", HIDDEN_CLASS));
        assert!(!dom.has_class("edu-tab", HIDDEN_CLASS));

        state.tabs.selected = Tab::Experience;
        apply(&state, &mut dom);
        assert!(dom.has_class("segExperience", ACTIVE_CLASS));
        assert!(!dom.has_class("segEducation", ACTIVE_CLASS));
        assert!(dom.has_class("edu-tab", HIDDEN_CLASS));
        assert!(!dom.has_class("xp-tab", HIDDEN_CLASS));
    }

    #[test]
    fn test_nav_sync_highlights_single_link() {
        let (mut state, mut dom) = fresh();

        state.nav.current = Some("about".to_string());
        apply(&state, &mut dom);
        assert!(dom.has_class("navAbout", ACTIVE_CLASS));
        assert!(!dom.has_class("navHero", ACTIVE_CLASS));

        // A section with no matching link clears every highlight.
        state.nav.current = Some("unlinked".to_string());
        apply(&state, &mut dom);
        for link in ["navHero", "navAbout", "navExperience", "navProjects", "navContact"] {
            assert!(!dom.has_class(link, ACTIVE_CLASS));
        }
    }

    #[test]
    fn test_form_sync_status_and_lock() {
        let (mut state, mut dom) = fresh();

        state.form.phase = SubmissionPhase::Sending;
        apply(&state, &mut dom);
        assert!(dom.is_disabled(page::SUBMIT_BTN));
        assert_eq!(dom.text(page::SUBMIT_BTN), SENDING_LABEL);

        state.form.phase = SubmissionPhase::Success;
        state.form.status = Some(Status::success("Message sent successfully!"));
        state.form.confirmation_visible = true;
        apply(&state, &mut dom);
        assert!(!dom.is_disabled(page::SUBMIT_BTN));
        assert_eq!(dom.text(page::SUBMIT_BTN), "Send Message");
        assert_eq!(
            dom.attr(page::FORM_STATUS, "class").as_deref(),
            Some("form-status success")
        );
        assert!(dom.is_visible(page::FORM_OK));
    }

    #[test]
    fn test_export_sync_label_and_lock() {
        let (mut state, mut dom) = fresh();

        state.export.phase = ExportPhase::Generating;
        apply(&state, &mut dom);
        assert!(dom.is_disabled(page::DOWNLOAD_BTN));
        assert_eq!(dom.text(page::DOWNLOAD_BTN), GENERATING_LABEL);

        state.export.phase = ExportPhase::Idle;
        apply(&state, &mut dom);
        assert!(!dom.is_disabled(page::DOWNLOAD_BTN));
        assert_eq!(dom.text(page::DOWNLOAD_BTN), "Download Page");
    }
}
