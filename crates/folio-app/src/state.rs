//! Application state (Model in TEA pattern)

use std::collections::BTreeMap;

use folio_core::types::{ExportPhase, FormField, FormValues, StatusTone, SubmissionPhase, Tab};

use crate::page::PageRegistry;

/// Mobile menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

/// Experience/Education tab state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    pub selected: Tab,
}

/// Scroll-driven nav highlighter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    /// Section currently highlighted in the nav, `None` before load seeding
    pub current: Option<String>,
}

/// One-line status under the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub tone: StatusTone,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Error,
        }
    }
}

/// Contact form state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub phase: SubmissionPhase,
    /// First surfaced error per field; absent key = clear slot
    pub errors: BTreeMap<FormField, String>,
    pub status: Option<Status>,
    pub confirmation_visible: bool,
    /// Values captured at submit time, held while the request is in flight
    pub pending: Option<FormValues>,
}

impl FormState {
    /// Clear status line and confirmation, as at the start of every submit.
    ///
    /// Keeps the §3 invariant: at most one of success/error status shown,
    /// and entering Sending clears both.
    pub fn reset_feedback(&mut self) {
        self.status = None;
        self.confirmation_visible = false;
    }

    pub fn set_field_error(&mut self, field: FormField, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// PDF export state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportState {
    pub phase: ExportPhase,
}

/// Complete page state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// What the page surface offered at load time
    pub page: PageRegistry,

    pub menu: MenuState,
    pub tabs: TabState,
    pub nav: NavState,
    pub form: FormState,
    pub export: ExportState,
}

impl AppState {
    pub fn new(page: PageRegistry) -> Self {
        let tabs = TabState {
            selected: page.initial_tab,
        };
        Self {
            page,
            tabs,
            ..Self::default()
        }
    }

    // Controller enablement mirrors registry presence.

    pub fn menu_enabled(&self) -> bool {
        self.page.menu.is_some()
    }

    pub fn tabs_enabled(&self) -> bool {
        !self.page.tabs.is_empty()
    }

    pub fn form_enabled(&self) -> bool {
        self.page.form.is_some()
    }

    pub fn export_enabled(&self) -> bool {
        self.page.export.is_some()
    }
}
