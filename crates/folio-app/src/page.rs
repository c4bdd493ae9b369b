//! The page contract: element ids the markup ships with, and the registry
//! of elements discovered at boot.
//!
//! Every controller is wired against ids found here. Discovery runs once per
//! page load; a controller whose required elements are absent stays
//! unregistered and processes no events.

use folio_core::prelude::*;
use folio_core::types::Tab;

use crate::services::DomSurface;

// ─────────────────────────────────────────────────────────────────────────────
// Element ids
// ─────────────────────────────────────────────────────────────────────────────

/// Mobile menu toggle control
pub const MENU_TOGGLE: &str = "mobileMenuToggle";
/// Mobile navigation container
pub const NAV_MENU: &str = "navMenu";
/// Icon glyph inside the toggle control
pub const MENU_TOGGLE_ICON: &str = "menuToggleIcon";
/// Contact form element
pub const CONTACT_FORM: &str = "contactForm";
/// Persistent confirmation element shown after a delivered submission
pub const FORM_OK: &str = "formOk";
/// One-line status element under the form
pub const FORM_STATUS: &str = "formStatus";
/// Submit control
pub const SUBMIT_BTN: &str = "submitBtn";
/// PDF export control
pub const DOWNLOAD_BTN: &str = "downloadPageBtn";
/// Footer element that receives the current year
pub const FOOTER_YEAR: &str = "year";

/// Landing section used when the URL carries no fragment
pub const DEFAULT_SECTION: &str = "hero";

// Class and attribute vocabulary
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const STATUS_BASE_CLASS: &str = "form-status";
pub const TAB_ATTR: &str = "data-tab";
pub const ICON_MENU_OPEN: &str = "fas fa-times";
pub const ICON_MENU_CLOSED: &str = "fas fa-bars";

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Elements backing the mobile menu controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuElements {
    /// First link inside the menu, focused when the menu opens
    pub first_link: Option<String>,
    /// Icon element inside the toggle, absent on icon-less markup
    pub icon: Option<String>,
}

/// A nav link and the section id it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub target: String,
}

/// A tab control and the list it reveals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabControl {
    pub id: String,
    pub tab: Tab,
}

/// Submission endpoint read from the form's own attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEndpoint {
    pub action: String,
    pub method: String,
}

/// Elements backing the contact form controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormElements {
    pub endpoint: FormEndpoint,
    /// Submit label captured at discovery, restored after Sending
    pub submit_label: String,
}

/// Elements backing the PDF export controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportElements {
    /// Export label captured at discovery, restored after Generating
    pub label: String,
}

/// Everything the controllers learned about the page at load time.
///
/// `None` / empty entries mean the matching controller is disabled for the
/// lifetime of this page view.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pub menu: Option<MenuElements>,
    pub nav_links: Vec<NavLink>,
    pub sections: Vec<String>,
    pub tabs: Vec<TabControl>,
    /// Tab carrying the active style in the shipped markup
    pub initial_tab: Tab,
    pub form: Option<FormElements>,
    pub export: Option<ExportElements>,
    pub footer_year: bool,
}

impl PageRegistry {
    /// Inspect the page surface once and record what each controller needs.
    pub fn discover(dom: &impl DomSurface) -> Self {
        let menu = if dom.contains(MENU_TOGGLE) && dom.contains(NAV_MENU) {
            let anchors = dom.anchors_in(NAV_MENU);
            Some(MenuElements {
                first_link: anchors.first().map(|a| a.id.clone()),
                icon: dom.contains(MENU_TOGGLE_ICON).then(|| MENU_TOGGLE_ICON.to_string()),
            })
        } else {
            debug!("menu toggle or container missing, menu controller disabled");
            None
        };

        let nav_links = dom
            .anchors_in(NAV_MENU)
            .into_iter()
            .filter_map(|a| {
                a.target.map(|target| NavLink {
                    id: a.id,
                    target,
                })
            })
            .collect();

        let sections = dom.elements_by_tag("section");

        let mut initial_tab = Tab::default();
        let tabs: Vec<TabControl> = dom
            .elements_with_attr(TAB_ATTR)
            .into_iter()
            .filter_map(|id| {
                let token = dom.attr(&id, TAB_ATTR)?;
                let tab = Tab::from_token(&token)?;
                if dom.has_class(&id, ACTIVE_CLASS) {
                    initial_tab = tab;
                }
                Some(TabControl { id, tab })
            })
            .collect();

        let form = if dom.contains(CONTACT_FORM)
            && dom.contains(SUBMIT_BTN)
            && dom.contains(FORM_STATUS)
            && dom.contains(FORM_OK)
        {
            Some(FormElements {
                endpoint: FormEndpoint {
                    action: dom.attr(CONTACT_FORM, "action").unwrap_or_default(),
                    method: dom
                        .attr(CONTACT_FORM, "method")
                        .unwrap_or_else(|| "post".to_string()),
                },
                submit_label: dom.text(SUBMIT_BTN),
            })
        } else {
            debug!("contact form elements missing, form controller disabled");
            None
        };

        let export = dom.contains(DOWNLOAD_BTN).then(|| ExportElements {
            label: dom.text(DOWNLOAD_BTN),
        });

        Self {
            menu,
            nav_links,
            sections,
            tabs,
            initial_tab,
            form,
            export,
            footer_year: dom.contains(FOOTER_YEAR),
        }
    }

    /// Whether `id` is a section the highlighter may scroll to
    pub fn is_scroll_target(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    /// Nav link targeting the given section, if the markup has one
    pub fn link_for(&self, section_id: &str) -> Option<&NavLink> {
        self.nav_links.iter().find(|l| l.target == section_id)
    }
}
