//! The page surface the controllers run against
//!
//! [`DomSurface`] is the minimal interface the runtime needs from a page:
//! element lookup, class and attribute mutation, focus, smooth scrolling,
//! fragment replacement, and the user-prompt/print facilities. A binding to
//! a real browser implements this trait; [`MemoryDom`] is the in-memory
//! implementation used for headless operation and tests.
//!
//! Operations addressing an element that is not on the page are silent
//! no-ops; reads return empty defaults. Controllers degrade instead of
//! failing.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// An anchor element and the fragment target parsed from its `href`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRef {
    pub id: String,
    /// `Some("about")` for `href="#about"`, `None` for external links
    pub target: Option<String>,
}

/// Minimal UI surface the controllers read and write
pub trait DomSurface {
    // Lookup
    fn contains(&self, id: &str) -> bool;
    /// Ids of elements with the given tag, in document order
    fn elements_by_tag(&self, tag: &str) -> Vec<String>;
    /// Ids of elements carrying the given attribute, in document order
    fn elements_with_attr(&self, attr: &str) -> Vec<String>;
    /// Anchors nested under a container, in document order
    fn anchors_in(&self, container_id: &str) -> Vec<AnchorRef>;

    // Class list
    fn add_class(&mut self, id: &str, class: &str);
    fn remove_class(&mut self, id: &str, class: &str);
    fn has_class(&self, id: &str, class: &str) -> bool;

    // Attributes, text, input values
    fn set_attr(&mut self, id: &str, name: &str, value: &str);
    fn attr(&self, id: &str, name: &str) -> Option<String>;
    fn set_text(&mut self, id: &str, text: &str);
    fn text(&self, id: &str) -> String;
    fn set_value(&mut self, id: &str, value: &str);
    fn value(&self, id: &str) -> String;
    fn set_disabled(&mut self, id: &str, disabled: bool);
    fn is_disabled(&self, id: &str) -> bool;
    fn set_visible(&mut self, id: &str, visible: bool);
    fn is_visible(&self, id: &str) -> bool;

    // Focus and scrolling
    fn focus(&mut self, id: &str);
    fn focused(&self) -> Option<String>;
    fn scroll_into_view(&mut self, id: &str);

    // Navigation
    fn fragment(&self) -> Option<String>;
    /// Replace the URL fragment without adding a history entry and without
    /// scrolling.
    fn replace_fragment(&mut self, fragment: &str);

    // Browser facilities
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
    fn print(&mut self);
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory implementation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct ElementState {
    tag: String,
    parent: Option<String>,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    visible: bool,
}

/// In-memory page surface.
///
/// Holds a flat element table with parent links, plus recorders for the
/// side effects a browser would perform (scrolls, prompts, printing,
/// history). Tests script the confirm answer and read the recorders back.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    order: Vec<String>,
    elements: HashMap<String, ElementState>,
    focused: Option<String>,
    fragment: Option<String>,
    history_entries: usize,
    replaced_fragments: Vec<String>,
    scrolled: Vec<String>,
    alerts: Vec<String>,
    confirms: Vec<String>,
    confirm_answer: bool,
    print_count: usize,
}

impl MemoryDom {
    /// Register an element. Later writes address it by id.
    pub fn insert(&mut self, id: &str) -> &mut Self {
        self.insert_tagged(id, "div", None)
    }

    /// Register an element with a tag and optional parent.
    pub fn insert_tagged(&mut self, id: &str, tag: &str, parent: Option<&str>) -> &mut Self {
        if !self.elements.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.elements.insert(
            id.to_string(),
            ElementState {
                tag: tag.to_string(),
                parent: parent.map(str::to_string),
                visible: true,
                ..ElementState::default()
            },
        );
        self
    }

    /// Seed the fragment the page was loaded with (no history effect).
    pub fn set_initial_fragment(&mut self, fragment: &str) {
        self.fragment = Some(fragment.to_string());
    }

    /// Script the answer returned by [`DomSurface::confirm`].
    pub fn set_confirm_answer(&mut self, answer: bool) {
        self.confirm_answer = answer;
    }

    // Recorder access for assertions

    pub fn scrolled(&self) -> &[String] {
        &self.scrolled
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn confirms(&self) -> &[String] {
        &self.confirms
    }

    pub fn print_count(&self) -> usize {
        self.print_count
    }

    pub fn history_entries(&self) -> usize {
        self.history_entries
    }

    pub fn replaced_fragments(&self) -> &[String] {
        &self.replaced_fragments
    }

    fn get(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut ElementState> {
        self.elements.get_mut(id)
    }

    /// The portfolio page as the markup ships it: five sections with nav
    /// links, the experience tab pair, the contact form, the export button,
    /// and the footer year slot.
    pub fn standard_page() -> Self {
        use crate::page;

        let mut dom = Self::default();

        // Mobile menu
        dom.insert(page::MENU_TOGGLE);
        dom.set_attr(page::MENU_TOGGLE, "aria-expanded", "false");
        dom.insert_tagged(page::MENU_TOGGLE_ICON, "i", Some(page::MENU_TOGGLE));
        dom.set_attr(page::MENU_TOGGLE_ICON, "class", page::ICON_MENU_CLOSED);
        dom.insert(page::NAV_MENU);

        // Sections and the nav links targeting them
        for (link_id, section_id) in [
            ("navHero", "hero"),
            ("navAbout", "about"),
            ("navExperience", "experience"),
            ("navProjects", "projects"),
            ("navContact", "contact"),
        ] {
            dom.insert_tagged(section_id, "section", None);
            dom.insert_tagged(link_id, "a", Some(page::NAV_MENU));
            dom.set_attr(link_id, "href", &format!("#{section_id}"));
        }

        // Experience/Education tab pair; Experience ships active and visible
        dom.insert("segExperience");
        dom.set_attr("segExperience", page::TAB_ATTR, "xp");
        dom.add_class("segExperience", page::ACTIVE_CLASS);
        dom.insert("segEducation");
        dom.set_attr("segEducation", page::TAB_ATTR, "edu");
        dom.insert("xp-tab");
        dom.insert("edu-tab");
        dom.add_class("edu-tab", page::HIDDEN_CLASS);

        // Contact form
        dom.insert_tagged(page::CONTACT_FORM, "form", None);
        dom.set_attr(page::CONTACT_FORM, "action", "https://formspree.io/f/portfolio");
        dom.set_attr(page::CONTACT_FORM, "method", "post");
        for field in folio_core::types::FormField::ALL {
            dom.insert_tagged(field.input_id(), "input", Some(page::CONTACT_FORM));
            dom.insert_tagged(field.error_id(), "span", Some(page::CONTACT_FORM));
        }
        dom.insert_tagged(page::SUBMIT_BTN, "button", Some(page::CONTACT_FORM));
        dom.set_text(page::SUBMIT_BTN, "Send Message");
        dom.insert(page::FORM_STATUS);
        dom.set_attr(page::FORM_STATUS, "class", page::STATUS_BASE_CLASS);
        dom.insert(page::FORM_OK);
        dom.set_visible(page::FORM_OK, false);

        // PDF export and footer year
        dom.insert_tagged(page::DOWNLOAD_BTN, "button", None);
        dom.set_text(page::DOWNLOAD_BTN, "Download Page");
        dom.insert(page::FOOTER_YEAR);

        dom
    }
}

impl DomSurface for MemoryDom {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| self.get(id).is_some_and(|e| e.tag == tag))
            .cloned()
            .collect()
    }

    fn elements_with_attr(&self, attr: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| self.get(id).is_some_and(|e| e.attrs.contains_key(attr)))
            .cloned()
            .collect()
    }

    fn anchors_in(&self, container_id: &str) -> Vec<AnchorRef> {
        self.order
            .iter()
            .filter_map(|id| {
                let element = self.get(id)?;
                if element.tag != "a" || element.parent.as_deref() != Some(container_id) {
                    return None;
                }
                let target = element
                    .attrs
                    .get("href")
                    .and_then(|href| href.strip_prefix('#'))
                    .filter(|t| !t.is_empty())
                    .map(str::to_string);
                Some(AnchorRef {
                    id: id.clone(),
                    target,
                })
            })
            .collect()
    }

    fn add_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.classes.remove(class);
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.classes.contains(class))
    }

    fn set_attr(&mut self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn attr(&self, id: &str, name: &str) -> Option<String> {
        self.get(id)?.attrs.get(name).cloned()
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.get_mut(id) {
            element.text = text.to_string();
        }
    }

    fn text(&self, id: &str) -> String {
        self.get(id).map(|e| e.text.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element.value = value.to_string();
        }
    }

    fn value(&self, id: &str) -> String {
        self.get(id).map(|e| e.value.clone()).unwrap_or_default()
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(element) = self.get_mut(id) {
            element.disabled = disabled;
        }
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.disabled)
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(element) = self.get_mut(id) {
            element.visible = visible;
        }
    }

    fn is_visible(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.visible)
    }

    fn focus(&mut self, id: &str) {
        if self.elements.contains_key(id) {
            self.focused = Some(id.to_string());
        }
    }

    fn focused(&self) -> Option<String> {
        self.focused.clone()
    }

    fn scroll_into_view(&mut self, id: &str) {
        if self.elements.contains_key(id) {
            self.scrolled.push(id.to_string());
        }
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn replace_fragment(&mut self, fragment: &str) {
        self.fragment = Some(fragment.to_string());
        self.replaced_fragments.push(fragment.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.confirm_answer
    }

    fn print(&mut self) {
        self.print_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_elements_are_silent() {
        let mut dom = MemoryDom::default();
        dom.add_class("ghost", "active");
        dom.set_text("ghost", "boo");
        dom.focus("ghost");
        dom.scroll_into_view("ghost");

        assert!(!dom.has_class("ghost", "active"));
        assert_eq!(dom.text("ghost"), "");
        assert_eq!(dom.focused(), None);
        assert!(dom.scrolled().is_empty());
    }

    #[test]
    fn test_class_and_attr_mutation() {
        let mut dom = MemoryDom::default();
        dom.insert("btn");
        dom.add_class("btn", "active");
        assert!(dom.has_class("btn", "active"));
        dom.remove_class("btn", "active");
        assert!(!dom.has_class("btn", "active"));

        dom.set_attr("btn", "aria-expanded", "true");
        assert_eq!(dom.attr("btn", "aria-expanded").as_deref(), Some("true"));
        assert_eq!(dom.attr("btn", "missing"), None);
    }

    #[test]
    fn test_replace_fragment_adds_no_history_entry() {
        let mut dom = MemoryDom::default();
        let before = dom.history_entries();
        dom.replace_fragment("about");
        dom.replace_fragment("projects");

        assert_eq!(dom.history_entries(), before);
        assert_eq!(dom.fragment().as_deref(), Some("projects"));
        assert_eq!(dom.replaced_fragments(), ["about", "projects"]);
    }

    #[test]
    fn test_anchor_enumeration_skips_external_links() {
        let mut dom = MemoryDom::default();
        dom.insert("nav");
        dom.insert_tagged("a1", "a", Some("nav"));
        dom.set_attr("a1", "href", "#top");
        dom.insert_tagged("a2", "a", Some("nav"));
        dom.set_attr("a2", "href", "https://example.com");
        dom.insert_tagged("a3", "a", Some("other"));
        dom.set_attr("a3", "href", "#elsewhere");

        let anchors = dom.anchors_in("nav");
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].target.as_deref(), Some("top"));
        assert_eq!(anchors[1].target, None);
    }

    #[test]
    fn test_confirm_is_scripted_and_recorded() {
        let mut dom = MemoryDom::default();
        assert!(!dom.confirm("fall back to print?"));
        dom.set_confirm_answer(true);
        assert!(dom.confirm("fall back to print?"));
        assert_eq!(dom.confirms().len(), 2);
    }

    #[test]
    fn test_standard_page_models_the_markup() {
        let dom = MemoryDom::standard_page();
        assert!(dom.contains("contactForm"));
        assert_eq!(dom.elements_by_tag("section").len(), 5);
        assert_eq!(dom.elements_with_attr("data-tab").len(), 2);
        assert!(dom.has_class("edu-tab", "hidden"));
        assert!(!dom.is_visible("formOk"));
        assert_eq!(dom.anchors_in("navMenu").len(), 5);
    }
}
