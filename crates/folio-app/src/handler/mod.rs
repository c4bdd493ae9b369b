//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `menu`: Mobile menu open/close handlers
//! - `nav`: Scroll-driven highlighter and anchor click handlers
//! - `tabs`: Experience/Education switcher
//! - `form`: Contact form validation and submission lifecycle
//! - `pdf`: PDF export lifecycle

pub(crate) mod form;
pub(crate) mod menu;
pub(crate) mod nav;
pub(crate) mod pdf;
pub(crate) mod tabs;
pub(crate) mod update;


use folio_core::types::FormValues;

use crate::message::Message;
use crate::page::FormEndpoint;

// Re-export main entry point
pub use update::update;

/// One-shot side effects the engine performs after update.
///
/// Everything representable as state (classes, labels, disabled flags,
/// status text) is synchronized by the view instead; actions cover the
/// imperative leftovers a browser cannot express as idempotent writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Move input focus to an element
    Focus { id: String },

    /// Smooth-scroll an element into view
    ScrollIntoView { id: String },

    /// Replace the URL fragment without adding a history entry
    ReplaceFragment { id: String },

    /// Clear every contact form input
    ResetFormFields,

    /// Show a blocking notice to the user
    Alert { message: String },

    /// Offer the native print fallback; print when accepted
    ConfirmPrintFallback { message: String },

    /// Invoke the native print flow directly
    Print,

    /// Run asynchronous background work
    SpawnTask(Task),
}

/// Background tasks to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Submit the contact form to its configured endpoint
    SubmitForm {
        endpoint: FormEndpoint,
        values: FormValues,
    },

    /// Convert the rendered page to a PDF
    ExportPdf,
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Effects for the engine to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
