//! Message types for the page runtime (TEA pattern)

use folio_core::types::{FormField, FormValues};

/// All possible messages/events on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Page finished loading; carries the URL fragment present at load time
    PageLoaded { fragment: Option<String> },

    // ─────────────────────────────────────────────────────────
    // Mobile Menu Messages
    // ─────────────────────────────────────────────────────────
    /// Toggle control activated
    MenuTogglePressed,

    /// A link inside the open menu was activated
    MenuLinkActivated,

    /// Escape pressed anywhere on the page (closes the menu, never opens it)
    EscapePressed,

    // ─────────────────────────────────────────────────────────
    // Tab Switcher Messages
    // ─────────────────────────────────────────────────────────
    /// A tab control was activated; carries its raw `data-tab` token
    TabPressed { token: String },

    // ─────────────────────────────────────────────────────────
    // Nav Highlighter Messages
    // ─────────────────────────────────────────────────────────
    /// The viewport observer reported a section as current
    SectionIntersected { section_id: String },

    /// An in-page anchor link was clicked; default navigation is intercepted
    AnchorClicked { target_id: String },

    // ─────────────────────────────────────────────────────────
    // Contact Form Messages
    // ─────────────────────────────────────────────────────────
    /// A form input lost focus; carries the raw value at that moment
    FieldBlurred { field: FormField, value: String },

    /// Submit activated; carries the full field set at that moment
    SubmitPressed { values: FormValues },

    /// The submission round trip produced an HTTP response
    SubmissionDelivered { status: u16 },

    /// The submission could not be sent or received
    SubmissionFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // PDF Export Messages
    // ─────────────────────────────────────────────────────────
    /// Export control activated
    ExportPressed,

    /// The conversion library is not present on the page
    ConverterMissing,

    /// Conversion finished and the file was saved
    ExportCompleted,

    /// Conversion started but failed
    ExportFailed { error: String },
}
