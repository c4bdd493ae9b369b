//! Domain types shared across the folio crates

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Contact Form Fields
// ─────────────────────────────────────────────────────────────────────────────

/// Identity of a contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// All fields in document order
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Canonical field name, as used in the form body
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Element id of the input carrying this field.
    ///
    /// The email input deviates from the field name (`email_i`) because the
    /// page reserves `email` for the contact-details mailto link.
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email_i",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Element id of the inline error slot for this field
    pub fn error_id(&self) -> &'static str {
        match self {
            FormField::Name => "name-error",
            FormField::Email => "email-error",
            FormField::Subject => "subject-error",
            FormField::Message => "message-error",
        }
    }

    /// Human-readable field label used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }
}

/// The contact form's field values, as captured at submit time.
///
/// Serializes to the four-pair form body the submission endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Experience/Education Tabs
// ─────────────────────────────────────────────────────────────────────────────

/// Which of the two experience-section lists is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Experience,
    Education,
}

impl Tab {
    /// Data-attribute token carried by the tab control (`data-tab`)
    pub fn token(&self) -> &'static str {
        match self {
            Tab::Experience => "xp",
            Tab::Education => "edu",
        }
    }

    /// Parse a `data-tab` token. Unknown tokens are ignored by the caller.
    pub fn from_token(token: &str) -> Option<Tab> {
        match token {
            "xp" => Some(Tab::Experience),
            "edu" => Some(Tab::Education),
            _ => None,
        }
    }

    /// Element id of the content list this tab reveals
    pub fn list_id(&self) -> &'static str {
        match self {
            Tab::Experience => "xp-tab",
            Tab::Education => "edu-tab",
        }
    }

    pub fn other(&self) -> Tab {
        match self {
            Tab::Experience => Tab::Education,
            Tab::Education => Tab::Experience,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle Phases
// ─────────────────────────────────────────────────────────────────────────────

/// Contact form submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Waiting for input; blur-level validation only
    #[default]
    Idle,

    /// Submit requested, whole-form validation running
    Validating,

    /// Request in flight; the submit control is locked
    Sending,

    /// Last submission was delivered and acknowledged
    Success,

    /// Last submission failed validation, transport, or server-side
    Error,
}

impl SubmissionPhase {
    /// Whether the submit control must be disabled in this phase
    pub fn locks_submit(&self) -> bool {
        matches!(self, SubmissionPhase::Sending)
    }

    /// Whether a new submit may start from this phase
    pub fn accepts_submit(&self) -> bool {
        !self.locks_submit()
    }
}

/// PDF export button lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportPhase {
    #[default]
    Idle,

    /// Conversion (or its fallback) in progress; the control is locked
    Generating,
}

impl ExportPhase {
    pub fn locks_control(&self) -> bool {
        matches!(self, ExportPhase::Generating)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status Line
// ─────────────────────────────────────────────────────────────────────────────

/// Styling applied to the form status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

impl StatusTone {
    /// CSS class appended to the base `form-status` class
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_match_page_contract() {
        assert_eq!(FormField::Email.input_id(), "email_i");
        assert_eq!(FormField::Email.error_id(), "email-error");
        assert_eq!(FormField::Name.input_id(), "name");
        assert_eq!(FormField::Message.error_id(), "message-error");
    }

    #[test]
    fn test_form_values_round_trip_by_field() {
        let mut values = FormValues::default();
        values.set(FormField::Subject, "Hello");
        assert_eq!(values.get(FormField::Subject), "Hello");
        assert_eq!(values.get(FormField::Name), "");
    }

    #[test]
    fn test_form_values_serialize_as_field_pairs() {
        let values = FormValues {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "A question".into(),
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_tab_tokens() {
        assert_eq!(Tab::Experience.token(), "xp");
        assert_eq!(Tab::from_token("edu"), Some(Tab::Education));
        assert_eq!(Tab::from_token("bogus"), None);
        assert_eq!(Tab::Experience.other(), Tab::Education);
    }

    #[test]
    fn test_submission_phase_locking() {
        assert!(SubmissionPhase::Sending.locks_submit());
        assert!(!SubmissionPhase::Idle.locks_submit());
        assert!(SubmissionPhase::Error.accepts_submit());
        assert!(!SubmissionPhase::Sending.accepts_submit());
    }

    #[test]
    fn test_export_phase_locking() {
        assert!(ExportPhase::Generating.locks_control());
        assert!(!ExportPhase::Idle.locks_control());
    }

    #[test]
    fn test_status_tone_classes() {
        assert_eq!(StatusTone::Success.css_class(), "success");
        assert_eq!(StatusTone::Error.css_class(), "error");
    }
}
