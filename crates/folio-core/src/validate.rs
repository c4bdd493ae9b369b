//! Contact form validation rules
//!
//! Pure functions mapping a field and its raw value to human-readable error
//! messages. Values are trimmed before evaluation; lengths are counted in
//! characters. Boundaries are inclusive on both ends: a value is valid iff
//! `min <= len <= max`.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{FormField, FormValues};

/// Accepted length range for the name field
pub const NAME_LEN: (usize, usize) = (2, 50);
/// Accepted length range for the subject field
pub const SUBJECT_LEN: (usize, usize) = (3, 100);
/// Accepted length range for the message field
pub const MESSAGE_LEN: (usize, usize) = (10, 1000);

/// Permissive single-`@` email shape: no whitespace, one `@`, a dot in the
/// domain part. Deliberately not an RFC validator.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email regex is valid")
});

/// Validate a single field value, returning every rule violation in order.
///
/// Deterministic and side-effect free; callers surface only the first
/// message per field.
pub fn validate(field: FormField, value: &str) -> Vec<String> {
    let value = value.trim();
    let mut errors = Vec::new();

    match field {
        FormField::Name => push_length_errors(&mut errors, field, value, NAME_LEN),
        FormField::Email => {
            if !EMAIL_PATTERN.is_match(value) {
                errors.push("Please enter a valid email address".to_string());
            }
        }
        FormField::Subject => push_length_errors(&mut errors, field, value, SUBJECT_LEN),
        FormField::Message => push_length_errors(&mut errors, field, value, MESSAGE_LEN),
    }

    errors
}

/// First surfaced error for a field, or `None` when the value passes
pub fn first_error(field: FormField, value: &str) -> Option<String> {
    validate(field, value).into_iter().next()
}

/// Validate every field of the form, in document order.
///
/// Returns one entry per field; an empty error list means the field passed.
pub fn validate_values(values: &FormValues) -> Vec<(FormField, Vec<String>)> {
    FormField::ALL
        .iter()
        .map(|&field| (field, validate(field, values.get(field))))
        .collect()
}

fn push_length_errors(
    errors: &mut Vec<String>,
    field: FormField,
    value: &str,
    (min, max): (usize, usize),
) {
    let len = value.chars().count();
    if len < min {
        errors.push(format!(
            "{} must be at least {} characters",
            field.display_name(),
            min
        ));
    }
    if len > max {
        // The message says "less than" but max itself is still accepted.
        errors.push(format!(
            "{} must be less than {} characters",
            field.display_name(),
            max
        ));
    }
}
