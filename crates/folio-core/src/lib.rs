//! # folio-core - Core Domain Types
//!
//! Foundation crate for the folio page runtime. Provides domain types,
//! error handling, form validation rules, and logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SubmissionPhase`] - Contact form lifecycle (Idle, Sending, Success, ...)
//! - [`ExportPhase`] - PDF export button lifecycle (Idle, Generating)
//! - [`Tab`] - Experience/Education tab identity
//! - [`FormField`], [`FormValues`] - Contact form field set
//! - [`StatusTone`] - Success/error styling for the form status line
//!
//! ### Validation (`validate`)
//! - [`validate()`] - Pure per-field rule evaluation
//! - [`first_error()`] - First surfaced message for a field
//! - [`validate_values()`] - Whole-form evaluation on submit
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum covering surface, transport, and export failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;
pub mod validate;

/// Prelude for common imports used throughout the folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{ExportPhase, FormField, FormValues, StatusTone, SubmissionPhase, Tab};
pub use validate::{first_error, validate, validate_values};
