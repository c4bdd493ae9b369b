//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Page Surface Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Element not found on page: #{id}")]
    MissingElement { id: String },

    #[error("Page surface error: {message}")]
    Surface { message: String },

    // ─────────────────────────────────────────────────────────────
    // Form Submission Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid submission endpoint: {message}")]
    InvalidEndpoint { message: String },

    #[error("Submission transport error: {message}")]
    Transport { message: String },

    #[error("Submission rejected by server with status {status}")]
    Server { status: u16 },

    // ─────────────────────────────────────────────────────────────
    // PDF Export Errors
    // ─────────────────────────────────────────────────────────────
    #[error("PDF conversion library is not available")]
    ConverterUnavailable,

    #[error("PDF conversion failed: {message}")]
    Conversion { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface {
            message: message.into(),
        }
    }

    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }

    /// Check if this error disables the owning controller outright.
    ///
    /// A controller whose required elements are absent detaches instead of
    /// failing; every other error leaves the controller interactive.
    pub fn disables_controller(&self) -> bool {
        matches!(self, Error::MissingElement { .. })
    }

    /// Check if this error came from the submission round trip
    /// (transport-level or server-reported).
    pub fn is_submission_failure(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::Server { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::missing_element("navMenu");
        assert_eq!(err.to_string(), "Element not found on page: #navMenu");

        let err = Error::Server { status: 502 };
        assert!(err.to_string().contains("502"));

        let err = Error::ConverterUnavailable;
        assert!(err.to_string().contains("not available"));
    }

    #[test]
    fn test_missing_element_disables_controller() {
        assert!(Error::missing_element("contactForm").disables_controller());
        assert!(!Error::transport("connection refused").disables_controller());
        assert!(!Error::ConverterUnavailable.disables_controller());
    }

    #[test]
    fn test_submission_failure_classification() {
        assert!(Error::transport("timed out").is_submission_failure());
        assert!(Error::Server { status: 500 }.is_submission_failure());
        assert!(!Error::conversion("canvas too large").is_submission_failure());
        assert!(!Error::missing_element("submitBtn").is_submission_failure());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::missing_element("formOk");
        let _ = Error::surface("detached node");
        let _ = Error::invalid_endpoint("relative action with no base");
        let _ = Error::transport("dns failure");
        let _ = Error::conversion("render aborted");
    }
}
