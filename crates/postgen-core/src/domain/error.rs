// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("slug cannot be empty")]
    EmptySlug,

    #[error("template file name cannot be empty")]
    EmptyTemplateName,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptySlug => vec![
                "Pass the slug of the post as the only argument".into(),
                "Example: postgen my-first-post".into(),
            ],
            Self::EmptyTemplateName => vec![
                "Set site.template in your config, or pass --template <FILE>".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySlug => ErrorCategory::Usage,
            Self::EmptyTemplateName => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Validation,
}
