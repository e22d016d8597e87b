//! Unified error handling for postgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for postgen core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PostgenError {
    /// Errors from the domain layer (invalid slug, layout).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (missing template, conflict, copy).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PostgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in postgen".into(),
                "Please report this issue at: https://github.com/cosecruz/postgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Usage => ErrorCategory::Usage,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Validation,
    NotFound,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type PostgenResult<T> = Result<T, PostgenError>;
