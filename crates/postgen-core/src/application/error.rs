//! Application layer errors.
//!
//! These errors represent failures while orchestrating a scaffold, not
//! rule violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The post template is missing from the site directory.
    #[error("{name} not found")]
    TemplateNotFound { name: String, path: PathBuf },

    /// A post with this slug already exists; it is never overwritten.
    #[error("{file_name} already exists")]
    OutputExists { file_name: String, path: PathBuf },

    /// The byte copy itself failed (permissions, disk full, a racing create).
    #[error("failed to create {}: {reason}", path.display())]
    CopyFailed { path: PathBuf, reason: String },

    /// In-memory adapter state was poisoned.
    #[error("Filesystem lock poisoned")]
    FilesystemLock,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path, .. } => vec![
                format!("Expected the template at {}", path.display()),
                "Point --dir at the directory holding the template".into(),
            ],
            Self::OutputExists { path, .. } => vec![
                "Choose a different slug".into(),
                format!("Or remove {} first", path.display()),
            ],
            Self::CopyFailed { path, .. } => vec![
                match path.parent() {
                    Some(dir) => format!("Check write permissions on {}", dir.display()),
                    None => "Check write permissions".into(),
                },
                "Check available disk space".into(),
            ],
            Self::FilesystemLock => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::OutputExists { .. } => ErrorCategory::Conflict,
            Self::CopyFailed { .. } | Self::FilesystemLock => ErrorCategory::Internal,
        }
    }
}
