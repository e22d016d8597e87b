//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `postgen-adapters` crate provides implementations.

use crate::error::PostgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `postgen_adapters::filesystem::LocalFilesystem` (production)
/// - `postgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Copy `from` to `to` byte for byte, returning the number of bytes
    /// written.
    ///
    /// `to` must not exist: implementations create it exclusively and fail
    /// with `ApplicationError::CopyFailed` rather than overwrite. Any I/O
    /// failure is reported the same way, carrying the underlying message.
    fn copy_new(&self, from: &Path, to: &Path) -> PostgenResult<u64>;
}
