//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use postgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::PostgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle for inspection while
/// the service owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    /// When set, every copy fails with this reason.
    copy_failure: Option<String>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (builder style).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into(), content.into());
        }
        self
    }

    /// Make every subsequent copy fail with `reason`.
    pub fn fail_copies(&self, reason: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.copy_failure = Some(reason.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn copy_new(&self, from: &Path, to: &Path) -> PostgenResult<u64> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        let copy_failed = |reason: &str| ApplicationError::CopyFailed {
            path: to.to_path_buf(),
            reason: reason.to_owned(),
        };

        if let Some(reason) = &inner.copy_failure {
            return Err(copy_failed(reason).into());
        }

        let content = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| copy_failed("No such file or directory"))?;

        if inner.files.contains_key(to) {
            return Err(copy_failed("File exists").into());
        }

        let bytes = content.len() as u64;
        inner.files.insert(to.to_path_buf(), content);
        Ok(bytes)
    }
}
