//! Local filesystem adapter using std::fs.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use tracing::debug;

use postgen_core::{application::ports::Filesystem, error::PostgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_new(&self, from: &Path, to: &Path) -> PostgenResult<u64> {
        // The source must open as a regular file before the output is
        // created. A failure after creation can still leave a partial file.
        let mut source = File::open(from).map_err(|e| map_io_error(to, e, "open template"))?;
        let metadata = source
            .metadata()
            .map_err(|e| map_io_error(to, e, "inspect template"))?;
        if !metadata.is_file() {
            let e = io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", from.display()),
            );
            return Err(map_io_error(to, e, "inspect template"));
        }

        // create_new fails with AlreadyExists instead of truncating, which
        // closes the window between the caller's existence check and here.
        let mut dest = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(to)
            .map_err(|e| map_io_error(to, e, "create output"))?;

        let bytes = io::copy(&mut source, &mut dest).map_err(|e| map_io_error(to, e, "copy"))?;
        dest.sync_all()
            .map_err(|e| map_io_error(to, e, "sync output"))?;

        debug!(from = %from.display(), to = %to.display(), bytes, "Copied");
        Ok(bytes)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> postgen_core::error::PostgenError {
    use postgen_core::application::ApplicationError;

    debug!(path = %path.display(), operation, error = %e, "I/O failure");
    ApplicationError::CopyFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
