use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::Slug;

/// Outcome of a scaffold (or of a dry-run plan, in which case `bytes` is 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedPost {
    pub slug: Slug,
    /// `<slug>.html`
    pub file_name: String,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    /// Site-relative URL the page is served at.
    pub view_path: String,
    /// Bytes copied from the template.
    pub bytes: u64,
}
