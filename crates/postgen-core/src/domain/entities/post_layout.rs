use std::path::{Path, PathBuf};

use super::DomainError;
use crate::domain::value_objects::Slug;

/// Template file copied for every new post.
pub const DEFAULT_TEMPLATE: &str = "post-template.html";

/// Public URL prefix under which scaffolded posts are served.
pub const DEFAULT_VIEW_BASE: &str = "/ideas";

/// Where the template lives and where new posts go.
///
/// Template and posts share one directory: the template is
/// `<dir>/<template>` and a post is `<dir>/<slug>.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLayout {
    dir: PathBuf,
    template: String,
    view_base: String,
}

impl PostLayout {
    /// Layout rooted at `dir` with the default template name and view base.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            template: DEFAULT_TEMPLATE.to_owned(),
            view_base: DEFAULT_VIEW_BASE.to_owned(),
        }
    }

    /// Use a different template file name inside the layout directory.
    pub fn with_template(mut self, template: impl Into<String>) -> Result<Self, DomainError> {
        let template = template.into();
        if template.is_empty() {
            return Err(DomainError::EmptyTemplateName);
        }
        self.template = template;
        Ok(self)
    }

    pub fn with_view_base(mut self, view_base: impl Into<String>) -> Self {
        self.view_base = view_base.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn template_name(&self) -> &str {
        &self.template
    }

    pub fn template_path(&self) -> PathBuf {
        self.dir.join(&self.template)
    }

    pub fn output_path(&self, slug: &Slug) -> PathBuf {
        self.dir.join(slug.file_name())
    }

    /// Site-relative URL of the post, e.g. `/ideas/my-first-post.html`.
    pub fn view_path(&self, slug: &Slug) -> String {
        if self.view_base.is_empty() {
            return slug.file_name();
        }
        format!(
            "{}/{}",
            self.view_base.trim_end_matches('/'),
            slug.file_name()
        )
    }
}
