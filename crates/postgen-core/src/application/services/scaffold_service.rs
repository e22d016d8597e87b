//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole workflow:
//! 1. Check the template exists
//! 2. Check no post with the slug exists
//! 3. Copy the template verbatim to `<slug>.html`
//!
//! Every failure is terminal. Nothing is retried and a failed copy is not
//! cleaned up.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{PostLayout, ScaffoldedPost, Slug},
    error::PostgenResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    layout: PostLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use postgen_core::application::{ScaffoldService, ports::*};
    /// use postgen_core::domain::PostLayout;
    ///
    /// # fn run(filesystem: Box<dyn Filesystem>) {
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     PostLayout::new("site/ideas"),
    /// );
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, layout: PostLayout) -> Self {
        Self { filesystem, layout }
    }

    /// The layout this service scaffolds into.
    pub fn layout(&self) -> &PostLayout {
        &self.layout
    }

    /// Run the guard checks without writing anything.
    ///
    /// The returned post describes what [`Self::scaffold`] would create;
    /// its `bytes` is 0.
    #[instrument(skip_all, fields(slug = %slug))]
    pub fn plan(&self, slug: &Slug) -> PostgenResult<ScaffoldedPost> {
        let template_path = self.layout.template_path();
        let output_path = self.layout.output_path(slug);

        if !self.filesystem.exists(&template_path) {
            info!(template = %template_path.display(), "Template missing");
            return Err(ApplicationError::TemplateNotFound {
                name: self.layout.template_name().to_owned(),
                path: template_path,
            }
            .into());
        }

        if self.filesystem.exists(&output_path) {
            info!(output = %output_path.display(), "Refusing to overwrite");
            return Err(ApplicationError::OutputExists {
                file_name: slug.file_name(),
                path: output_path,
            }
            .into());
        }

        debug!(
            template = %template_path.display(),
            output = %output_path.display(),
            "Guards passed"
        );

        Ok(ScaffoldedPost {
            slug: slug.clone(),
            file_name: slug.file_name(),
            view_path: self.layout.view_path(slug),
            template_path,
            output_path,
            bytes: 0,
        })
    }

    /// Scaffold a new post page.
    ///
    /// This is the main use case: guard checks, then one exclusive copy.
    #[instrument(
        skip_all,
        fields(slug = %slug, dir = %self.layout.dir().display())
    )]
    pub fn scaffold(&self, slug: &Slug) -> PostgenResult<ScaffoldedPost> {
        let mut post = self.plan(slug)?;

        post.bytes = self
            .filesystem
            .copy_new(&post.template_path, &post.output_path)?;

        info!(
            file = %post.file_name,
            bytes = post.bytes,
            "Post scaffolded"
        );
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::error::PostgenError;

    const TEMPLATE: &str = "post-template.html";

    fn slug(s: &str) -> Slug {
        Slug::new(s).unwrap()
    }

    fn service(fs: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(Box::new(fs), PostLayout::new("/site/ideas"))
    }

    /// Template present; `existing` lists post files already on disk.
    fn fs_with(existing: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(move |p| {
            p.ends_with(TEMPLATE) || existing.iter().any(|name| p.ends_with(name))
        });
        fs
    }

    #[test]
    fn scaffold_copies_template_to_slug_file() {
        let mut fs = fs_with(&[]);
        fs.expect_copy_new()
            .withf(|from, to| {
                from == Path::new("/site/ideas/post-template.html")
                    && to == Path::new("/site/ideas/my-first-post.html")
            })
            .times(1)
            .returning(|_, _| Ok(21));

        let post = service(fs).scaffold(&slug("my-first-post")).unwrap();

        assert_eq!(post.file_name, "my-first-post.html");
        assert_eq!(
            post.output_path,
            PathBuf::from("/site/ideas/my-first-post.html")
        );
        assert_eq!(post.view_path, "/ideas/my-first-post.html");
        assert_eq!(post.bytes, 21);
    }

    #[test]
    fn missing_template_stops_before_copy() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_copy_new().never();

        let err = service(fs).scaffold(&slug("post")).unwrap_err();

        assert!(matches!(
            err,
            PostgenError::Application(ApplicationError::TemplateNotFound { ref name, .. })
                if name == TEMPLATE
        ));
    }

    #[test]
    fn existing_output_is_never_overwritten() {
        let mut fs = fs_with(&["taken.html"]);
        fs.expect_copy_new().never();

        let err = service(fs).scaffold(&slug("taken")).unwrap_err();

        assert_eq!(err.to_string(), "taken.html already exists");
    }

    #[test]
    fn copy_failure_is_propagated() {
        let mut fs = fs_with(&[]);
        fs.expect_copy_new().times(1).returning(|_, to| {
            Err(ApplicationError::CopyFailed {
                path: to.to_path_buf(),
                reason: "No space left on device (os error 28)".into(),
            }
            .into())
        });

        let err = service(fs).scaffold(&slug("post")).unwrap_err();

        assert!(err.to_string().contains("No space left on device"));
    }

    #[test]
    fn plan_checks_without_copying() {
        let mut fs = fs_with(&[]);
        fs.expect_copy_new().never();

        let post = service(fs).plan(&slug("draft")).unwrap();

        assert_eq!(post.bytes, 0);
        assert_eq!(
            post.template_path,
            PathBuf::from("/site/ideas/post-template.html")
        );
    }

    #[test]
    fn plan_reports_conflict() {
        let fs = fs_with(&["draft.html"]);
        assert!(service(fs).plan(&slug("draft")).is_err());
    }

    #[test]
    fn layout_is_the_one_given() {
        let service = service(MockFilesystem::new());
        assert_eq!(service.layout().dir(), Path::new("/site/ideas"));
        assert_eq!(service.layout().template_name(), TEMPLATE);
    }
}
