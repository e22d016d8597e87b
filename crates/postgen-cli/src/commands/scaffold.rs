//! Implementation of `postgen <SLUG>`.
//!
//! Responsibility: turn CLI arguments and config into a `Slug` and a
//! `PostLayout`, call the core scaffold service, and report the result.
//! The guard checks and the copy live in the core.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use postgen_adapters::LocalFilesystem;
use postgen_core::{
    application::ScaffoldService,
    domain::{PostLayout, ScaffoldedPost, Slug},
    error::PostgenError,
};

use crate::{
    cli::{OutputFormat, ScaffoldArgs, SiteArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// JSON shape of a scaffold (or dry-run) report.
#[derive(Debug, Serialize)]
struct Report<'a> {
    dry_run: bool,
    #[serde(flatten)]
    post: &'a ScaffoldedPost,
}

/// Execute the scaffold.
///
/// Dispatch sequence:
/// 1. Require a non-empty slug
/// 2. Resolve the site layout (flags > config > executable directory)
/// 3. Plan only, if `--dry-run`
/// 4. Otherwise scaffold via `ScaffoldService`
/// 5. Report the created file and its view path
#[instrument(skip_all, fields(slug = args.slug.as_deref().unwrap_or_default()))]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Slug
    let raw = args.slug.ok_or(CliError::MissingSlug)?;
    let slug = Slug::new(raw).map_err(PostgenError::from)?;

    // 2. Layout
    let layout = resolve_layout(&args.site, &config)?;
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), layout);
    debug!(
        dir = %service.layout().dir().display(),
        template = service.layout().template_name(),
        "Layout resolved"
    );

    // 3. Dry run: check but do not write.
    if args.dry_run {
        let post = service.plan(&slug)?;
        return report(&post, true, &output);
    }

    // 4. Scaffold
    let post = service.scaffold(&slug)?;
    info!(file = %post.output_path.display(), "Scaffold completed");

    // 5. Report
    report(&post, false, &output)
}

// ── Layout resolution ─────────────────────────────────────────────────────────

/// Merge command-line overrides over config into a `PostLayout`.
pub fn resolve_layout(site: &SiteArgs, config: &AppConfig) -> CliResult<PostLayout> {
    let dir = match site.dir.as_ref().or(config.site.dir.as_ref()) {
        Some(dir) => dir.clone(),
        None => executable_dir()?,
    };
    let template = site.template.as_deref().unwrap_or(config.site.template.as_str());
    let view_base = site.view_base.as_deref().unwrap_or(config.site.view_base.as_str());

    let layout = PostLayout::new(dir)
        .with_template(template)
        .map_err(PostgenError::from)?
        .with_view_base(view_base);
    Ok(layout)
}

/// The template is co-located with the program by default.
fn executable_dir() -> CliResult<PathBuf> {
    let exe = std::env::current_exe().with_cli_context(|| "failed to locate the postgen executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| CliError::IoError {
            message: format!("{} has no parent directory", exe.display()),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn report(post: &ScaffoldedPost, dry_run: bool, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(&Report { dry_run, post });
    }

    if dry_run {
        output.info(&format!(
            "Dry run: would create {} from {}",
            post.file_name,
            post.template_path.display()
        ))?;
    } else {
        output.success(&format!("Created {}", post.file_name))?;
    }
    output.detail(&format!("   View at: {}", post.view_path))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn site(dir: Option<&str>, template: Option<&str>, view_base: Option<&str>) -> SiteArgs {
        SiteArgs {
            dir: dir.map(PathBuf::from),
            template: template.map(String::from),
            view_base: view_base.map(String::from),
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.site.dir = Some(PathBuf::from("/from/config"));
        config.site.template = "config.html".into();

        let layout = resolve_layout(
            &site(Some("/from/flag"), Some("flag.html"), Some("/b")),
            &config,
        )
        .unwrap();

        assert_eq!(layout.dir(), Path::new("/from/flag"));
        assert_eq!(layout.template_name(), "flag.html");
        assert_eq!(
            layout.view_path(&Slug::new("x").unwrap()),
            "/b/x.html"
        );
    }

    #[test]
    fn config_fills_unset_flags() {
        let mut config = AppConfig::default();
        config.site.dir = Some(PathBuf::from("/from/config"));
        config.site.view_base = "/notes".into();

        let layout = resolve_layout(&SiteArgs::default(), &config).unwrap();

        assert_eq!(layout.dir(), Path::new("/from/config"));
        assert_eq!(layout.template_name(), "post-template.html");
        assert_eq!(layout.view_path(&Slug::new("y").unwrap()), "/notes/y.html");
    }

    #[test]
    fn default_dir_is_next_to_executable() {
        let layout = resolve_layout(&SiteArgs::default(), &AppConfig::default()).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(layout.dir()), exe.parent());
    }

    #[test]
    fn empty_template_flag_is_rejected() {
        let result = resolve_layout(&site(Some("/x"), Some(""), None), &AppConfig::default());
        assert!(matches!(result, Err(CliError::Core(_))));
    }

    #[test]
    fn report_json_flattens_post() {
        let post = ScaffoldedPost {
            slug: Slug::new("a").unwrap(),
            file_name: "a.html".into(),
            template_path: PathBuf::from("/s/post-template.html"),
            output_path: PathBuf::from("/s/a.html"),
            view_path: "/ideas/a.html".into(),
            bytes: 3,
        };
        let value = serde_json::to_value(Report {
            dry_run: false,
            post: &post,
        })
        .unwrap();

        assert_eq!(value["dry_run"], false);
        assert_eq!(value["slug"], "a");
        assert_eq!(value["view_path"], "/ideas/a.html");
        assert_eq!(value["bytes"], 3);
    }
}
