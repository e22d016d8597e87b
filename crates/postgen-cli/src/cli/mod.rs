//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No scaffolding logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// The slug is optional at the clap level so that a bare `postgen` reaches
/// our own usage error (exit 1) instead of clap's.
#[derive(Debug, Parser)]
#[command(
    name     = "postgen",
    bin_name = "postgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a blog post page from the post template",
    long_about = "postgen copies the static post template to <SLUG>.html next to it. \
                  The page loads its content by slug at view time; postgen never \
                  renders or edits the template and never overwrites an existing post.",
    after_help = "EXAMPLES:\n\
        \x20 postgen my-first-post\n\
        \x20 postgen my-first-post --dir ./site/ideas\n\
        \x20 postgen launch-notes --dry-run\n\
        \x20 postgen --completions bash > ~/.local/share/bash-completion/completions/postgen",
)]
pub struct Cli {
    /// Flags that shape logging and output.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to scaffold and where.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Print a shell completion script and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with = "slug",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for scaffolding a post.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Post slug; the page is written to `<SLUG>.html`.
    #[arg(value_name = "SLUG", help = "Slug of the new post, e.g. my-first-post")]
    pub slug: Option<String>,

    /// Run every check but write nothing.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    #[command(flatten)]
    pub site: SiteArgs,
}

/// Overrides for the site layout. Unset flags fall back to config.
#[derive(Debug, Default, Args)]
pub struct SiteArgs {
    /// Directory holding the template; new posts are created here too.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Directory holding the post template (default: next to the executable)"
    )]
    pub dir: Option<PathBuf>,

    /// Template file name inside `--dir`.
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Template file name (default: post-template.html)"
    )]
    pub template: Option<String>,

    /// URL prefix printed in the "View at" line.
    #[arg(
        long = "view-base",
        value_name = "PATH",
        help = "Public URL prefix of the posts (default: /ideas)"
    )]
    pub view_base: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_slug() {
        let cli = Cli::parse_from(["postgen", "my-first-post"]);
        assert_eq!(cli.scaffold.slug.as_deref(), Some("my-first-post"));
        assert!(!cli.scaffold.dry_run);
        assert!(cli.completions.is_none());
    }

    #[test]
    fn slug_is_optional_for_clap() {
        let cli = Cli::try_parse_from(["postgen"]).unwrap();
        assert!(cli.scaffold.slug.is_none());
    }

    #[test]
    fn site_overrides() {
        let cli = Cli::parse_from([
            "postgen",
            "hello",
            "--dir",
            "site/ideas",
            "-t",
            "shell.html",
            "--view-base",
            "/blog",
            "--dry-run",
        ]);
        let args = cli.scaffold;
        assert_eq!(args.site.dir, Some(PathBuf::from("site/ideas")));
        assert_eq!(args.site.template.as_deref(), Some("shell.html"));
        assert_eq!(args.site.view_base.as_deref(), Some("/blog"));
        assert!(args.dry_run);
    }

    #[test]
    fn slug_starting_with_dash_needs_separator() {
        let cli = Cli::parse_from(["postgen", "--", "-odd"]);
        assert_eq!(cli.scaffold.slug.as_deref(), Some("-odd"));
    }

    #[test]
    fn completions_conflict_with_slug() {
        assert!(Cli::try_parse_from(["postgen", "--completions", "bash", "x"]).is_err());
        let cli = Cli::parse_from(["postgen", "--completions", "power-shell"]);
        assert_eq!(cli.completions, Some(Shell::PowerShell));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["postgen", "--quiet", "--verbose", "x"]);
        assert!(result.is_err());
    }
}
