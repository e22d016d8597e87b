//! Arguments that shape how postgen talks, not what it does.
//!
//! Declared here and flattened into [`super::Cli`] so verbosity, colour and
//! config handling stay separate from the scaffolding arguments.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Logging, colour, config and output-format flags.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level on stderr: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Log more on stderr (-v, -vv, -vvv)",
        long_help = "Log more on stderr. Without -v only errors are logged:
    -v      - each step of the scaffold
    -vv     - resolved paths and copy details
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// No success report on stdout; errors still go to stderr.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Print nothing on success"
    )]
    pub quiet: bool,

    /// Plain, uncoloured output.
    ///
    /// `NO_COLOR` set to anything but an empty or falsey value (`0`,
    /// `false`, `no`, `off`) turns this on, per <https://no-color.org>.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file with `[site]` and `[output]` tables; must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// Shape of the success report on stdout.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "How to print the report"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of the success report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured lines with status symbols.
    Human,
    /// The same lines without ANSI codes.
    Plain,
    /// One JSON object describing the post.
    Json,
}
