//! Flags accepted before or after any `pstart` subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level: warnings by default, then info, debug and trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more about what pstart does (-v, -vv, -vvv)",
        long_help = "Log more about what pstart does, on stderr:
    (none)  - warnings such as a skipped CI/CD file
    -v      - which layout document was used, root created
    -vv     - document lookups and augmenter steps
    -vvv    - every directory and file as it is written

RUST_LOG, when set, replaces these levels."
    )]
    pub verbose: u8,

    /// Only errors and warnings reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only errors and warnings"
    )]
    pub quiet: bool,

    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never emit ANSI colours (also set by NO_COLOR)"
    )]
    pub no_color: bool,

    /// pstart settings file (TOML). `-c` is taken by `create --cicd`.
    #[arg(
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the platform config path"
    )]
    pub config: Option<PathBuf>,

    /// `json` prints one JSON document on stdout and logs as JSON lines.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured, with headers and symbols.
    Human,
    /// Same lines as `human`, no colour.
    Plain,
    /// A single JSON document per command.
    Json,
}
