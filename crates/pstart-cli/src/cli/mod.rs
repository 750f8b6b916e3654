//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.
//!
//! Project type and CI/CD choice are kept as plain strings: validation
//! belongs to the core, and an unsupported CI/CD value must not prevent the
//! base tree from being created.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pstart",
    bin_name = "pstart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap infrastructure projects from declarative layouts",
    long_about = "pstart creates the directory and file skeleton of a Terraform or \
                  Ansible project from a YAML layout, and can add a CI/CD pipeline \
                  stub and a tests directory.",
    after_help = "EXAMPLES:\n\
        \x20 pstart create -t terraform -n demo -c github -s\n\
        \x20 pstart create -t ansible -p role -n web-role\n\
        \x20 pstart list --type terraform\n\
        \x20 pstart completions bash > /usr/share/bash-completion/completions/pstart",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "new",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 pstart create -t terraform                   # ./terraform, basic layout\n\
            \x20 pstart create -t tf -n infra -p multi-module\n\
            \x20 pstart create -t ansible -n site -c gitlab --tests\n\
            \x20 pstart create -t terraform -n demo --dry-run"
    )]
    Create(CreateArgs),

    /// Delete a project directory.
    #[command(
        visible_alias = "rm",
        about = "Delete a project",
        after_help = "EXAMPLES:\n\
            \x20 pstart delete -n demo        # asks for confirmation\n\
            \x20 echo yes | pstart delete -n demo"
    )]
    Delete(DeleteArgs),

    /// List project types, patterns, and CI/CD providers.
    #[command(
        visible_alias = "ls",
        about = "List available types and patterns",
        after_help = "EXAMPLES:\n\
            \x20 pstart list\n\
            \x20 pstart list --type ansible\n\
            \x20 pstart list --format json"
    )]
    List(ListArgs),

    /// Initialise a pstart configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pstart init           # default location\n\
            \x20 pstart init --force   # overwrite existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pstart completions bash > ~/.local/share/bash-completion/completions/pstart\n\
            \x20 pstart completions zsh  > ~/.zfunc/_pstart\n\
            \x20 pstart completions fish > ~/.config/fish/completions/pstart.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the pstart configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pstart config get defaults.pattern\n\
            \x20 pstart config list\n\
            \x20 pstart config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `pstart create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project type (terraform, ansible).
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Project type (terraform, ansible)"
    )]
    pub project_type: String,

    /// Project directory.  Defaults to the project type name.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name or path (default: the project type)"
    )]
    pub name: Option<String>,

    /// Layout pattern within the project type.
    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "PATTERN",
        help = "Layout pattern (default: basic)"
    )]
    pub pattern: Option<String>,

    /// CI/CD provider whose pipeline stub to add.
    #[arg(
        short = 'c',
        long = "cicd",
        value_name = "PROVIDER",
        help = "Add a CI/CD pipeline file (github, circle, travis, jenkins, gitlab)"
    )]
    pub cicd: Option<String>,

    /// Add a tests directory with a starter file.
    #[arg(short = 's', long = "tests", help = "Add a tests directory")]
    pub tests: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `pstart delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Project directory to remove.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name or path"
    )]
    pub name: String,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `pstart list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show patterns for this type.
    #[arg(short = 't', long = "type", value_name = "TYPE", help = "Filter by type")]
    pub project_type: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `type/pattern` per line.
    List,
    /// JSON document.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pstart init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pstart completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pstart config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.pattern`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from([
            "pstart", "create", "-t", "terraform", "-n", "demo", "-c", "github", "-s",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.project_type, "terraform");
        assert_eq!(args.name.as_deref(), Some("demo"));
        assert_eq!(args.cicd.as_deref(), Some("github"));
        assert!(args.tests);
        assert!(!args.dry_run);
    }

    #[test]
    fn create_requires_type() {
        assert!(Cli::try_parse_from(["pstart", "create", "-n", "demo"]).is_err());
    }

    #[test]
    fn unknown_cicd_is_left_to_the_core() {
        let cli = Cli::parse_from(["pstart", "create", "-t", "tf", "-c", "bitbucket"]);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn global_config_does_not_clash_with_cicd() {
        let cli = Cli::parse_from([
            "pstart",
            "--config",
            "pstart.toml",
            "create",
            "-t",
            "ansible",
            "-c",
            "gitlab",
        ]);
        assert!(cli.global.config.is_some());
    }

    #[test]
    fn delete_requires_name() {
        assert!(Cli::try_parse_from(["pstart", "delete"]).is_err());
        assert!(Cli::try_parse_from(["pstart", "delete", "-n", "demo"]).is_ok());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::parse_from([
            "pstart", "list", "-vv", "--no-color", "--output-format", "json",
        ]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["pstart", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
