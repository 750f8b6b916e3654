//! `pstart delete`: remove a project directory after explicit confirmation.

use std::io::{self, BufRead, Write};
use std::path::{Component, Path, PathBuf};

use tracing::{info, instrument};

use pstart_adapters::LocalFilesystem;
use pstart_core::application::{ApplicationError, ProjectService};

use crate::{
    cli::DeleteArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// The only answer that confirms deletion.
const CONFIRMATION: &str = "yes";

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: DeleteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let path = PathBuf::from(&args.name);
    if !path.is_dir() {
        return Err(CliError::Core(
            ApplicationError::ProjectNotFound { path }.into(),
        ));
    }
    let cwd = std::env::current_dir().with_cli_context(|| "failed to read the working directory")?;
    refuse_enclosing(&path, &cwd)?;

    output.warning(&format!(
        "This will permanently delete {} and everything in it.",
        path.display()
    ))?;
    eprint!("Are you sure you want to continue? (yes/no): ");
    io::stderr()
        .flush()
        .with_cli_context(|| "failed to flush stderr")?;

    if !confirmed(io::stdin().lock()).with_cli_context(|| "failed to read confirmation input")? {
        output.info("Aborted.")?;
        info!("Deletion declined");
        return Ok(());
    }

    let store = super::config_store(&config)?;
    let service = ProjectService::new(Box::new(store), Box::new(LocalFilesystem::new()));
    service.delete_project(&path)?;

    output.success(&format!("Project '{}' deleted", path.display()))?;
    Ok(())
}

/// Reject `.`, `..` and any directory that contains `cwd`.
fn refuse_enclosing(path: &Path, cwd: &Path) -> CliResult<()> {
    let relative_marker = path
        .components()
        .all(|c| matches!(c, Component::CurDir | Component::ParentDir));
    let encloses_cwd = match (path.canonicalize(), cwd.canonicalize()) {
        (Ok(target), Ok(cwd)) => cwd.starts_with(&target),
        _ => false,
    };

    if relative_marker || encloses_cwd {
        return Err(CliError::InvalidInput {
            message: format!(
                "refusing to delete '{}': it is or contains the working directory",
                path.display()
            ),
            source: None,
        });
    }
    Ok(())
}

/// Read one line; only the exact word `yes` confirms.
fn confirmed(mut input: impl BufRead) -> io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim() == CONFIRMATION)
}
