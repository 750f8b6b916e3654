//! Implementation of the `pstart create` command.
//!
//! Responsibility: merge CLI arguments with configured defaults, call the
//! core project service, and display results. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use pstart_adapters::LocalFilesystem;
use pstart_core::{
    application::{CreateProject, CreateReport, ProjectService, ServiceOptions},
    domain::ProjectType,
};

use crate::{
    cli::{CreateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, render_entry},
};

/// Execute the `pstart create` command.
///
/// Dispatch sequence:
/// 1. Resolve name, pattern, CI/CD and tests from flags, then config defaults
/// 2. Build the service from the configured document stores
/// 3. `--dry-run`: print the plan and stop
/// 4. Create the project, print the result and any warnings
#[instrument(skip_all, fields(project_type = %args.project_type))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args, &config);
    debug!(
        name = %request.name.display(),
        pattern = %request.pattern,
        cicd = request.cicd.as_deref().unwrap_or("none"),
        tests = request.tests,
        "Request resolved"
    );

    let store = super::config_store(&config)?;
    let service = ProjectService::new(Box::new(store), Box::new(LocalFilesystem::new()))
        .with_options(ServiceOptions {
            rollback_on_failure: config.create.rollback_on_failure,
        });

    if args.dry_run {
        let plan = service.plan(&request)?;
        return show_report(&plan, true, &output);
    }

    output.header(&format!("Creating '{}'...", request.name.display()))?;
    info!(path = %request.name.display(), "Create started");

    let report = service.create_project(&request)?;
    show_report(&report, false, &output)?;

    if !report.is_complete() {
        return Err(CliError::PartialSuccess {
            root: report.root,
            warnings: report.warnings.len(),
        });
    }

    if !global.quiet && !output.is_json() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", request.name.display()))?;
    }

    Ok(())
}

/// Flags win over `[defaults]`; a missing name falls back to the type name.
fn build_request(args: &CreateArgs, config: &AppConfig) -> CreateProject {
    let name = args.name.clone().unwrap_or_else(|| {
        args.project_type
            .parse::<ProjectType>()
            .map(|t| t.to_string())
            .unwrap_or_else(|_| args.project_type.trim().to_string())
    });

    let pattern = args
        .pattern
        .clone()
        .or_else(|| config.defaults.pattern.clone())
        .unwrap_or_default();

    let mut request = CreateProject::new(PathBuf::from(name), args.project_type.clone())
        .pattern(pattern)
        .tests(args.tests || config.defaults.tests);

    if let Some(cicd) = args.cicd.clone().or_else(|| config.defaults.cicd.clone()) {
        request = request.cicd(cicd);
    }
    request
}

/// Machine-readable form of a [`CreateReport`].
#[derive(Debug, Serialize)]
struct ReportView {
    root: PathBuf,
    project_type: ProjectType,
    pattern: String,
    dry_run: bool,
    entries: Vec<String>,
    warnings: Vec<String>,
}

impl ReportView {
    fn new(report: &CreateReport, dry_run: bool) -> Self {
        Self {
            root: report.root.clone(),
            project_type: report.project_type,
            pattern: report.pattern.to_string(),
            dry_run,
            entries: report
                .structure
                .entries()
                .iter()
                .map(|e| render_entry(&report.structure, e))
                .collect(),
            warnings: report
                .warnings
                .iter()
                .map(|w| format!("{}: {}", w.step, w.error))
                .collect(),
        }
    }
}

fn show_report(report: &CreateReport, dry_run: bool, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&ReportView::new(report, dry_run))?;
        return Ok(());
    }

    if dry_run {
        output.info(&format!(
            "Dry run: would create {} ({}/{}), {} entries",
            report.root.display(),
            report.project_type,
            report.pattern,
            report.structure.entry_count() + 1,
        ))?;
        output.print(&format!("  {}/", report.root.display()))?;
    } else {
        output.success(&format!(
            "Project '{}' created ({}/{})",
            report.root.display(),
            report.project_type,
            report.pattern,
        ))?;
    }
    output.structure(&report.structure)?;

    for warning in &report.warnings {
        output.warning(&format!("{} skipped: {}", warning.step, warning.error))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
