//! Implementation of the `pstart list` command.

use serde::Serialize;

use pstart_core::{
    application::{CatalogEntry, CatalogService},
    domain::{CicdProvider, ProjectType},
};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ProviderView {
    name: CicdProvider,
    path: &'static str,
}

#[derive(Debug, Serialize)]
struct CatalogView {
    types: Vec<CatalogEntry>,
    cicd: Vec<ProviderView>,
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let filter = args
        .project_type
        .as_deref()
        .map(|raw| {
            raw.parse::<ProjectType>().map_err(|e| CliError::InvalidInput {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
        })
        .transpose()?;

    let service = CatalogService::new(Box::new(super::config_store(&config)?));
    let types: Vec<CatalogEntry> = match filter {
        Some(project_type) => vec![CatalogEntry {
            project_type,
            patterns: service.patterns(project_type)?,
        }],
        None => service.entries()?,
    };

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Project types:")?;
            for entry in &types {
                let patterns: Vec<&str> = entry.patterns.iter().map(|p| p.as_str()).collect();
                output.print(&format!(
                    "  {:<10} {}",
                    entry.project_type,
                    if patterns.is_empty() {
                        "(no patterns found)".to_string()
                    } else {
                        patterns.join(", ")
                    }
                ))?;
            }
            output.print("")?;
            output.header("CI/CD providers:")?;
            for provider in service.providers() {
                output.print(&format!("  {:<10} {}", provider, provider.target_path()))?;
            }
        }

        ListFormat::List => {
            for entry in &types {
                for pattern in &entry.patterns {
                    output.print(&format!("{}/{}", entry.project_type, pattern))?;
                }
            }
        }

        ListFormat::Json => {
            let view = CatalogView {
                types,
                cicd: service
                    .providers()
                    .iter()
                    .map(|&name| ProviderView {
                        name,
                        path: name.target_path(),
                    })
                    .collect(),
            };
            output.json(&view)?;
        }
    }

    Ok(())
}
