//! `healthmap generate` — run the full pipeline and write the results.

use super::load_context;
use crate::config::RenderOptions;
use crate::core::Deliverable;
use crate::io::{write_report, write_validation_summary};
use crate::orchestrator::IntegrationOrchestrator;
use crate::registry::ContentRegistry;
use colored::Colorize;
use anyhow::Result;
use std::path::PathBuf;

pub struct GenerateConfig {
    pub assessment: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub deliverables: Option<Vec<Deliverable>>,
    pub skip_intermediates: bool,
}

pub fn generate_reports(config: GenerateConfig) -> Result<()> {
    let ctx = load_context(&config.assessment)?;

    let mut options = RenderOptions::load_or_default(config.config.as_deref())?;
    if let Some(output) = config.output {
        options.output_dir = output;
    }
    if let Some(deliverables) = config.deliverables {
        options.deliverables = deliverables;
    }

    let registry = ContentRegistry::standard();
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);
    // Nothing below runs unless validation passed inside the orchestrator
    let outcome = orchestrator.run(&ctx)?;

    if !config.skip_intermediates {
        for report in &outcome.intermediates {
            write_report(&options.output_dir, report)?;
        }
    }
    for report in outcome.deliverables.values() {
        write_report(&options.output_dir, report)?;
    }
    write_validation_summary(&options.output_dir, &outcome.validation)?;

    println!(
        "{} {} deliverable(s), {} intermediate artifact(s) -> {}",
        "Generated".green().bold(),
        outcome.deliverables.len(),
        outcome.intermediates.len(),
        options.output_dir.display()
    );
    if !outcome.omissions.is_empty() {
        println!(
            "{} {} insertion(s) skipped (missing target sections)",
            "Note:".yellow(),
            outcome.omissions.len()
        );
    }
    for issue in &outcome.validation.issues {
        println!("{} {}", "Soft issue:".yellow(), issue.detail);
    }

    Ok(())
}
