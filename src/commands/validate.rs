//! `healthmap validate` — run the pipeline without writing anything.

use super::load_context;
use crate::config::RenderOptions;
use crate::orchestrator::IntegrationOrchestrator;
use crate::registry::ContentRegistry;
use crate::validation::IntegrationValidationError;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn validate_assessment(assessment: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let ctx = load_context(&assessment)?;
    let options = RenderOptions::load_or_default(config.as_deref())?;
    let registry = ContentRegistry::standard();
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);

    match orchestrator.run(&ctx) {
        Ok(outcome) => {
            println!("{}", "Validation passed".green().bold());
            for (deliverable, count) in &outcome.validation.block_counts {
                println!("  {}: {} integrated block(s)", deliverable, count);
            }
            for issue in &outcome.validation.issues {
                println!("  {} {}", "soft:".yellow(), issue.detail);
            }
            for omission in &outcome.omissions {
                println!(
                    "  {} #{} missing for {}",
                    "skipped:".yellow(),
                    omission.target_section,
                    omission.origin_key
                );
            }
            Ok(())
        }
        Err(error) => {
            if let Some(validation) = error.downcast_ref::<IntegrationValidationError>() {
                eprintln!("{}", "Validation failed".red().bold());
                for violation in &validation.violations {
                    eprintln!("  {}", violation.detail);
                }
            }
            Err(error)
        }
    }
}
