//! File output for generated reports.
//!
//! Filenames are type-scoped (`<slug>.html`, `<slug>.meta.json`), so
//! concurrent runs for different report types never collide. Writes are
//! plain `fs::write`; the caller invokes them only after validation passes.

use crate::core::GeneratedReport;
use crate::validation::FullValidationResult;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Write one report's HTML and metadata sidecar into `output_dir`.
/// Returns the written paths.
pub fn write_report(output_dir: &Path, report: &GeneratedReport) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir {}", output_dir.display()))?;

    let html_path = output_dir.join(format!("{}.html", report.slug));
    fs::write(&html_path, &report.html)
        .with_context(|| format!("Failed to write {}", html_path.display()))?;

    let meta_path = output_dir.join(format!("{}.meta.json", report.slug));
    let meta_json = serde_json::to_string_pretty(&report.metadata)?;
    fs::write(&meta_path, meta_json)
        .with_context(|| format!("Failed to write {}", meta_path.display()))?;

    debug!("wrote {} and sidecar", html_path.display());
    Ok((html_path, meta_path))
}

/// Write the run's validation summary as `validation.json`
pub fn write_validation_summary(
    output_dir: &Path,
    result: &FullValidationResult,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir {}", output_dir.display()))?;
    let path = output_dir.join("validation.json");
    fs::write(&path, serde_json::to_string_pretty(result)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BrandInfo, HealthBand, ReportMetadata};
    use std::collections::BTreeMap;

    fn report() -> GeneratedReport {
        GeneratedReport {
            slug: "financial".to_string(),
            html: "<!DOCTYPE html><html></html>".to_string(),
            metadata: ReportMetadata {
                report_type: "financial".to_string(),
                report_name: "Financial Impact Analysis".to_string(),
                generated_at: chrono::Utc::now(),
                company_name: "Acme".to_string(),
                run_id: "run-1".to_string(),
                health_score: 60.0,
                health_band: HealthBand::Stable,
                page_suggestion_estimate: 1,
                sections: vec![],
                brand: BrandInfo {
                    primary_color: "#1a365d".to_string(),
                    accent_color: "#2b6cb0".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_writes_html_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let (html_path, meta_path) = write_report(dir.path(), &report()).unwrap();

        assert_eq!(html_path.file_name().unwrap(), "financial.html");
        assert_eq!(meta_path.file_name().unwrap(), "financial.meta.json");

        let html = std::fs::read_to_string(&html_path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));

        let meta: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&meta_path).unwrap()).unwrap();
        assert_eq!(meta["reportType"], "financial");
        assert_eq!(meta["healthBand"], "stable");
        assert!(meta["generatedAt"].is_string());
    }

    #[test]
    fn test_creates_nested_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        assert!(write_report(&nested, &report()).is_ok());
        assert!(nested.join("financial.html").exists());
    }

    #[test]
    fn test_validation_summary_written() {
        let dir = tempfile::tempdir().unwrap();
        let result = FullValidationResult {
            passed: true,
            issues: vec![],
            block_counts: BTreeMap::new(),
        };
        let path = write_validation_summary(dir.path(), &result).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed["passed"], true);
    }
}
