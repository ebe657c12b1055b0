//! CLI command handlers.

pub mod generate;
pub mod registry;
pub mod validate;

use crate::core::ReportContext;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load the assessment (IDM) from a JSON file
pub fn load_context(path: &Path) -> Result<ReportContext> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read assessment file: {}", path.display()))?;
    let ctx: ReportContext = serde_json::from_str(&content)
        .with_context(|| format!("Invalid assessment JSON: {}", path.display()))?;
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_context_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "company_name": "Acme",
                "run_id": "run-1",
                "health_score": 61.5,
                "chapters": [
                    {{"code": "STR", "name": "Strategy & Growth", "score": 62.0}}
                ]
            }}"#
        )
        .unwrap();

        let ctx = load_context(file.path()).unwrap();
        assert_eq!(ctx.company_name, "Acme");
        assert_eq!(ctx.chapters.len(), 1);
        assert!(ctx.risks.is_empty());
        assert!(ctx.strategic_financial_opportunities.is_none());
    }

    #[test]
    fn test_load_context_missing_file() {
        let error = load_context(Path::new("/nonexistent/a.json")).unwrap_err();
        assert!(error.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_context_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let error = load_context(file.path()).unwrap_err();
        assert!(error.to_string().contains("Invalid assessment JSON"));
    }
}
