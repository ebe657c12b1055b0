//! Report builders: typed context in, HTML artifact plus metadata out.
//!
//! Builders never fail on missing optional data; absent fields render as
//! empty states. Chart failures degrade to fallback cards at the call site
//! and are never propagated.

pub mod anchors;
pub mod deep_dive;
pub mod deliverables;
pub mod financial;
pub mod quick_wins;
pub mod risk;
pub mod roadmap;

pub use deep_dive::build_deep_dive_report;
pub use deliverables::build_deliverable_shell;
pub use financial::build_financial_report;
pub use quick_wins::build_quick_wins_report;
pub use risk::build_risk_report;
pub use roadmap::build_roadmap_report;

use crate::config::RenderOptions;
use crate::core::{
    BrandInfo, GeneratedReport, IntermediateFileType, ReportContext, ReportMetadata, SectionInfo,
};
use anyhow::Result;
use chrono::Utc;
use html_escape::encode_text;

const SHELL_TEMPLATE: &str = include_str!("templates/shell.html");

/// Wrap a rendered body in the shared document shell
pub(crate) fn render_shell(
    title: &str,
    body: &str,
    ctx: &ReportContext,
    options: &RenderOptions,
) -> String {
    SHELL_TEMPLATE
        .replace("{{{TITLE}}}", &encode_text(title))
        .replace("{{{COMPANY}}}", &encode_text(&ctx.company_name))
        .replace("{{{PRIMARY}}}", &options.brand.primary_color)
        .replace("{{{ACCENT}}}", &options.brand.accent_color)
        .replace("{{{HEALTH_SCORE}}}", &format!("{:.0}", ctx.health_score))
        .replace("{{{HEALTH_BAND}}}", ctx.health_band().label())
        .replace("{{{BODY}}}", body)
}

/// Rough print-length estimate used by downstream pagination hints
pub(crate) fn estimate_pages(html: &str) -> u32 {
    ((html.len() / 6000) as u32).max(1)
}

/// Assemble the fixed-shape metadata sidecar for one artifact
pub(crate) fn build_metadata(
    slug: &str,
    report_name: &str,
    ctx: &ReportContext,
    options: &RenderOptions,
    html: &str,
    sections: Vec<SectionInfo>,
) -> ReportMetadata {
    ReportMetadata {
        report_type: slug.to_string(),
        report_name: report_name.to_string(),
        generated_at: Utc::now(),
        company_name: ctx.company_name.clone(),
        run_id: ctx.run_id.clone(),
        health_score: ctx.health_score,
        health_band: ctx.health_band(),
        page_suggestion_estimate: estimate_pages(html),
        sections,
        brand: BrandInfo {
            primary_color: options.brand.primary_color.clone(),
            accent_color: options.brand.accent_color.clone(),
        },
    }
}

/// Build one intermediate artifact by file type
pub fn build_intermediate(
    file_type: IntermediateFileType,
    ctx: &ReportContext,
    options: &RenderOptions,
) -> Result<GeneratedReport> {
    match file_type {
        IntermediateFileType::DeepDiveStrategy
        | IntermediateFileType::DeepDiveOperations
        | IntermediateFileType::DeepDiveFinancial
        | IntermediateFileType::DeepDivePeople => {
            // chapter() is total for deep-dive variants
            let chapter = file_type
                .chapter()
                .ok_or_else(|| anyhow::anyhow!("{:?} is not a deep dive", file_type))?;
            build_deep_dive_report(ctx, chapter, options)
        }
        IntermediateFileType::QuickWins => build_quick_wins_report(ctx, options),
        IntermediateFileType::Roadmap => build_roadmap_report(ctx, options),
        IntermediateFileType::Financial => build_financial_report(ctx, options),
        IntermediateFileType::RiskProfile => build_risk_report(ctx, options),
    }
}
