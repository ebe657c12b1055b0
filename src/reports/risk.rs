//! Risk profile artifact.

use super::{anchors, build_metadata, render_shell};
use crate::charts::{donut_chart, render_or_fallback, DataPoint};
use crate::config::RenderOptions;
use crate::core::{
    GeneratedReport, IntermediateFileType, ReportContext, RiskFinding, SectionInfo, Severity,
};
use anyhow::Result;
use html_escape::encode_text;

const RISK_REGISTER_SECTION: &str = "risk-register";

pub fn build_risk_report(ctx: &ReportContext, options: &RenderOptions) -> Result<GeneratedReport> {
    let file_type = IntermediateFileType::RiskProfile;
    let title = file_type.display_name();

    let body = if ctx.risks.is_empty() {
        format!(
            r#"<section id="{}"><h2>Risk Register</h2><p class="empty-state">No material risks were identified in this assessment.</p></section>"#,
            RISK_REGISTER_SECTION
        )
    } else {
        // Severity-descending, stable within a band
        let mut ordered: Vec<&RiskFinding> = ctx.risks.iter().collect();
        ordered.sort_by(|a, b| b.severity.cmp(&a.severity));

        let chart = render_or_fallback(
            "Risk severity distribution",
            donut_chart(&severity_distribution(&ctx.risks)),
        );
        let cards: Vec<String> = ordered.into_iter().map(render_card).collect();

        format!(
            r#"<section id="{}"><h2>Risk Register</h2>{}{}</section>"#,
            RISK_REGISTER_SECTION,
            chart,
            cards.join("")
        )
    };

    let html = render_shell(title, &body, ctx, options);
    let sections = vec![SectionInfo {
        id: RISK_REGISTER_SECTION.to_string(),
        title: "Risk Register".to_string(),
    }];
    let metadata = build_metadata(file_type.slug(), title, ctx, options, &html, sections);

    Ok(GeneratedReport {
        slug: file_type.slug().to_string(),
        html,
        metadata,
    })
}

fn severity_distribution(risks: &[RiskFinding]) -> Vec<DataPoint> {
    [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ]
    .iter()
    .filter_map(|severity| {
        let count = risks.iter().filter(|r| r.severity == *severity).count();
        if count > 0 {
            Some(DataPoint::new(severity.label(), count as f64))
        } else {
            None
        }
    })
    .collect()
}

fn render_card(risk: &RiskFinding) -> String {
    let mitigation = risk
        .mitigation
        .as_deref()
        .map(|m| format!(r#"<p class="mitigation">Mitigation: {}</p>"#, encode_text(m)))
        .unwrap_or_default();

    format!(
        r#"<div class="{class}" {attr}="{sev_slug}"><h3 class="{title_class}">{title}</h3><span class="{sev_class}">{sev}</span><p class="{body_class}">{body}</p>{mitigation}</div>"#,
        class = anchors::CLASS_RISK_CARD,
        attr = anchors::ATTR_SEVERITY,
        sev_slug = risk.severity.label().to_lowercase(),
        title_class = anchors::CLASS_CARD_TITLE,
        title = encode_text(&risk.title),
        sev_class = anchors::CLASS_SEVERITY_LABEL,
        sev = risk.severity.label(),
        body_class = anchors::CLASS_CARD_BODY,
        body = encode_text(&risk.description),
        mitigation = mitigation,
    )
}
