//! Deliverable shells the integration pipeline splices content into.
//!
//! Every shell carries the section skeleton its registry mappings expect;
//! the executive summary is rendered up front, the remaining sections hold
//! anchor ids and short standing copy until composition fills them in.

use super::{anchors, build_metadata, render_shell};
use crate::charts::{radar_chart, render_or_fallback, DataPoint};
use crate::config::RenderOptions;
use crate::core::{Deliverable, GeneratedReport, ReportContext, SectionInfo};
use anyhow::Result;
use html_escape::encode_text;

struct SectionSpec {
    id: &'static str,
    title: &'static str,
    standing_copy: &'static str,
}

fn sections_for(deliverable: Deliverable) -> Vec<SectionSpec> {
    match deliverable {
        Deliverable::Comprehensive => vec![
            section(anchors::SEC_EXECUTIVE_SUMMARY, "Executive Summary", ""),
            section(
                anchors::SEC_KEY_FINDINGS,
                "Key Findings",
                "Findings from every assessed chapter follow.",
            ),
            section(
                anchors::SEC_RISK_OVERVIEW,
                "Risk Overview",
                "Identified risks, ordered by severity.",
            ),
            section(
                anchors::SEC_RECOMMENDATIONS,
                "Recommendations",
                "Prioritized actions across all chapters.",
            ),
            section(
                anchors::SEC_FINANCIAL_IMPACT,
                "Financial Impact",
                "Value identified across opportunities and scenarios.",
            ),
            section(
                anchors::SEC_ROADMAP_OVERVIEW,
                "Roadmap",
                "Sequenced transformation phases.",
            ),
            section(anchors::SEC_APPENDIX, "Appendix", "Methodology and scoring notes."),
        ],
        Deliverable::Owner => vec![
            section(anchors::SEC_EXECUTIVE_SUMMARY, "Executive Summary", ""),
            section(
                anchors::SEC_KEY_FINDINGS,
                "What We Found",
                "The findings that matter most to you as the owner.",
            ),
            section(
                anchors::SEC_QUICK_WINS,
                "Quick Wins",
                "Start with these in the next 30 days.",
            ),
            section(
                anchors::SEC_FINANCIAL_IMPACT,
                "What It's Worth",
                "The value on the table.",
            ),
            section(anchors::SEC_NEXT_STEPS, "Next Steps", "Where to go from here."),
        ],
        Deliverable::ExecutiveBrief => vec![
            section(anchors::SEC_EXECUTIVE_SUMMARY, "Executive Summary", ""),
            section(
                anchors::SEC_RISK_OVERVIEW,
                "Top Risks",
                "The exposures leadership should track.",
            ),
            section(
                anchors::SEC_FINANCIAL_IMPACT,
                "Value at Stake",
                "Headline value figures.",
            ),
            section(anchors::SEC_NEXT_STEPS, "Next Steps", "Sequenced priorities."),
        ],
        Deliverable::SalesMarketingManager => vec![
            section(anchors::SEC_EXECUTIVE_SUMMARY, "Executive Summary", ""),
            section(
                anchors::SEC_GROWTH_FOCUS,
                "Growth Focus",
                "Strategy and growth findings relevant to your function.",
            ),
            section(
                anchors::SEC_RECOMMENDATIONS,
                "Recommendations",
                "Actions your team can own.",
            ),
            section(anchors::SEC_NEXT_STEPS, "Next Steps", "Suggested sequencing."),
        ],
        Deliverable::OperationsManager => vec![
            section(anchors::SEC_EXECUTIVE_SUMMARY, "Executive Summary", ""),
            section(
                anchors::SEC_OPERATIONS_FOCUS,
                "Operations Focus",
                "Operations and people findings relevant to your function.",
            ),
            section(
                anchors::SEC_RECOMMENDATIONS,
                "Recommendations",
                "Actions your team can own.",
            ),
            section(anchors::SEC_NEXT_STEPS, "Next Steps", "Suggested sequencing."),
        ],
    }
}

fn section(id: &'static str, title: &'static str, standing_copy: &'static str) -> SectionSpec {
    SectionSpec {
        id,
        title,
        standing_copy,
    }
}

/// Build the empty shell for one deliverable
pub fn build_deliverable_shell(
    deliverable: Deliverable,
    ctx: &ReportContext,
    options: &RenderOptions,
) -> Result<GeneratedReport> {
    let specs = sections_for(deliverable);
    let mut body = String::new();

    for section in &specs {
        if section.id == anchors::SEC_EXECUTIVE_SUMMARY {
            body.push_str(&render_executive_summary(deliverable, ctx, options));
        } else {
            body.push_str(&format!(
                r#"<section id="{}"><h2>{}</h2><p>{}</p></section>"#,
                section.id,
                encode_text(section.title),
                encode_text(section.standing_copy)
            ));
        }
    }

    let html = render_shell(deliverable.display_name(), &body, ctx, options);
    let sections = specs
        .iter()
        .map(|s| SectionInfo {
            id: s.id.to_string(),
            title: s.title.to_string(),
        })
        .collect();
    let metadata = build_metadata(
        deliverable.slug(),
        deliverable.display_name(),
        ctx,
        options,
        &html,
        sections,
    );

    Ok(GeneratedReport {
        slug: deliverable.slug().to_string(),
        html,
        metadata,
    })
}

fn render_executive_summary(
    deliverable: Deliverable,
    ctx: &ReportContext,
    options: &RenderOptions,
) -> String {
    let chapter_lines: Vec<String> = ctx
        .chapters
        .iter()
        .map(|c| {
            format!(
                "<li>{}: {:.0} / 100</li>",
                encode_text(&c.name),
                c.score
            )
        })
        .collect();

    // The radar needs three axes; the chapter list carries the summary
    // on shorter assessments
    let chart = if ctx.chapters.len() >= 3 {
        let points: Vec<DataPoint> = ctx
            .chapters
            .iter()
            .map(|c| DataPoint::new(c.code.code(), c.score))
            .collect();
        render_or_fallback(
            "Chapter scores",
            radar_chart(&points, &options.brand.accent_color),
        )
    } else {
        String::new()
    };

    let audience_line = match deliverable {
        Deliverable::Owner => "This report is written for you as the owner.",
        Deliverable::ExecutiveBrief => "This brief summarizes the assessment for leadership.",
        Deliverable::SalesMarketingManager => {
            "This report focuses on sales and marketing responsibilities."
        }
        Deliverable::OperationsManager => "This report focuses on operational responsibilities.",
        Deliverable::Comprehensive => "This report covers the full assessment.",
    };

    format!(
        r#"<section id="{}"><h2>Executive Summary</h2><p>{} scored {:.0} / 100 ({}) in this assessment. {}</p>{}<ul>{}</ul></section>"#,
        anchors::SEC_EXECUTIVE_SUMMARY,
        encode_text(&ctx.company_name),
        ctx.health_score,
        ctx.health_band().label(),
        audience_line,
        chart,
        chapter_lines.join("")
    )
}
