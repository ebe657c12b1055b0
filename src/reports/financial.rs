//! Financial impact analysis artifact.

use super::{anchors, build_metadata, render_shell};
use crate::charts::{bar_chart, donut_chart, render_all, ChartThunk, DataPoint};
use crate::config::RenderOptions;
use crate::core::{GeneratedReport, IntermediateFileType, ReportContext, SectionInfo};
use crate::financial::{aggregate_financial_impact, FinancialImpactSummary};
use crate::formatting::{capitalize, group_thousands};
use anyhow::Result;
use html_escape::encode_text;

pub fn build_financial_report(
    ctx: &ReportContext,
    options: &RenderOptions,
) -> Result<GeneratedReport> {
    let file_type = IntermediateFileType::Financial;
    let title = file_type.display_name();

    let body = match aggregate_financial_impact(ctx) {
        Some(summary) => render_summary(ctx, &summary, options),
        None => format!(
            r#"<section id="{}"><h2>Financial Impact</h2><p class="empty-state">No structured financial opportunities were identified in this assessment.</p></section>"#,
            anchors::SEC_FINANCIAL_IMPACT
        ),
    };

    let html = render_shell(title, &body, ctx, options);
    let sections = vec![SectionInfo {
        id: anchors::SEC_FINANCIAL_IMPACT.to_string(),
        title: "Financial Impact".to_string(),
    }];
    let metadata = build_metadata(file_type.slug(), title, ctx, options, &html, sections);

    Ok(GeneratedReport {
        slug: file_type.slug().to_string(),
        html,
        metadata,
    })
}

fn render_summary(
    ctx: &ReportContext,
    summary: &FinancialImpactSummary,
    options: &RenderOptions,
) -> String {
    let opportunities = ctx
        .strategic_financial_opportunities
        .as_deref()
        .unwrap_or(&[]);

    // The two charts are independent; render them together so neither waits
    // on the other and either can fall back alone.
    let opportunity_points: Vec<DataPoint> = opportunities
        .iter()
        .map(|o| DataPoint::new(&o.name, o.base_annual_value))
        .collect();
    let category_points: Vec<DataPoint> = summary
        .categories
        .iter()
        .map(|c| DataPoint::new(&c.category, c.annual_value))
        .collect();
    let accent = options.brand.accent_color.clone();
    let chart_jobs: Vec<(String, ChartThunk)> = vec![
        (
            "Opportunity values".to_string(),
            Box::new(move || bar_chart(&opportunity_points, &accent)),
        ),
        (
            "Category share".to_string(),
            Box::new(move || donut_chart(&category_points)),
        ),
    ];
    let charts = render_all(chart_jobs);

    let rows: Vec<String> = opportunities
        .iter()
        .map(|o| {
            format!(
                r#"<div class="{class}" {attr}="{value:.0}"><h3 class="{title_class}">{name}</h3><p class="{body_class}">{category} opportunity worth ${value_fmt} annually at {conf:.0}% confidence.</p></div>"#,
                class = anchors::CLASS_OPPORTUNITY_ROW,
                attr = anchors::ATTR_VALUE,
                value = o.base_annual_value,
                title_class = anchors::CLASS_CARD_TITLE,
                name = encode_text(&o.name),
                body_class = anchors::CLASS_CARD_BODY,
                category = encode_text(&capitalize(&o.category)),
                value_fmt = group_thousands(o.base_annual_value),
                conf = o.confidence * 100.0,
            )
        })
        .collect();

    let scenario = format!(
        r#"<div class="{class}"><h3 class="{title_class}">Scenario Analysis</h3><p class="{body_class}">Conservative ${} · Base ${} · Optimistic ${} annually. Weighted five-year value: ${}.</p></div>"#,
        group_thousands(summary.scenario_analysis.conservative_annual),
        group_thousands(summary.scenario_analysis.base_annual),
        group_thousands(summary.scenario_analysis.optimistic_annual),
        group_thousands(summary.five_year_value),
        class = anchors::CLASS_SCENARIO_SUMMARY,
        title_class = anchors::CLASS_CARD_TITLE,
        body_class = anchors::CLASS_CARD_BODY,
    );

    format!(
        r#"<section id="{}"><h2>Financial Impact</h2><p>Total identified annual value: ${}.</p>{}{}{}</section>"#,
        anchors::SEC_FINANCIAL_IMPACT,
        group_thousands(summary.total_identified_annual_value),
        charts.join(""),
        rows.join(""),
        scenario
    )
}
