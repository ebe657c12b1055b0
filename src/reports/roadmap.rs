//! Transformation roadmap artifact.

use super::{anchors, build_metadata, render_shell};
use crate::charts::{bar_chart, render_or_fallback, DataPoint};
use crate::config::RenderOptions;
use crate::core::{GeneratedReport, IntermediateFileType, ReportContext, RoadmapPhase, SectionInfo};
use anyhow::Result;
use html_escape::encode_text;

pub fn build_roadmap_report(
    ctx: &ReportContext,
    options: &RenderOptions,
) -> Result<GeneratedReport> {
    let file_type = IntermediateFileType::Roadmap;
    let title = file_type.display_name();

    let body = if ctx.roadmap.is_empty() {
        format!(
            r#"<section id="{}"><h2>Roadmap</h2><p class="empty-state">No transformation phases were planned in this assessment.</p></section>"#,
            anchors::SEC_ROADMAP_OVERVIEW
        )
    } else {
        let points: Vec<DataPoint> = ctx
            .roadmap
            .iter()
            .map(|p| DataPoint::new(&p.name, p.horizon_months as f64))
            .collect();
        let chart = render_or_fallback(
            "Phase horizons (months)",
            bar_chart(&points, &options.brand.accent_color),
        );
        let cards: Vec<String> = ctx.roadmap.iter().map(render_phase).collect();

        format!(
            r#"<section id="{}"><h2>Roadmap</h2>{}{}</section>"#,
            anchors::SEC_ROADMAP_OVERVIEW,
            chart,
            cards.join("")
        )
    };

    let html = render_shell(title, &body, ctx, options);
    let sections = vec![SectionInfo {
        id: anchors::SEC_ROADMAP_OVERVIEW.to_string(),
        title: "Roadmap".to_string(),
    }];
    let metadata = build_metadata(file_type.slug(), title, ctx, options, &html, sections);

    Ok(GeneratedReport {
        slug: file_type.slug().to_string(),
        html,
        metadata,
    })
}

fn render_phase(phase: &RoadmapPhase) -> String {
    let initiatives = if phase.initiatives.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = phase
            .initiatives
            .iter()
            .map(|i| format!("<li>{}</li>", encode_text(i)))
            .collect();
        format!("<ul>{}</ul>", items.join(""))
    };

    format!(
        r#"<div class="{class}" data-horizon-months="{months}"><h3 class="{title_class}">{name}</h3><p class="{body_class}">{focus} Planned horizon: {months} months.</p>{initiatives}</div>"#,
        class = anchors::CLASS_PHASE_CARD,
        months = phase.horizon_months,
        title_class = anchors::CLASS_CARD_TITLE,
        name = encode_text(&phase.name),
        body_class = anchors::CLASS_CARD_BODY,
        focus = encode_text(&phase.focus),
        initiatives = initiatives,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ReportContext {
        ReportContext {
            company_name: "Acme".to_string(),
            run_id: "run-1".to_string(),
            health_score: 60.0,
            chapters: vec![],
            risks: vec![],
            recommendations: vec![],
            quick_wins: vec![],
            roadmap: vec![
                RoadmapPhase {
                    name: "Stabilize".to_string(),
                    horizon_months: 3,
                    focus: "Fix cash collection.".to_string(),
                    initiatives: vec!["Weekly invoicing".to_string()],
                },
                RoadmapPhase {
                    name: "Grow".to_string(),
                    horizon_months: 9,
                    focus: "Rebuild pipeline discipline.".to_string(),
                    initiatives: vec![],
                },
            ],
            strategic_financial_opportunities: None,
        }
    }

    #[test]
    fn test_phase_cards_in_order() {
        let report = build_roadmap_report(&ctx(), &RenderOptions::default()).unwrap();
        let stabilize = report.html.find("Stabilize").unwrap();
        let grow = report.html.find("Grow").unwrap();
        assert!(stabilize < grow);
        assert_eq!(report.html.matches("phase-card").count(), 2);
    }

    #[test]
    fn test_horizon_attribute_and_prose() {
        let report = build_roadmap_report(&ctx(), &RenderOptions::default()).unwrap();
        assert!(report.html.contains(r#"data-horizon-months="3""#));
        assert!(report.html.contains("Planned horizon: 9 months."));
    }

    #[test]
    fn test_initiative_lists() {
        let report = build_roadmap_report(&ctx(), &RenderOptions::default()).unwrap();
        assert!(report.html.contains("<li>Weekly invoicing</li>"));
    }
}
