//! Per-chapter deep-dive chapter reports.

use super::{anchors, build_metadata, render_shell};
use crate::charts::{radar_chart, render_or_fallback, DataPoint};
use crate::config::RenderOptions;
use crate::core::{
    ChapterCode, Dimension, GeneratedReport, IntermediateFileType, ReportContext, SectionInfo,
    Severity,
};
use anyhow::Result;
use html_escape::encode_text;

/// Build the deep-dive artifact for one chapter. A context without that
/// chapter renders an empty-state body rather than failing.
pub fn build_deep_dive_report(
    ctx: &ReportContext,
    chapter_code: ChapterCode,
    options: &RenderOptions,
) -> Result<GeneratedReport> {
    let file_type = match chapter_code {
        ChapterCode::STR => IntermediateFileType::DeepDiveStrategy,
        ChapterCode::OPS => IntermediateFileType::DeepDiveOperations,
        ChapterCode::FIN => IntermediateFileType::DeepDiveFinancial,
        ChapterCode::PPL => IntermediateFileType::DeepDivePeople,
    };
    let title = file_type.display_name();
    let section_id = anchors::chapter_section_id(chapter_code.code());

    let body = match ctx.chapter(chapter_code) {
        Some(chapter) => {
            let chart = if chapter.dimensions.len() >= 3 {
                let points: Vec<DataPoint> = chapter
                    .dimensions
                    .iter()
                    .map(|d| DataPoint::new(&d.code, d.score))
                    .collect();
                render_or_fallback(
                    &format!("{} dimension scores", chapter_code.code()),
                    radar_chart(&points, &options.brand.accent_color),
                )
            } else {
                String::new()
            };

            let dimensions: Vec<String> = chapter
                .dimensions
                .iter()
                .enumerate()
                .map(|(index, d)| render_dimension(chapter_code, index, d))
                .collect();

            let recommendations: Vec<String> = ctx
                .recommendations
                .iter()
                .filter(|r| r.chapter == Some(chapter_code))
                .map(|r| {
                    format!(
                        r#"<div class="{}"><h3 class="{}">{}</h3><p class="{}">{}</p></div>"#,
                        anchors::CLASS_RECOMMENDATION_CARD,
                        anchors::CLASS_CARD_TITLE,
                        encode_text(&r.title),
                        anchors::CLASS_CARD_BODY,
                        encode_text(&r.description),
                    )
                })
                .collect();

            format!(
                r#"<section id="{}"><h2>{}</h2><p>{}</p>{}{}{}</section>"#,
                section_id,
                encode_text(chapter_code.display_name()),
                encode_text(&chapter.summary),
                chart,
                dimensions.join(""),
                recommendations.join("")
            )
        }
        None => format!(
            r#"<section id="{}"><h2>{}</h2><p class="empty-state">This chapter was not assessed in this run.</p></section>"#,
            section_id,
            encode_text(chapter_code.display_name())
        ),
    };

    let html = render_shell(title, &body, ctx, options);
    let sections = vec![SectionInfo {
        id: section_id,
        title: chapter_code.display_name().to_string(),
    }];
    let metadata = build_metadata(file_type.slug(), title, ctx, options, &html, sections);

    Ok(GeneratedReport {
        slug: file_type.slug().to_string(),
        html,
        metadata,
    })
}

fn render_dimension(chapter_code: ChapterCode, index: usize, dimension: &Dimension) -> String {
    let severity = severity_for_score(dimension.score);
    format!(
        r#"<div class="{class}" {attr}="{code}" id="{id}"><h3 class="{title_class}">{name}</h3><span class="{sev_class}">{sev}</span><p class="{body_class}">{summary}</p><div class="score-row" data-score="{score}" data-label="{name_attr}"></div></div>"#,
        class = anchors::CLASS_DIMENSION_SECTION,
        attr = anchors::ATTR_DIMENSION,
        code = chapter_code.code(),
        id = anchors::dimension_element_id(chapter_code.code(), index),
        title_class = anchors::CLASS_CARD_TITLE,
        name = encode_text(&dimension.name),
        sev_class = anchors::CLASS_SEVERITY_LABEL,
        sev = severity.label(),
        body_class = anchors::CLASS_CARD_BODY,
        summary = encode_text(&dimension.summary),
        score = format!("{:.0}", dimension.score),
        name_attr = encode_text(&dimension.name),
    )
}

/// Low scores read as high urgency
fn severity_for_score(score: f64) -> Severity {
    match score {
        s if s < 40.0 => Severity::Critical,
        s if s < 55.0 => Severity::High,
        s if s < 70.0 => Severity::Medium,
        _ => Severity::Low,
    }
}
