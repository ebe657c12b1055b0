//! Quick-wins playbook artifact.

use super::{anchors, build_metadata, render_shell};
use crate::config::RenderOptions;
use crate::core::{GeneratedReport, IntermediateFileType, QuickWin, ReportContext, SectionInfo};
use crate::extraction::heuristics::extract_estimated_value;
use crate::extraction::ValueKind;
use anyhow::Result;
use html_escape::encode_text;

pub fn build_quick_wins_report(
    ctx: &ReportContext,
    options: &RenderOptions,
) -> Result<GeneratedReport> {
    let file_type = IntermediateFileType::QuickWins;
    let title = file_type.display_name();

    let body = if ctx.quick_wins.is_empty() {
        format!(
            r#"<section id="{}"><h2>Quick Wins</h2><p class="empty-state">No quick wins were identified in this assessment.</p></section>"#,
            anchors::SEC_QUICK_WINS
        )
    } else {
        let cards: Vec<String> = ctx.quick_wins.iter().map(render_card).collect();
        format!(
            r#"<section id="{}"><h2>Quick Wins</h2><p>Improvements worth starting in the next 30 days, ordered as assessed.</p>{}</section>"#,
            anchors::SEC_QUICK_WINS,
            cards.join("")
        )
    };

    let html = render_shell(title, &body, ctx, options);
    let sections = vec![SectionInfo {
        id: anchors::SEC_QUICK_WINS.to_string(),
        title: "Quick Wins".to_string(),
    }];
    let metadata = build_metadata(file_type.slug(), title, ctx, options, &html, sections);

    Ok(GeneratedReport {
        slug: file_type.slug().to_string(),
        html,
        metadata,
    })
}

fn render_card(win: &QuickWin) -> String {
    let mut attrs = String::new();
    if let Some(days) = win.effort_days {
        attrs.push_str(&format!(r#" {}="{}""#, anchors::ATTR_EFFORT_DAYS, days));
    }
    // A parseable currency figure also lands in a structured attribute so
    // extraction does not depend on prose phrasing
    if let Some(value) = win
        .estimated_value
        .as_deref()
        .and_then(extract_estimated_value)
    {
        if value.kind == ValueKind::Currency {
            attrs.push_str(&format!(
                r#" {}="{}""#,
                anchors::ATTR_VALUE,
                format!("{:.0}", value.value)
            ));
        }
    }

    let value_line = win
        .estimated_value
        .as_deref()
        .map(|v| format!(" Estimated value: {}.", encode_text(v)))
        .unwrap_or_default();

    format!(
        r#"<div class="{}"{}><h3 class="{}">{}</h3><p class="{}">{}{}</p></div>"#,
        anchors::CLASS_QUICK_WIN_CARD,
        attrs,
        anchors::CLASS_CARD_TITLE,
        encode_text(&win.title),
        anchors::CLASS_CARD_BODY,
        encode_text(&win.description),
        value_line
    )
}
