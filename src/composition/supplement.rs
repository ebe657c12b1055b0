//! Compact supplement builder used by the `Supplement` integration strategy.

use super::{render_cross_refs, splice, BuildOutcome, CrossRefMap};
use crate::extraction::ContentItem;
use crate::registry::TargetMapping;
use crate::reports::anchors;
use html_escape::encode_text;

/// Renders items as a labeled aside of compact cards appended near existing
/// content, rather than standalone subsections.
#[derive(Debug, Default)]
pub struct SupplementBuilder;

impl SupplementBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        target_html: &str,
        items: &[ContentItem],
        mapping: &TargetMapping,
        cross_refs: &CrossRefMap,
    ) -> BuildOutcome {
        if items.is_empty() {
            return BuildOutcome {
                html: target_html.to_string(),
                omissions: Vec::new(),
            };
        }

        let cards: Vec<String> = items
            .iter()
            .map(|item| self.render_card(item, cross_refs))
            .collect();
        let block = format!(
            r#"<aside class="supplement-block"><h4>{}</h4>{}</aside>"#,
            encode_text(&mapping.label),
            cards.join("")
        );

        splice(target_html, &block, items, mapping)
    }

    fn render_card(&self, item: &ContentItem, cross_refs: &CrossRefMap) -> String {
        let key = item.origin.key();
        let value_note = item
            .estimated_value
            .as_ref()
            .map(|v| format!(r#" <span class="value-note">({})</span>"#, v))
            .unwrap_or_default();

        format!(
            r#"<div class="supplement-item" id="{}" data-origin="{}" data-content-type="{}"><strong>{}</strong>{} <span>{}</span>{}</div>"#,
            anchors::integration_block_id(&key),
            item.origin.source_file.slug(),
            item.content_type.slug(),
            encode_text(&item.title),
            value_note,
            encode_text(&item.body),
            render_cross_refs(&key, cross_refs)
        )
    }
}
