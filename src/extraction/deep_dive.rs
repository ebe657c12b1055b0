//! Extractor for per-chapter deep-dive artifacts.

use super::types::{ContentItem, ContentOrigin};
use super::{extract_base_item, ContentExtractor};
use crate::html::{Document, NodeId, SelectorList};
use crate::registry::ContentSelector;
use crate::reports::anchors;
use std::collections::BTreeMap;

/// Lifts dimension findings and recommendations from deep-dive chapters.
/// Findings carry the dimension code in their title when the heading omits
/// it, and collect sibling dimension scores as chart-ready data.
#[derive(Debug, Default)]
pub struct DeepDiveExtractor;

impl DeepDiveExtractor {
    pub fn new() -> Self {
        Self
    }

    fn collect_scores(doc: &Document, node: NodeId) -> Option<BTreeMap<String, f64>> {
        let list = SelectorList::parse("[data-score]").ok()?;
        let mut scores = BTreeMap::new();
        for id in list.select_within(doc, node) {
            let label = doc
                .attr(id, "data-label")
                .map(str::to_string)
                .unwrap_or_else(|| doc.text(id));
            if let Some(score) = doc.attr(id, "data-score").and_then(|s| s.parse::<f64>().ok()) {
                scores.insert(label, score);
            }
        }
        if scores.is_empty() {
            None
        } else {
            Some(scores)
        }
    }
}

impl ContentExtractor for DeepDiveExtractor {
    fn extract_with_selector(
        &self,
        doc: &Document,
        node: NodeId,
        selector: &ContentSelector,
        origin: ContentOrigin,
    ) -> Option<ContentItem> {
        let mut item = extract_base_item(doc, node, selector, origin);

        if let Some(dimension) = doc.attr(node, anchors::ATTR_DIMENSION) {
            if !item.title.contains(dimension) {
                if item.title.is_empty() {
                    item.title = format!("{} dimension", dimension);
                } else {
                    item.title = format!("{}: {}", dimension, item.title);
                }
            }
        }

        item.visualization = Self::collect_scores(doc, node);

        if item.title.trim().is_empty() && item.body.trim().is_empty() {
            return None;
        }
        Some(item)
    }
}
