//! Selector-driven content extraction over rendered report HTML.
//!
//! The shared driver walks a registry entry's extraction config against a
//! parsed document; implementors decide how one matched element becomes a
//! `ContentItem` and which deliverables/sections the entry feeds.

pub mod deep_dive;
pub mod heuristics;
pub mod strategic;
pub mod types;

pub use deep_dive::DeepDiveExtractor;
pub use strategic::StrategicExtractor;
pub use types::{ContentItem, ContentOrigin, EstimatedValue, ValueKind};

use crate::core::Deliverable;
use crate::html::{Document, NodeId, SelectorList};
use crate::registry::{ContentRegistryEntry, ContentSelector};
use heuristics::{
    calculate_confidence, contains_metric, infer_impact_areas, infer_severity,
    parse_severity_label, ConfidenceSignals,
};
use log::warn;

/// Extraction over one registry entry's HTML artifact
pub trait ContentExtractor {
    /// Turn one matched element into an item; `None` drops the match
    fn extract_with_selector(
        &self,
        doc: &Document,
        node: NodeId,
        selector: &ContentSelector,
        origin: ContentOrigin,
    ) -> Option<ContentItem>;

    /// Deliverables this entry's content can land in
    fn target_deliverables(&self, entry: &ContentRegistryEntry) -> Vec<Deliverable> {
        entry.target_deliverables()
    }

    /// Target section ids within one deliverable
    fn target_sections(&self, entry: &ContentRegistryEntry, deliverable: Deliverable) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for mapping in &entry.target_mappings {
            if mapping.deliverable == deliverable && !out.contains(&mapping.target_section) {
                out.push(mapping.target_section.clone());
            }
        }
        out
    }

    /// Shared driver: run every selector in the entry's extraction config.
    ///
    /// Best-effort by design: unparsable selectors and zero-match selectors
    /// are logged and skipped, never escalated here. A `required` selector
    /// with no content anywhere surfaces later in validation.
    fn extract(&self, html: &str, entry: &ContentRegistryEntry) -> Vec<ContentItem> {
        let doc = Document::parse(html);
        let mut items = Vec::new();

        for selector in &entry.extraction_config {
            let list = match SelectorList::parse(&selector.pattern) {
                Ok(list) => list,
                Err(e) => {
                    warn!(
                        "skipping selector {:?} for {:?}: {}",
                        selector.pattern, entry.source_file, e
                    );
                    continue;
                }
            };

            let matches = list.select(&doc);
            if matches.is_empty() && selector.required {
                warn!(
                    "required selector {:?} matched nothing in {:?}",
                    selector.pattern, entry.source_file
                );
            }

            for (index, &node) in matches.iter().enumerate() {
                let origin = ContentOrigin {
                    source_file: entry.source_file,
                    selector: selector.pattern.clone(),
                    index,
                };
                if let Some(item) = self.extract_with_selector(&doc, node, selector, origin) {
                    items.push(item);
                }
            }
        }

        items
    }
}

/// Scoped sub-selector text lookup; `None` on parse failure or no match
fn sub_select_text(doc: &Document, node: NodeId, pattern: &str) -> Option<String> {
    let list = SelectorList::parse(pattern).ok()?;
    let found = list.select_within(doc, node);
    found.first().map(|&id| doc.text(id))
}

/// The shared element-to-item path both extractors build on
pub(crate) fn extract_base_item(
    doc: &Document,
    node: NodeId,
    selector: &ContentSelector,
    origin: ContentOrigin,
) -> ContentItem {
    let raw_html = doc.outer_html(node).to_string();

    let title = selector
        .title_selector
        .as_deref()
        .and_then(|pattern| sub_select_text(doc, node, pattern))
        .or_else(|| first_heading_text(doc, node))
        .unwrap_or_default();

    let body = selector
        .content_selector
        .as_deref()
        .and_then(|pattern| sub_select_text(doc, node, pattern))
        .unwrap_or_else(|| doc.text(node));

    let severity = selector
        .severity_selector
        .as_deref()
        .and_then(|pattern| sub_select_text(doc, node, pattern))
        .and_then(|label| parse_severity_label(&label))
        .or_else(|| infer_severity(&raw_html));

    let word_count = body.split_whitespace().count();
    let confidence = calculate_confidence(ConfidenceSignals {
        has_title: !title.trim().is_empty(),
        word_count,
        has_data_attributes: doc.has_attr_with_prefix(node, "data-"),
        has_metric: contains_metric(&body) || contains_metric(&title),
    });

    let impact_areas = infer_impact_areas(&raw_html);
    let estimated_value = heuristics::extract_estimated_value(&body)
        .or_else(|| heuristics::extract_estimated_value(&title));

    ContentItem {
        origin,
        content_type: selector.content_type,
        title,
        body,
        severity,
        confidence,
        impact_areas,
        estimated_value,
        visualization: None,
    }
}

fn first_heading_text(doc: &Document, node: NodeId) -> Option<String> {
    doc.descendants(node)
        .into_iter()
        .find(|&id| matches!(doc.tag(id), Some("h1" | "h2" | "h3" | "h4")))
        .map(|id| doc.text(id))
        .filter(|text| !text.trim().is_empty())
}
