//! Extractor for strategic artifacts: quick wins, roadmap, financial
//! analysis, and the risk profile.

use super::types::{ContentItem, ContentOrigin, EstimatedValue};
use super::{extract_base_item, ContentExtractor};
use crate::html::{Document, NodeId};
use crate::registry::ContentSelector;
use crate::reports::anchors;

/// Lifts content from the strategy-level artifacts. Beyond the shared
/// element-to-item path, it reads the structured `data-` attributes those
/// templates carry so values survive even when the prose omits them.
#[derive(Debug, Default)]
pub struct StrategicExtractor;

impl StrategicExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractor for StrategicExtractor {
    fn extract_with_selector(
        &self,
        doc: &Document,
        node: NodeId,
        selector: &ContentSelector,
        origin: ContentOrigin,
    ) -> Option<ContentItem> {
        let mut item = extract_base_item(doc, node, selector, origin);

        // Structured attributes outrank prose-derived values
        if let Some(raw) = doc.attr(node, anchors::ATTR_VALUE) {
            if let Some(value) = raw.parse::<f64>().ok().filter(|v| *v > 0.0) {
                item.estimated_value = Some(EstimatedValue::currency(value));
            }
        } else if item.estimated_value.is_none() {
            if let Some(raw) = doc.attr(node, anchors::ATTR_EFFORT_DAYS) {
                if let Ok(days) = raw.parse::<f64>() {
                    item.estimated_value = Some(EstimatedValue::time(days, "days"));
                }
            }
        }

        // Empty cards carry nothing worth redistributing
        if item.title.trim().is_empty() && item.body.trim().is_empty() {
            return None;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IntermediateFileType;
    use crate::registry::{ContentRegistry, ContentType};
    use crate::extraction::ValueKind;

    fn extract_quick_wins(html: &str) -> Vec<ContentItem> {
        let registry = ContentRegistry::standard();
        let entry = registry.get(IntermediateFileType::QuickWins).unwrap();
        StrategicExtractor::new().extract(html, entry)
    }

    #[test]
    fn test_extracts_each_card_with_indexed_origin() {
        let html = r#"
            <section id="quick-wins">
              <div class="quick-win-card"><h3 class="card-title">Tighten invoicing</h3>
                <p class="card-body">Bill weekly instead of monthly.</p></div>
              <div class="quick-win-card"><h3 class="card-title">Renegotiate software spend</h3>
                <p class="card-body">Audit unused licenses, about $8K of waste.</p></div>
            </section>"#;
        let items = extract_quick_wins(html);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].origin.index, 0);
        assert_eq!(items[1].origin.index, 1);
        assert_eq!(items[0].content_type, ContentType::QuickWin);
        assert_eq!(items[1].estimated_value.as_ref().unwrap().value, 8_000.0);
    }

    #[test]
    fn test_data_value_attribute_outranks_prose() {
        let html = r#"<div class="quick-win-card" data-value="12000">
              <h3 class="card-title">Win</h3>
              <p class="card-body">Worth roughly $5K.</p></div>"#;
        let items = extract_quick_wins(html);
        assert_eq!(items[0].estimated_value.as_ref().unwrap().value, 12_000.0);
    }

    #[test]
    fn test_effort_attribute_fills_missing_value() {
        let html = r#"<div class="quick-win-card" data-effort-days="3">
              <h3 class="card-title">Win</h3>
              <p class="card-body">No figures in prose.</p></div>"#;
        let items = extract_quick_wins(html);
        let value = items[0].estimated_value.as_ref().unwrap();
        assert_eq!(value.kind, ValueKind::Time);
        assert_eq!(value.value, 3.0);
    }

    #[test]
    fn test_empty_cards_are_dropped() {
        let html = r#"<div class="quick-win-card"></div>"#;
        assert!(extract_quick_wins(html).is_empty());
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(extract_quick_wins("<p>nothing here</p>").is_empty());
    }
}
