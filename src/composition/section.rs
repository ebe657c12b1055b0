//! Full-subsection builder used by the `Transform` integration strategy.

use super::{render_cross_refs, splice, BuildOutcome, CrossRefMap};
use crate::extraction::ContentItem;
use crate::registry::TargetMapping;
use crate::reports::anchors;
use html_escape::encode_text;

/// Renders items as standalone subsections and splices them at the
/// mapping's insertion point.
#[derive(Debug, Default)]
pub struct SectionBuilder;

impl SectionBuilder {
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

        let blocks: Vec<String> = items
            .iter()
            .map(|item| self.render_item(item, cross_refs))
            .collect();
        let block = format!(
            r#"<div class="integrated-section" data-section-label="{}">{}</div>"#,
            encode_text(&mapping.label),
            blocks.join("")
        );

        splice(target_html, &block, items, mapping)
    }

    fn render_item(&self, item: &ContentItem, cross_refs: &CrossRefMap) -> String {
        let key = item.origin.key();
        let severity_badge = item
            .severity
            .map(|s| {
                format!(
                    r#"<span class="{}">{}</span>"#,
                    s.css_class(),
                    s.label()
                )
            })
            .unwrap_or_default();
        let value_line = item
            .estimated_value
            .as_ref()
            .map(|v| format!(r#"<p class="value-line">Estimated value: {}</p>"#, v))
            .unwrap_or_default();

        format!(
            r#"<section class="integrated-item" id="{}" data-origin="{}" data-content-type="{}"><h3>{}</h3>{}<p>{}</p>{}{}</section>"#,
            anchors::integration_block_id(&key),
            item.origin.source_file.slug(),
            item.content_type.slug(),
            encode_text(&item.title),
            severity_badge,
            encode_text(&item.body),
            value_line,
            render_cross_refs(&key, cross_refs)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deliverable, IntermediateFileType, Severity};
    use crate::extraction::{ContentOrigin, EstimatedValue};
    use crate::registry::{ContentType, InsertionPoint, Voice};
    use crate::transformers::CrossRef;

    fn mapping() -> TargetMapping {
        TargetMapping {
            content_type: ContentType::Risk,
            deliverable: Deliverable::Comprehensive,
            target_section: "risk-overview".to_string(),
            section_number: 3,
            label: "Identified Risks".to_string(),
            priority: 10,
            target_voice: Voice::Owner,
            target_depth: None,
            insertion_point: InsertionPoint::After,
            transformation_guidance: String::new(),
        }
    }

    fn item() -> ContentItem {
        ContentItem {
            origin: ContentOrigin {
                source_file: IntermediateFileType::RiskProfile,
                selector: ".risk-card".to_string(),
                index: 0,
            },
            content_type: ContentType::Risk,
            title: "Key-person dependency".to_string(),
            body: "Operations depend on one person.".to_string(),
            severity: Some(Severity::High),
            confidence: 0.8,
            impact_areas: vec!["team".to_string()],
            estimated_value: Some(EstimatedValue::currency(50_000.0)),
            visualization: None,
        }
    }

    const TARGET: &str = r#"<main><section id="risk-overview"><h2>Risks</h2></section></main>"#;

    #[test]
    fn test_builds_identified_block_after_section() {
        let outcome = SectionBuilder::new().build(TARGET, &[item()], &mapping(), &CrossRefMap::new());
        assert!(outcome.omissions.is_empty());
        assert!(outcome.html.contains(r#"data-section-label="Identified Risks""#));
        assert!(outcome.html.contains("Key-person dependency"));
        assert!(outcome.html.contains("severity-high"));
        assert!(outcome.html.contains("Estimated value: $50,000"));
        // Block lands after the section element
        let section_end = outcome.html.find("</section>").unwrap();
        let block_start = outcome.html.find("integrated-section").unwrap();
        assert!(block_start > section_end);
    }

    #[test]
    fn test_item_anchor_uses_origin_key() {
        let outcome = SectionBuilder::new().build(TARGET, &[item()], &mapping(), &CrossRefMap::new());
        let expected = anchors::integration_block_id(&item().origin.key());
        assert!(outcome.html.contains(&format!(r#"id="{}""#, expected)));
    }

    #[test]
    fn test_cross_refs_rendered() {
        let mut refs = CrossRefMap::new();
        refs.insert(
            item().origin.key(),
            vec![CrossRef {
                href: "owner.html#int-x".to_string(),
                label: "Related win".to_string(),
            }],
        );
        let outcome = SectionBuilder::new().build(TARGET, &[item()], &mapping(), &refs);
        assert!(outcome.html.contains(r#"<a href="owner.html#int-x">Related win</a>"#));
    }

    #[test]
    fn test_body_text_is_escaped() {
        let mut risky = item();
        risky.body = "a < b & \"c\"".to_string();
        let outcome = SectionBuilder::new().build(TARGET, &[risky], &mapping(), &CrossRefMap::new());
        assert!(outcome.html.contains("a &lt; b &amp; &quot;c&quot;"));
    }

    #[test]
    fn test_empty_items_leave_target_untouched() {
        let outcome = SectionBuilder::new().build(TARGET, &[], &mapping(), &CrossRefMap::new());
        assert_eq!(outcome.html, TARGET);
    }
}
