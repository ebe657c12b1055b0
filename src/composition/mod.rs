//! Splicing transformed content into deliverable HTML.
//!
//! Builders locate the mapping's target section by id and insert rendered
//! blocks before it, after it, or in place of its content. A missing target
//! section is a recorded omission, never an abort; composition degrades
//! per item, not per deliverable.

pub mod section;
pub mod supplement;

pub use section::SectionBuilder;
pub use supplement::SupplementBuilder;

use crate::extraction::ContentItem;
use crate::html::Document;
use crate::registry::{InsertionPoint, TargetMapping};
use crate::transformers::CrossRef;
use log::warn;
use std::collections::BTreeMap;

/// A non-fatal composition miss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionOmission {
    pub target_section: String,
    pub origin_key: String,
    pub reason: String,
}

/// Result of one build call: the (possibly unchanged) HTML plus omissions
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub html: String,
    pub omissions: Vec<InsertionOmission>,
}

/// Cross-reference lookup passed into builders
pub type CrossRefMap = BTreeMap<String, Vec<CrossRef>>;

/// Shared splice: render `block` relative to the target section of
/// `mapping` inside `target_html`.
pub(crate) fn splice(
    target_html: &str,
    block: &str,
    items: &[ContentItem],
    mapping: &TargetMapping,
) -> BuildOutcome {
    let doc = Document::parse(target_html);
    let Some(node_id) = doc.element_by_id(&mapping.target_section) else {
        warn!(
            "target section #{} not found in {:?}; skipping {} item(s)",
            mapping.target_section,
            mapping.deliverable,
            items.len()
        );
        let omissions = items
            .iter()
            .map(|item| InsertionOmission {
                target_section: mapping.target_section.clone(),
                origin_key: item.origin.key(),
                reason: "target section id not found".to_string(),
            })
            .collect();
        return BuildOutcome {
            html: target_html.to_string(),
            omissions,
        };
    };

    let node = doc.node(node_id);
    let (start, end) = node.span;
    let (inner_start, inner_end) = node.inner_span;

    let html = match mapping.insertion_point {
        InsertionPoint::Before => {
            format!("{}{}{}", &target_html[..start], block, &target_html[start..])
        }
        InsertionPoint::After => {
            format!("{}{}{}", &target_html[..end], block, &target_html[end..])
        }
        // Replace swaps the section's content but keeps its element, so the
        // section id stays resolvable for validation and later mappings.
        InsertionPoint::Replace => format!(
            "{}{}{}",
            &target_html[..inner_start],
            block,
            &target_html[inner_end..]
        ),
    };

    BuildOutcome {
        html,
        omissions: Vec::new(),
    }
}

/// Render the cross-reference footer for one item, if it has any links
pub(crate) fn render_cross_refs(origin_key: &str, cross_refs: &CrossRefMap) -> String {
    let Some(links) = cross_refs.get(origin_key) else {
        return String::new();
    };
    let rendered: Vec<String> = links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}">{}</a>"#,
                link.href,
                html_escape::encode_text(&link.label)
            )
        })
        .collect();
    format!(
        r#"<p class="cross-references">Related: {}</p>"#,
        rendered.join(" · ")
    )
}
