//! Body-depth adjustment.
//!
//! `Standard` trims to the lead sentences; `Detailed` appends fixed-template
//! context sentences derived from item metadata. Both are deterministic.

use crate::extraction::{ContentItem, ValueKind};
use crate::registry::DepthTier;

const STANDARD_SENTENCE_LIMIT: usize = 2;

/// Expands or truncates body text to a target depth tier
#[derive(Debug, Default)]
pub struct DepthTransformer;

impl DepthTransformer {
    pub fn new() -> Self {
        Self
    }

    pub fn transform(&self, item: &ContentItem, depth: DepthTier) -> ContentItem {
        let mut out = item.clone();
        out.body = match depth {
            DepthTier::Standard => truncate_sentences(&out.body, STANDARD_SENTENCE_LIMIT),
            DepthTier::Detailed => expand(&out),
        };
        out
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for chunk in text.split_inclusive(['.', '!', '?']) {
        current.push_str(chunk);
        if chunk.ends_with(['.', '!', '?']) {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

fn truncate_sentences(text: &str, limit: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= limit {
        return text.trim().to_string();
    }
    sentences[..limit].join(" ")
}

fn expand(item: &ContentItem) -> String {
    let mut body = item.body.trim().to_string();
    if body.is_empty() {
        return body;
    }
    if !body.ends_with(['.', '!', '?']) {
        body.push('.');
    }

    if let Some(value) = &item.estimated_value {
        let sentence = match value.kind {
            ValueKind::Currency => format!(
                " The estimated value of addressing this is {} annually.",
                value
            ),
            ValueKind::Percentage => format!(" The estimated improvement is {}.", value),
            ValueKind::Time => format!(" Expect roughly {} of effort.", value),
        };
        body.push_str(&sentence);
    }

    if !item.impact_areas.is_empty() {
        body.push_str(&format!(
            " Primary impact areas: {}.",
            item.impact_areas.join(", ")
        ));
    }

    if let Some(severity) = item.severity {
        body.push_str(&format!(
            " Assessed severity: {}.",
            severity.label().to_lowercase()
        ));
    }

    body
}
