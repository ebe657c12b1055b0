//! Audience-register adjustment.
//!
//! Deterministic phrase substitution only; the same item and voice always
//! produce the same text. Tables are ordered, longest phrase first, so a
//! containing phrase wins over its fragments.

use crate::extraction::ContentItem;
use crate::formatting::capitalize;
use crate::registry::Voice;

type Substitution = (&'static str, &'static str);

const OWNER_SUBSTITUTIONS: &[Substitution] = &[
    ("it is recommended that you", "you should"),
    ("the organization", "your business"),
    ("organizations", "businesses"),
    ("stakeholders", "your team"),
    ("facilitate", "help"),
    ("utilize", "use"),
    ("leverage", "use"),
    ("in order to", "to"),
];

const EXECUTIVE_SUBSTITUTIONS: &[Substitution] = &[
    ("it is recommended that you", "we recommend to"),
    ("your business", "the business"),
    ("you should consider", "the leadership team should weigh"),
    ("you should", "the leadership team should"),
    ("in order to", "to"),
    ("very important", "material"),
    ("big", "material"),
];

const MANAGER_SUBSTITUTIONS: &[Substitution] = &[
    ("it is recommended that you", "plan to"),
    ("the organization", "your team"),
    ("your business", "your team"),
    ("should consider", "should"),
    ("in order to", "to"),
    ("strategic", "practical"),
];

fn table_for(voice: Voice) -> &'static [Substitution] {
    match voice {
        Voice::Owner => OWNER_SUBSTITUTIONS,
        Voice::Executive => EXECUTIVE_SUBSTITUTIONS,
        Voice::Manager => MANAGER_SUBSTITUTIONS,
    }
}

/// Rewrites item text to match a target audience register
#[derive(Debug, Default)]
pub struct VoiceTransformer;

impl VoiceTransformer {
    pub fn new() -> Self {
        Self
    }

    pub fn transform(&self, item: &ContentItem, voice: Voice) -> ContentItem {
        let mut out = item.clone();
        out.title = apply_table(&out.title, voice);
        out.body = apply_table(&out.body, voice);
        out
    }
}

fn apply_table(text: &str, voice: Voice) -> String {
    let mut result = text.to_string();
    for (from, to) in table_for(voice) {
        result = replace_case_insensitive(&result, from, to);
    }
    result
}

/// Case-insensitive phrase replacement that keeps a leading capital when the
/// source phrase started the sentence capitalized. ASCII-only case folding
/// keeps byte offsets aligned with the original text.
fn replace_case_insensitive(text: &str, from: &str, to: &str) -> String {
    let lower_text: String = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    let lower_from: String = from.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(offset) = lower_text[cursor..].find(&lower_from) {
        let start = cursor + offset;
        let end = start + from.len();
        result.push_str(&text[cursor..start]);

        let source_capitalized = text[start..]
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false);
        if source_capitalized {
            result.push_str(&capitalize(to));
        } else {
            result.push_str(to);
        }
        cursor = end;
    }
    result.push_str(&text[cursor..]);
    result
}
