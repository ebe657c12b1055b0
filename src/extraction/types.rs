//! Extracted content units.

use crate::core::{IntermediateFileType, Severity};
use crate::registry::ContentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of value detected in content text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Currency,
    Percentage,
    Time,
}

/// A monetary, percentage, or duration value lifted from content text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedValue {
    pub kind: ValueKind,
    pub value: f64,
    pub unit: Option<String>,
}

impl std::fmt::Display for EstimatedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::formatting::{group_thousands, trim_trailing_zeros};
        match self.kind {
            ValueKind::Currency => write!(f, "${}", group_thousands(self.value)),
            ValueKind::Percentage => write!(f, "{}%", trim_trailing_zeros(self.value)),
            ValueKind::Time => write!(
                f,
                "{} {}",
                trim_trailing_zeros(self.value),
                self.unit.as_deref().unwrap_or("days")
            ),
        }
    }
}

impl EstimatedValue {
    pub fn currency(value: f64) -> Self {
        Self {
            kind: ValueKind::Currency,
            value,
            unit: Some("USD".to_string()),
        }
    }

    pub fn percentage(value: f64) -> Self {
        Self {
            kind: ValueKind::Percentage,
            value,
            unit: None,
        }
    }

    pub fn time(value: f64, unit: &str) -> Self {
        Self {
            kind: ValueKind::Time,
            value,
            unit: Some(unit.to_string()),
        }
    }
}

/// Deterministic identity of one extracted item.
///
/// The `(source_file, selector, index)` triple is the key for
/// cross-referencing and idempotent reruns: the same input HTML and registry
/// always produce the same origins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentOrigin {
    pub source_file: IntermediateFileType,
    pub selector: String,
    pub index: usize,
}

impl ContentOrigin {
    /// Stable anchor-safe key, e.g. `deep-dive-strategy--dimension-section-0`
    pub fn key(&self) -> String {
        let selector_slug: String = self
            .selector
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        let selector_slug = selector_slug.trim_matches('-').to_string();
        let collapsed = selector_slug
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        format!("{}--{}-{}", self.source_file.slug(), collapsed, self.index)
    }
}

/// One extracted, typed unit of reusable report content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub origin: ContentOrigin,
    pub content_type: ContentType,
    pub title: String,
    pub body: String,
    pub severity: Option<Severity>,
    /// Extraction confidence in [0, 1]
    pub confidence: f64,
    pub impact_areas: Vec<String>,
    pub estimated_value: Option<EstimatedValue>,
    /// Chart-ready label/value pairs found on the element, if any
    pub visualization: Option<BTreeMap<String, f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_key_is_stable_and_anchor_safe() {
        let origin = ContentOrigin {
            source_file: IntermediateFileType::DeepDiveStrategy,
            selector: ".dimension-section[data-dimension=STR]".to_string(),
            index: 2,
        };
        let key = origin.key();
        assert_eq!(key, origin.key());
        assert!(key.starts_with("deep-dive-strategy--"));
        assert!(key.ends_with("-2"));
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }

    #[test]
    fn test_distinct_indices_distinct_keys() {
        let a = ContentOrigin {
            source_file: IntermediateFileType::QuickWins,
            selector: ".quick-win-card".to_string(),
            index: 0,
        };
        let b = ContentOrigin { index: 1, ..a.clone() };
        assert_ne!(a.key(), b.key());
    }
}
