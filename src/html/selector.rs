//! Selector matching over the arena.
//!
//! Supports the subset the content registry uses: `.class`, `#id`,
//! `[attr]`, `[attr=value]`, compound simple selectors
//! (`section.risk-card[data-severity=high]`), and comma-separated
//! alternatives. No combinators; nested lookups are expressed as
//! subtree-scoped queries.

use super::arena::{Document, NodeId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector pattern")]
    Empty,
    #[error("unterminated attribute selector in {0:?}")]
    UnterminatedAttribute(String),
    #[error("invalid selector fragment {0:?}")]
    InvalidFragment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Class(String),
    Id(String),
    Attr { name: String, value: Option<String> },
}

/// One alternative: every part must match the same element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    pub tag: Option<String>,
    pub parts: Vec<SimpleSelector>,
}

/// A parsed selector pattern: comma-separated alternatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    pub alternatives: Vec<CompoundSelector>,
}

impl SelectorList {
    pub fn parse(pattern: &str) -> Result<Self, SelectorError> {
        let alternatives = pattern
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_compound)
            .collect::<Result<Vec<_>, _>>()?;
        if alternatives.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { alternatives })
    }

    /// Elements matching any alternative, in document order
    pub fn select(&self, doc: &Document) -> Vec<NodeId> {
        doc.elements()
            .filter(|&id| self.matches(doc, id))
            .collect()
    }

    /// Matching descendants of `root`, excluding `root` itself
    pub fn select_within(&self, doc: &Document, root: NodeId) -> Vec<NodeId> {
        doc.descendants(root)
            .into_iter()
            .filter(|&id| self.matches(doc, id))
            .collect()
    }

    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        self.alternatives
            .iter()
            .any(|compound| matches_compound(doc, id, compound))
    }
}

fn matches_compound(doc: &Document, id: NodeId, compound: &CompoundSelector) -> bool {
    if let Some(tag) = &compound.tag {
        if doc.tag(id) != Some(tag.as_str()) {
            return false;
        }
    }
    compound.parts.iter().all(|part| match part {
        SimpleSelector::Class(class) => doc.has_class(id, class),
        SimpleSelector::Id(id_value) => doc.attr(id, "id") == Some(id_value.as_str()),
        SimpleSelector::Attr { name, value } => match (doc.attr(id, name), value) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        },
    })
}

fn parse_compound(pattern: &str) -> Result<CompoundSelector, SelectorError> {
    let mut tag = None;
    let mut parts = Vec::new();
    let mut rest = pattern;

    // Optional leading tag name
    let tag_end = rest
        .find(|c| matches!(c, '.' | '#' | '['))
        .unwrap_or(rest.len());
    if tag_end > 0 {
        let candidate = &rest[..tag_end];
        if !candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(SelectorError::InvalidFragment(candidate.to_string()));
        }
        tag = Some(candidate.to_ascii_lowercase());
        rest = &rest[tag_end..];
    }

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('.') {
            let end = stripped
                .find(|c| matches!(c, '.' | '#' | '['))
                .unwrap_or(stripped.len());
            let name = &stripped[..end];
            if name.is_empty() {
                return Err(SelectorError::InvalidFragment(pattern.to_string()));
            }
            parts.push(SimpleSelector::Class(name.to_string()));
            rest = &stripped[end..];
        } else if let Some(stripped) = rest.strip_prefix('#') {
            let end = stripped
                .find(|c| matches!(c, '.' | '#' | '['))
                .unwrap_or(stripped.len());
            let name = &stripped[..end];
            if name.is_empty() {
                return Err(SelectorError::InvalidFragment(pattern.to_string()));
            }
            parts.push(SimpleSelector::Id(name.to_string()));
            rest = &stripped[end..];
        } else if let Some(stripped) = rest.strip_prefix('[') {
            let end = stripped
                .find(']')
                .ok_or_else(|| SelectorError::UnterminatedAttribute(pattern.to_string()))?;
            let body = &stripped[..end];
            parts.push(parse_attr_selector(body)?);
            rest = &stripped[end + 1..];
        } else {
            return Err(SelectorError::InvalidFragment(rest.to_string()));
        }
    }

    if tag.is_none() && parts.is_empty() {
        return Err(SelectorError::Empty);
    }
    Ok(CompoundSelector { tag, parts })
}

fn parse_attr_selector(body: &str) -> Result<SimpleSelector, SelectorError> {
    match body.split_once('=') {
        Some((name, raw_value)) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(SelectorError::InvalidFragment(body.to_string()));
            }
            let value = raw_value.trim().trim_matches('"').trim_matches('\'');
            Ok(SimpleSelector::Attr {
                name,
                value: Some(value.to_string()),
            })
        }
        None => {
            let name = body.trim().to_string();
            if name.is_empty() {
                return Err(SelectorError::InvalidFragment(body.to_string()));
            }
            Ok(SimpleSelector::Attr { name, value: None })
        }
    }
}
