//! Final sanity checks over composed deliverables.
//!
//! Hard failures (a required content type absent from every mapped
//! deliverable, or an empty deliverable) raise `IntegrationValidationError`
//! with the full violation list. Soft issues come back in the result.

use crate::core::{Deliverable, IntermediateFileType};
use crate::html::{Document, SelectorList};
use crate::registry::{ContentRegistry, ContentType};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A hard validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationViolation {
    pub source_file: Option<IntermediateFileType>,
    pub content_type: Option<ContentType>,
    pub detail: String,
}

/// A non-fatal validation observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub deliverable: Option<Deliverable>,
    pub detail: String,
}

/// Outcome of a validation pass that did not hard-fail
#[derive(Debug, Clone, Serialize)]
pub struct FullValidationResult {
    pub passed: bool,
    pub issues: Vec<ValidationIssue>,
    /// Deliverables checked, with their spliced block counts
    pub block_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Error)]
#[error("integration validation failed with {} violation(s)", violations.len())]
pub struct IntegrationValidationError {
    pub violations: Vec<ValidationViolation>,
}

/// Validates composed deliverable HTML against the registry's requirements
#[derive(Debug)]
pub struct IntegrationValidator<'a> {
    registry: &'a ContentRegistry,
}

impl<'a> IntegrationValidator<'a> {
    pub fn new(registry: &'a ContentRegistry) -> Self {
        Self { registry }
    }

    pub fn validate(
        &self,
        deliverables: &BTreeMap<Deliverable, String>,
    ) -> Result<FullValidationResult, IntegrationValidationError> {
        let mut violations = Vec::new();
        let mut issues = Vec::new();
        let mut block_counts = BTreeMap::new();

        let docs: BTreeMap<Deliverable, Document> = deliverables
            .iter()
            .map(|(d, html)| (*d, Document::parse(html)))
            .collect();

        for (deliverable, html) in deliverables {
            let doc = &docs[deliverable];
            if html.trim().is_empty() || doc.elements().next().is_none() {
                violations.push(ValidationViolation {
                    source_file: None,
                    content_type: None,
                    detail: format!("deliverable {} is empty", deliverable.slug()),
                });
            }

            let open = html.matches("<section").count();
            let close = html.matches("</section>").count();
            if open != close {
                issues.push(ValidationIssue {
                    deliverable: Some(*deliverable),
                    detail: format!(
                        "unbalanced section tags in {} ({} open, {} close)",
                        deliverable.slug(),
                        open,
                        close
                    ),
                });
            }

            block_counts.insert(
                deliverable.slug().to_string(),
                count_blocks(doc),
            );
        }

        for entry in self.registry.entries() {
            for selector in entry.extraction_config.iter().filter(|s| s.required) {
                // Judge coverage against the deliverables this run actually
                // composed; a narrowed run is not penalized for mappings
                // outside its selection
                let mapped: Vec<Deliverable> = entry
                    .mappings_for(selector.content_type)
                    .iter()
                    .map(|m| m.deliverable)
                    .filter(|d| deliverables.contains_key(d))
                    .collect();
                if mapped.is_empty() {
                    continue;
                }

                let present: Vec<Deliverable> = mapped
                    .iter()
                    .copied()
                    .filter(|d| {
                        docs.get(d)
                            .map(|doc| {
                                has_content(doc, entry.source_file, selector.content_type)
                            })
                            .unwrap_or(false)
                    })
                    .collect();

                if present.is_empty() {
                    violations.push(ValidationViolation {
                        source_file: Some(entry.source_file),
                        content_type: Some(selector.content_type),
                        detail: format!(
                            "required content type {} from {} missing in every mapped deliverable",
                            selector.content_type.slug(),
                            entry.source_file.slug()
                        ),
                    });
                } else if present.len() < mapped.len() {
                    for deliverable in mapped.iter().filter(|d| !present.contains(d)) {
                        issues.push(ValidationIssue {
                            deliverable: Some(*deliverable),
                            detail: format!(
                                "content type {} from {} missing in {}",
                                selector.content_type.slug(),
                                entry.source_file.slug(),
                                deliverable.slug()
                            ),
                        });
                    }
                }
            }
        }

        if !violations.is_empty() {
            return Err(IntegrationValidationError { violations });
        }

        Ok(FullValidationResult {
            passed: true,
            issues,
            block_counts,
        })
    }
}

fn count_blocks(doc: &Document) -> usize {
    match SelectorList::parse("[data-content-type]") {
        Ok(list) => list.select(doc).len(),
        Err(_) => 0,
    }
}

fn has_content(
    doc: &Document,
    source_file: IntermediateFileType,
    content_type: ContentType,
) -> bool {
    let pattern = format!(
        "[data-origin={}][data-content-type={}]",
        source_file.slug(),
        content_type.slug()
    );
    match SelectorList::parse(&pattern) {
        Ok(list) => !list.select(doc).is_empty(),
        Err(_) => false,
    }
}
