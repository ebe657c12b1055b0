//! Cross-deliverable link generation.
//!
//! A pure function of the placed content set: identical placements always
//! yield identical links, so reruns never move anchors. Items are related
//! when they share an impact area and live in different deliverables.

use crate::core::Deliverable;
use crate::extraction::ContentItem;
use crate::reports::anchors;
use std::collections::BTreeMap;

const MAX_REFS_PER_ITEM: usize = 3;

/// One outbound link rendered under a spliced content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossRef {
    pub href: String,
    pub label: String,
}

/// An item together with the deliverable it was placed in
#[derive(Debug, Clone)]
pub struct PlacedContent {
    pub item: ContentItem,
    pub deliverable: Deliverable,
}

/// Emits anchor links between related content across deliverables
#[derive(Debug, Default)]
pub struct CrossReferenceGenerator;

impl CrossReferenceGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Map from origin key to that item's outbound references, capped and
    /// ordered by (deliverable slug, origin key) for stability.
    pub fn generate(&self, placements: &[PlacedContent]) -> BTreeMap<String, Vec<CrossRef>> {
        let mut refs: BTreeMap<String, Vec<CrossRef>> = BTreeMap::new();

        for placed in placements {
            let key = placed.item.origin.key();
            let mut candidates: Vec<&PlacedContent> = placements
                .iter()
                .filter(|other| {
                    other.deliverable != placed.deliverable
                        && other.item.origin != placed.item.origin
                        && shares_impact_area(&placed.item, &other.item)
                })
                .collect();
            candidates.sort_by(|a, b| {
                (a.deliverable.slug(), a.item.origin.key())
                    .cmp(&(b.deliverable.slug(), b.item.origin.key()))
            });
            candidates.dedup_by_key(|p| (p.deliverable, p.item.origin.clone()));

            let links: Vec<CrossRef> = candidates
                .into_iter()
                .take(MAX_REFS_PER_ITEM)
                .map(|other| CrossRef {
                    href: format!(
                        "{}.html#{}",
                        other.deliverable.slug(),
                        anchors::integration_block_id(&other.item.origin.key())
                    ),
                    label: format!(
                        "{} ({})",
                        other.item.title,
                        other.deliverable.display_name()
                    ),
                })
                .collect();

            if !links.is_empty() {
                refs.entry(key).or_insert(links);
            }
        }

        refs
    }
}

fn shares_impact_area(a: &ContentItem, b: &ContentItem) -> bool {
    a.impact_areas
        .iter()
        .any(|area| b.impact_areas.contains(area))
}
