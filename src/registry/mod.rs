//! Content registry: declarative mapping from intermediate artifacts to
//! extraction rules and target deliverables.

mod entries;
pub mod types;

pub use types::{
    ContentRegistryEntry, ContentSelector, ContentType, DepthTier, InsertionPoint,
    IntegrationStrategy, TargetMapping, Voice,
};

use crate::core::IntermediateFileType;

/// Immutable lookup table, constructed once at startup and passed by
/// reference into the orchestrator.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    entries: Vec<ContentRegistryEntry>,
}

impl ContentRegistry {
    /// The hand-authored standard table covering every intermediate artifact
    pub fn standard() -> Self {
        Self {
            entries: entries::standard_entries(),
        }
    }

    /// Build a registry from explicit entries (tests, partial runs)
    pub fn from_entries(entries: Vec<ContentRegistryEntry>) -> Self {
        Self { entries }
    }

    /// Pure lookup; absent entries are `None`, never an error
    pub fn get(&self, source_file: IntermediateFileType) -> Option<&ContentRegistryEntry> {
        self.entries.iter().find(|e| e.source_file == source_file)
    }

    pub fn entries(&self) -> &[ContentRegistryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Deliverable;

    #[test]
    fn test_standard_covers_every_intermediate_file() {
        let registry = ContentRegistry::standard();
        for file_type in IntermediateFileType::all() {
            assert!(
                registry.get(file_type).is_some(),
                "missing registry entry for {:?}",
                file_type
            );
        }
    }

    #[test]
    fn test_get_returns_exact_entry() {
        let registry = ContentRegistry::standard();
        let entry = registry.get(IntermediateFileType::QuickWins).unwrap();
        assert_eq!(entry.source_file, IntermediateFileType::QuickWins);
        assert_eq!(entry.strategy, IntegrationStrategy::Supplement);
    }

    #[test]
    fn test_unknown_lookup_is_none() {
        let registry = ContentRegistry::from_entries(vec![]);
        assert!(registry.get(IntermediateFileType::Roadmap).is_none());
    }

    #[test]
    fn test_every_entry_has_a_required_selector_and_targets() {
        let registry = ContentRegistry::standard();
        for entry in registry.entries() {
            assert!(
                entry.extraction_config.iter().any(|s| s.required),
                "{:?} has no required selector",
                entry.source_file
            );
            assert!(
                !entry.target_mappings.is_empty(),
                "{:?} has no target mappings",
                entry.source_file
            );
        }
    }

    #[test]
    fn test_mappings_reference_declared_content_types() {
        let registry = ContentRegistry::standard();
        for entry in registry.entries() {
            for mapping in &entry.target_mappings {
                assert!(
                    entry.expected_content_types.contains(&mapping.content_type),
                    "{:?} maps undeclared content type {:?}",
                    entry.source_file,
                    mapping.content_type
                );
            }
        }
    }

    #[test]
    fn test_risk_entry_targets_brief_and_comprehensive() {
        let registry = ContentRegistry::standard();
        let entry = registry.get(IntermediateFileType::RiskProfile).unwrap();
        let targets = entry.target_deliverables();
        assert!(targets.contains(&Deliverable::Comprehensive));
        assert!(targets.contains(&Deliverable::ExecutiveBrief));
    }
}
