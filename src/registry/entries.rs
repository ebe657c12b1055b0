//! The hand-authored standard registry table.
//!
//! One entry per intermediate artifact. Selector patterns and target
//! section ids reference the shared anchor table, so template renames and
//! registry renames cannot drift apart.

use super::types::{
    ContentRegistryEntry, ContentSelector, ContentType, DepthTier, InsertionPoint,
    IntegrationStrategy, TargetMapping, Voice,
};
use crate::core::{ChapterCode, Deliverable, IntermediateFileType};
use crate::reports::anchors;

fn class(name: &str) -> String {
    format!(".{}", name)
}

struct MappingSpec {
    content_type: ContentType,
    deliverable: Deliverable,
    target_section: &'static str,
    section_number: u32,
    label: &'static str,
    priority: u8,
    voice: Voice,
    depth: Option<DepthTier>,
    insertion: InsertionPoint,
    guidance: &'static str,
}

impl MappingSpec {
    fn build(self) -> TargetMapping {
        TargetMapping {
            content_type: self.content_type,
            deliverable: self.deliverable,
            target_section: self.target_section.to_string(),
            section_number: self.section_number,
            label: self.label.to_string(),
            priority: self.priority,
            target_voice: self.voice,
            target_depth: self.depth,
            insertion_point: self.insertion,
            transformation_guidance: self.guidance.to_string(),
        }
    }
}

fn deep_dive_entry(
    source_file: IntermediateFileType,
    chapter: ChapterCode,
    manager_deliverable: Deliverable,
    manager_section: &'static str,
) -> ContentRegistryEntry {
    ContentRegistryEntry {
        source_file,
        strategy: IntegrationStrategy::Transform,
        description: format!(
            "{} chapter analysis redistributed into audience reports",
            chapter.display_name()
        ),
        expected_content_types: vec![ContentType::Finding, ContentType::Recommendation],
        extraction_config: vec![
            ContentSelector::new(
                &format!(
                    ".{}[{}={}]",
                    anchors::CLASS_DIMENSION_SECTION,
                    anchors::ATTR_DIMENSION,
                    chapter.code()
                ),
                ContentType::Finding,
            )
            .with_title(&class(anchors::CLASS_CARD_TITLE))
            .with_content(&class(anchors::CLASS_CARD_BODY))
            .with_severity(&class(anchors::CLASS_SEVERITY_LABEL))
            .required(),
            ContentSelector::new(
                &class(anchors::CLASS_RECOMMENDATION_CARD),
                ContentType::Recommendation,
            )
            .with_title(&class(anchors::CLASS_CARD_TITLE))
            .with_content(&class(anchors::CLASS_CARD_BODY)),
        ],
        target_mappings: vec![
            MappingSpec {
                content_type: ContentType::Finding,
                deliverable: Deliverable::Comprehensive,
                target_section: anchors::SEC_KEY_FINDINGS,
                section_number: 2,
                label: "Chapter Findings",
                priority: chapter_priority(chapter),
                voice: Voice::Owner,
                depth: Some(DepthTier::Detailed),
                insertion: InsertionPoint::After,
                guidance: "Carry the full dimension analysis; keep scores visible.",
            }
            .build(),
            MappingSpec {
                content_type: ContentType::Finding,
                deliverable: manager_deliverable,
                target_section: manager_section,
                section_number: 2,
                label: "Where To Focus",
                priority: 10,
                voice: Voice::Manager,
                depth: Some(DepthTier::Standard),
                insertion: InsertionPoint::After,
                guidance: "Lead with what the manager can change this quarter.",
            }
            .build(),
            MappingSpec {
                content_type: ContentType::Recommendation,
                deliverable: Deliverable::Comprehensive,
                target_section: anchors::SEC_RECOMMENDATIONS,
                section_number: 4,
                label: "Chapter Recommendations",
                priority: chapter_priority(chapter),
                voice: Voice::Owner,
                depth: None,
                insertion: InsertionPoint::After,
                guidance: "Group with the other chapters' recommendations.",
            }
            .build(),
        ],
    }
}

fn chapter_priority(chapter: ChapterCode) -> u8 {
    match chapter {
        ChapterCode::STR => 10,
        ChapterCode::OPS => 20,
        ChapterCode::FIN => 30,
        ChapterCode::PPL => 40,
    }
}

fn quick_wins_entry() -> ContentRegistryEntry {
    ContentRegistryEntry {
        source_file: IntermediateFileType::QuickWins,
        strategy: IntegrationStrategy::Supplement,
        description: "Near-term wins surfaced in the owner and comprehensive reports".to_string(),
        expected_content_types: vec![ContentType::QuickWin],
        extraction_config: vec![ContentSelector::new(
            &class(anchors::CLASS_QUICK_WIN_CARD),
            ContentType::QuickWin,
        )
        .with_title(&class(anchors::CLASS_CARD_TITLE))
        .with_content(&class(anchors::CLASS_CARD_BODY))
        .required()],
        target_mappings: vec![
            MappingSpec {
                content_type: ContentType::QuickWin,
                deliverable: Deliverable::Owner,
                target_section: anchors::SEC_QUICK_WINS,
                section_number: 3,
                label: "This Month's Wins",
                priority: 10,
                voice: Voice::Owner,
                depth: Some(DepthTier::Standard),
                insertion: InsertionPoint::After,
                guidance: "Short, imperative, effort and payoff up front.",
            }
            .build(),
            MappingSpec {
                content_type: ContentType::QuickWin,
                deliverable: Deliverable::Comprehensive,
                target_section: anchors::SEC_RECOMMENDATIONS,
                section_number: 4,
                label: "Quick Wins",
                priority: 5,
                voice: Voice::Owner,
                depth: Some(DepthTier::Standard),
                insertion: InsertionPoint::After,
                guidance: "Place ahead of longer-horizon recommendations.",
            }
            .build(),
        ],
    }
}

fn roadmap_entry() -> ContentRegistryEntry {
    ContentRegistryEntry {
        source_file: IntermediateFileType::Roadmap,
        strategy: IntegrationStrategy::Supplement,
        description: "Transformation phases summarized for planning sections".to_string(),
        expected_content_types: vec![ContentType::RoadmapPhase],
        extraction_config: vec![ContentSelector::new(
            &class(anchors::CLASS_PHASE_CARD),
            ContentType::RoadmapPhase,
        )
        .with_title(&class(anchors::CLASS_CARD_TITLE))
        .with_content(&class(anchors::CLASS_CARD_BODY))
        .required()],
        target_mappings: vec![
            MappingSpec {
                content_type: ContentType::RoadmapPhase,
                deliverable: Deliverable::Comprehensive,
                target_section: anchors::SEC_ROADMAP_OVERVIEW,
                section_number: 6,
                label: "Transformation Phases",
                priority: 10,
                voice: Voice::Owner,
                depth: Some(DepthTier::Detailed),
                insertion: InsertionPoint::After,
                guidance: "Keep phase ordering and horizons intact.",
            }
            .build(),
            MappingSpec {
                content_type: ContentType::RoadmapPhase,
                deliverable: Deliverable::ExecutiveBrief,
                target_section: anchors::SEC_NEXT_STEPS,
                section_number: 4,
                label: "Sequenced Next Steps",
                priority: 10,
                voice: Voice::Executive,
                depth: Some(DepthTier::Standard),
                insertion: InsertionPoint::After,
                guidance: "One line per phase; no initiative detail.",
            }
            .build(),
        ],
    }
}

fn financial_entry() -> ContentRegistryEntry {
    ContentRegistryEntry {
        source_file: IntermediateFileType::Financial,
        strategy: IntegrationStrategy::Transform,
        description: "Financial opportunities and scenarios redistributed by audience".to_string(),
        expected_content_types: vec![ContentType::FinancialProjection, ContentType::Metric],
        extraction_config: vec![
            ContentSelector::new(
                &class(anchors::CLASS_OPPORTUNITY_ROW),
                ContentType::FinancialProjection,
            )
            .with_title(&class(anchors::CLASS_CARD_TITLE))
            .with_content(&class(anchors::CLASS_CARD_BODY))
            .required(),
            ContentSelector::new(&class(anchors::CLASS_SCENARIO_SUMMARY), ContentType::Metric),
        ],
        target_mappings: vec![
            MappingSpec {
                content_type: ContentType::FinancialProjection,
                deliverable: Deliverable::ExecutiveBrief,
                target_section: anchors::SEC_FINANCIAL_IMPACT,
                section_number: 3,
                label: "Value at Stake",
                priority: 10,
                voice: Voice::Executive,
                depth: Some(DepthTier::Standard),
                insertion: InsertionPoint::After,
                guidance: "Totals and top opportunities only.",
            }
            .build(),
            MappingSpec {
                content_type: ContentType::FinancialProjection,
                deliverable: Deliverable::Owner,
                target_section: anchors::SEC_FINANCIAL_IMPACT,
                section_number: 4,
                label: "Opportunity Detail",
                priority: 10,
                voice: Voice::Owner,
                depth: Some(DepthTier::Detailed),
                insertion: InsertionPoint::After,
                guidance: "Include per-opportunity values and confidence.",
            }
            .build(),
            MappingSpec {
                content_type: ContentType::Metric,
                deliverable: Deliverable::Comprehensive,
                target_section: anchors::SEC_FINANCIAL_IMPACT,
                section_number: 5,
                label: "Scenario Analysis",
                priority: 20,
                voice: Voice::Owner,
                depth: None,
                insertion: InsertionPoint::After,
                guidance: "Conservative, base, and optimistic side by side.",
            }
            .build(),
        ],
    }
}

fn risk_profile_entry() -> ContentRegistryEntry {
    ContentRegistryEntry {
        source_file: IntermediateFileType::RiskProfile,
        strategy: IntegrationStrategy::Transform,
        description: "Risk findings redistributed into overview sections".to_string(),
        expected_content_types: vec![ContentType::Risk],
        extraction_config: vec![ContentSelector::new(
            &class(anchors::CLASS_RISK_CARD),
            ContentType::Risk,
        )
        .with_title(&class(anchors::CLASS_CARD_TITLE))
        .with_content(&class(anchors::CLASS_CARD_BODY))
        .with_severity(&class(anchors::CLASS_SEVERITY_LABEL))
        .required()],
        target_mappings: vec![
            MappingSpec {
                content_type: ContentType::Risk,
                deliverable: Deliverable::Comprehensive,
                target_section: anchors::SEC_RISK_OVERVIEW,
                section_number: 3,
                label: "Identified Risks",
                priority: 10,
                voice: Voice::Owner,
                depth: Some(DepthTier::Detailed),
                insertion: InsertionPoint::After,
                guidance: "Full register, severity ordered.",
            }
            .build(),
            MappingSpec {
                content_type: ContentType::Risk,
                deliverable: Deliverable::ExecutiveBrief,
                target_section: anchors::SEC_RISK_OVERVIEW,
                section_number: 2,
                label: "Top Risks",
                priority: 10,
                voice: Voice::Executive,
                depth: Some(DepthTier::Standard),
                insertion: InsertionPoint::After,
                guidance: "High and critical severity only, one paragraph each.",
            }
            .build(),
        ],
    }
}

/// Build the full standard table
pub fn standard_entries() -> Vec<ContentRegistryEntry> {
    vec![
        deep_dive_entry(
            IntermediateFileType::DeepDiveStrategy,
            ChapterCode::STR,
            Deliverable::SalesMarketingManager,
            anchors::SEC_GROWTH_FOCUS,
        ),
        deep_dive_entry(
            IntermediateFileType::DeepDiveOperations,
            ChapterCode::OPS,
            Deliverable::OperationsManager,
            anchors::SEC_OPERATIONS_FOCUS,
        ),
        deep_dive_entry(
            IntermediateFileType::DeepDiveFinancial,
            ChapterCode::FIN,
            Deliverable::Owner,
            anchors::SEC_KEY_FINDINGS,
        ),
        deep_dive_entry(
            IntermediateFileType::DeepDivePeople,
            ChapterCode::PPL,
            Deliverable::OperationsManager,
            anchors::SEC_OPERATIONS_FOCUS,
        ),
        quick_wins_entry(),
        roadmap_entry(),
        financial_entry(),
        risk_profile_entry(),
    ]
}
