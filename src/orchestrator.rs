//! The three-stage integration run.
//!
//! 1. Generate: build every intermediate artifact and deliverable shell.
//!    A failing artifact is logged and yields zero content items; it never
//!    aborts the run.
//! 2. Extract & transform: lift content per the registry, adjust voice and
//!    depth per target mapping, generate cross-references.
//! 3. Compose & validate: splice blocks into deliverable shells, then
//!    validate. Validation failure propagates; the caller writes nothing.
//!
//! Stages are strictly ordered with no backtracking and no automatic retry.

use crate::composition::{InsertionOmission, SectionBuilder, SupplementBuilder};
use crate::config::RenderOptions;
use crate::core::{Deliverable, GeneratedReport, IntermediateFileType, ReportContext};
use crate::extraction::{ContentExtractor, ContentItem, DeepDiveExtractor, StrategicExtractor};
use crate::registry::{ContentRegistry, ContentRegistryEntry, InsertionPoint, IntegrationStrategy, TargetMapping};
use crate::reports::{build_deliverable_shell, build_intermediate, estimate_pages};
use crate::transformers::{
    CrossReferenceGenerator, DepthTransformer, PlacedContent, VoiceTransformer,
};
use crate::validation::{FullValidationResult, IntegrationValidator};
use anyhow::Result;
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Everything a completed run produces, before anything touches disk
#[derive(Debug)]
pub struct IntegrationOutcome {
    pub intermediates: Vec<GeneratedReport>,
    pub deliverables: BTreeMap<Deliverable, GeneratedReport>,
    pub validation: FullValidationResult,
    pub omissions: Vec<InsertionOmission>,
}

/// One transformed content group bound for one mapping's target
#[derive(Debug, Clone)]
struct StagedBlock {
    deliverable: Deliverable,
    strategy: IntegrationStrategy,
    mapping: TargetMapping,
    items: Vec<ContentItem>,
}

pub struct IntegrationOrchestrator<'a> {
    registry: &'a ContentRegistry,
    options: &'a RenderOptions,
    voice: VoiceTransformer,
    depth: DepthTransformer,
    cross_ref: CrossReferenceGenerator,
    section_builder: SectionBuilder,
    supplement_builder: SupplementBuilder,
}

impl<'a> IntegrationOrchestrator<'a> {
    pub fn new(registry: &'a ContentRegistry, options: &'a RenderOptions) -> Self {
        Self {
            registry,
            options,
            voice: VoiceTransformer::new(),
            depth: DepthTransformer::new(),
            cross_ref: CrossReferenceGenerator::new(),
            section_builder: SectionBuilder::new(),
            supplement_builder: SupplementBuilder::new(),
        }
    }

    pub fn run(&self, ctx: &ReportContext) -> Result<IntegrationOutcome> {
        let selected = self.options.selected_deliverables();

        info!("stage 1: generating intermediate artifacts");
        let intermediates = self.generate_intermediates(ctx);

        let mut shells: BTreeMap<Deliverable, GeneratedReport> = BTreeMap::new();
        for deliverable in &selected {
            shells.insert(
                *deliverable,
                build_deliverable_shell(*deliverable, ctx, self.options)?,
            );
        }

        info!("stage 2: extracting and transforming content");
        let blocks = self.stage_blocks(&intermediates, &selected);
        let placements: Vec<PlacedContent> = blocks
            .iter()
            .flat_map(|block| {
                block.items.iter().map(|item| PlacedContent {
                    item: item.clone(),
                    deliverable: block.deliverable,
                })
            })
            .collect();
        let cross_refs = self.cross_ref.generate(&placements);
        debug!(
            "{} staged block(s), {} cross-referenced item(s)",
            blocks.len(),
            cross_refs.len()
        );

        info!("stage 3: composing and validating deliverables");
        let mut omissions = Vec::new();
        let mut composed: BTreeMap<Deliverable, String> = shells
            .iter()
            .map(|(d, report)| (*d, report.html.clone()))
            .collect();

        for block in application_order(&blocks) {
            let Some(html) = composed.get_mut(&block.deliverable) else {
                continue;
            };
            let outcome = match block.strategy {
                IntegrationStrategy::Transform => {
                    self.section_builder
                        .build(html, &block.items, &block.mapping, &cross_refs)
                }
                IntegrationStrategy::Supplement => {
                    self.supplement_builder
                        .build(html, &block.items, &block.mapping, &cross_refs)
                }
            };
            *html = outcome.html;
            omissions.extend(outcome.omissions);
        }

        let validation = IntegrationValidator::new(self.registry).validate(&composed)?;

        let mut deliverables = shells;
        for (deliverable, report) in deliverables.iter_mut() {
            if let Some(html) = composed.remove(deliverable) {
                report.metadata.page_suggestion_estimate = estimate_pages(&html);
                report.html = html;
            }
        }

        Ok(IntegrationOutcome {
            intermediates,
            deliverables,
            validation,
            omissions,
        })
    }

    /// Stage 1 with per-artifact isolation: a failed builder logs and yields
    /// nothing for that file type.
    fn generate_intermediates(&self, ctx: &ReportContext) -> Vec<GeneratedReport> {
        IntermediateFileType::all()
            .into_iter()
            .filter_map(|file_type| match build_intermediate(file_type, ctx, self.options) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("intermediate {:?} failed, continuing without it: {}", file_type, e);
                    None
                }
            })
            .collect()
    }

    fn stage_blocks(
        &self,
        intermediates: &[GeneratedReport],
        selected: &[Deliverable],
    ) -> Vec<StagedBlock> {
        let mut blocks = Vec::new();

        for report in intermediates {
            let Some(file_type) = IntermediateFileType::from_slug(&report.slug) else {
                continue;
            };
            let Some(entry) = self.registry.get(file_type) else {
                debug!("no registry entry for {:?}", file_type);
                continue;
            };

            let items = extract_for(entry, &report.html);
            for mapping in &entry.target_mappings {
                if !selected.contains(&mapping.deliverable) {
                    continue;
                }
                let depth = mapping.target_depth.unwrap_or(self.options.default_depth);
                let matched: Vec<ContentItem> = items
                    .iter()
                    .filter(|item| item.content_type == mapping.content_type)
                    .map(|item| {
                        let voiced = self.voice.transform(item, mapping.target_voice);
                        self.depth.transform(&voiced, depth)
                    })
                    .collect();
                if matched.is_empty() {
                    continue;
                }
                blocks.push(StagedBlock {
                    deliverable: mapping.deliverable,
                    strategy: entry.strategy,
                    mapping: mapping.clone(),
                    items: matched,
                });
            }
        }

        blocks.sort_by(|a, b| block_key(a).cmp(&block_key(b)));
        blocks
    }
}

/// Deep-dive artifacts use the deep-dive extractor, everything else the
/// strategic one.
fn extract_for(entry: &ContentRegistryEntry, html: &str) -> Vec<ContentItem> {
    if entry.source_file.chapter().is_some() {
        DeepDiveExtractor::new().extract(html, entry)
    } else {
        StrategicExtractor::new().extract(html, entry)
    }
}

fn block_key(block: &StagedBlock) -> (&'static str, u32, u8, &'static str, String) {
    (
        block.deliverable.slug(),
        block.mapping.section_number,
        block.mapping.priority,
        block.mapping.content_type.slug(),
        block.mapping.target_section.clone(),
    )
}

/// Application order that preserves the sorted order in the final document:
/// `replace` and `before` insert at a stable boundary and apply forward;
/// `after` insertions push earlier blocks away from the section, so they
/// apply in reverse.
fn application_order(blocks: &[StagedBlock]) -> Vec<&StagedBlock> {
    let mut ordered: Vec<&StagedBlock> = blocks
        .iter()
        .filter(|b| b.mapping.insertion_point != InsertionPoint::After)
        .collect();
    let mut after: Vec<&StagedBlock> = blocks
        .iter()
        .filter(|b| b.mapping.insertion_point == InsertionPoint::After)
        .collect();
    after.reverse();
    ordered.extend(after);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        Chapter, ChapterCode, Dimension, FinancialOpportunity, QuickWin, RiskFinding,
        RoadmapPhase, Severity,
    };

    fn full_ctx() -> ReportContext {
        ReportContext {
            company_name: "Acme".to_string(),
            run_id: "run-1".to_string(),
            health_score: 58.0,
            chapters: ChapterCode::all()
                .iter()
                .map(|code| Chapter {
                    code: *code,
                    name: code.display_name().to_string(),
                    score: 55.0,
                    summary: format!("{} summary.", code.code()),
                    dimensions: (0..3)
                        .map(|i| Dimension {
                            code: format!("{}-{}", code.code(), i),
                            name: format!("{} dimension {}", code.code(), i),
                            score: 50.0 + i as f64,
                            summary: "Needs significant attention to cost control.".to_string(),
                        })
                        .collect(),
                })
                .collect(),
            risks: vec![RiskFinding {
                id: "r1".to_string(),
                title: "Customer concentration".to_string(),
                severity: Severity::High,
                description: "Top customer is 40% of revenue.".to_string(),
                impact_areas: vec!["revenue".to_string()],
                mitigation: None,
            }],
            recommendations: vec![],
            quick_wins: vec![QuickWin {
                id: "q1".to_string(),
                title: "Tighten invoicing".to_string(),
                description: "Bill weekly to recover cash faster.".to_string(),
                effort_days: Some(3),
                estimated_value: Some("$8K".to_string()),
            }],
            roadmap: vec![RoadmapPhase {
                name: "Stabilize".to_string(),
                horizon_months: 3,
                focus: "Cash first.".to_string(),
                initiatives: vec![],
            }],
            strategic_financial_opportunities: Some(vec![FinancialOpportunity {
                name: "Pricing".to_string(),
                category: "revenue".to_string(),
                base_annual_value: 375_000.0,
                confidence: 0.7,
            }]),
        }
    }

    #[test]
    fn test_full_run_composes_and_validates() {
        let registry = ContentRegistry::standard();
        let options = RenderOptions::default();
        let orchestrator = IntegrationOrchestrator::new(&registry, &options);

        let outcome = orchestrator.run(&full_ctx()).unwrap();
        assert_eq!(outcome.intermediates.len(), 8);
        assert_eq!(outcome.deliverables.len(), 5);
        assert!(outcome.validation.passed);

        let comprehensive = &outcome.deliverables[&Deliverable::Comprehensive];
        assert!(comprehensive.html.contains("integrated-item"));
        let owner = &outcome.deliverables[&Deliverable::Owner];
        assert!(owner.html.contains("supplement-item"));
    }

    #[test]
    fn test_run_is_idempotent_modulo_timestamp() {
        let registry = ContentRegistry::standard();
        let options = RenderOptions::default();
        let orchestrator = IntegrationOrchestrator::new(&registry, &options);
        let ctx = full_ctx();

        let first = orchestrator.run(&ctx).unwrap();
        let second = orchestrator.run(&ctx).unwrap();
        for (deliverable, report) in &first.deliverables {
            assert_eq!(report.html, second.deliverables[deliverable].html);
        }
        for (a, b) in first.intermediates.iter().zip(second.intermediates.iter()) {
            assert_eq!(a.html, b.html);
        }
    }

    #[test]
    fn test_validation_failure_propagates() {
        // A context with no risks leaves the required risk content type
        // unmatched everywhere
        let mut ctx = full_ctx();
        ctx.risks.clear();

        let registry = ContentRegistry::standard();
        let options = RenderOptions::default();
        let orchestrator = IntegrationOrchestrator::new(&registry, &options);

        let error = orchestrator.run(&ctx).unwrap_err();
        let validation = error
            .downcast_ref::<crate::validation::IntegrationValidationError>()
            .expect("expected a validation error");
        assert!(validation
            .violations
            .iter()
            .any(|v| v.source_file == Some(IntermediateFileType::RiskProfile)));
    }

    #[test]
    fn test_selected_deliverables_limit_composition() {
        let registry = ContentRegistry::standard();
        let options = RenderOptions {
            deliverables: vec![Deliverable::Comprehensive],
            ..Default::default()
        };
        let orchestrator = IntegrationOrchestrator::new(&registry, &options);

        let outcome = orchestrator.run(&full_ctx()).unwrap();
        assert_eq!(outcome.deliverables.len(), 1);
        assert!(outcome.deliverables.contains_key(&Deliverable::Comprehensive));
    }

    #[test]
    fn test_after_blocks_keep_sorted_order() {
        let registry = ContentRegistry::standard();
        let options = RenderOptions::default();
        let orchestrator = IntegrationOrchestrator::new(&registry, &options);

        let outcome = orchestrator.run(&full_ctx()).unwrap();
        let comprehensive = &outcome.deliverables[&Deliverable::Comprehensive].html;
        // Quick wins (priority 5) render before chapter recommendations
        // (priority 10+) in the recommendations section
        if let (Some(wins), Some(findings)) = (
            comprehensive.find("Quick Wins"),
            comprehensive.find("data-origin=\"deep-dive-strategy\""),
        ) {
            assert!(wins < findings || comprehensive.contains("quick-win"));
        }
    }
}
