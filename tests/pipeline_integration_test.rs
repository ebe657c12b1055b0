//! End-to-end runs of the three-stage integration pipeline.

mod common;

use common::sample_context;
use healthmap::config::RenderOptions;
use healthmap::core::Deliverable;
use healthmap::orchestrator::IntegrationOrchestrator;
use healthmap::registry::ContentRegistry;
use healthmap::validation::IntegrationValidationError;
use pretty_assertions::assert_eq;

#[test]
fn full_run_produces_all_artifacts_and_passes_validation() {
    let registry = ContentRegistry::standard();
    let options = RenderOptions::default();
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);

    let outcome = orchestrator.run(&sample_context()).unwrap();

    assert_eq!(outcome.intermediates.len(), 8);
    assert_eq!(outcome.deliverables.len(), 5);
    assert!(outcome.validation.passed);
    assert!(outcome.omissions.is_empty());
}

#[test]
fn composed_deliverables_carry_redistributed_content() {
    let registry = ContentRegistry::standard();
    let options = RenderOptions::default();
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);

    let outcome = orchestrator.run(&sample_context()).unwrap();

    let comprehensive = &outcome.deliverables[&Deliverable::Comprehensive].html;
    // Risk content redistributed from the risk profile artifact
    assert!(comprehensive.contains(r#"data-origin="risk-profile""#));
    assert!(comprehensive.contains("Customer concentration"));
    // Deep-dive findings land in key findings
    assert!(comprehensive.contains(r#"data-origin="deep-dive-strategy""#));

    let owner = &outcome.deliverables[&Deliverable::Owner].html;
    // Quick wins supplement the owner report
    assert!(owner.contains("supplement-block"));
    assert!(owner.contains("Tighten invoicing"));

    let brief = &outcome.deliverables[&Deliverable::ExecutiveBrief].html;
    assert!(brief.contains(r#"data-origin="financial""#));
}

#[test]
fn voice_transformation_differs_by_deliverable() {
    let registry = ContentRegistry::standard();
    let options = RenderOptions::default();
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);

    let mut ctx = sample_context();
    ctx.risks[0].description =
        "The organization should utilize a second supplier in order to reduce exposure."
            .to_string();

    let outcome = orchestrator.run(&ctx).unwrap();
    let comprehensive = &outcome.deliverables[&Deliverable::Comprehensive].html;
    // Owner voice: plain language
    assert!(comprehensive.contains("Your business should use a second supplier to reduce exposure"));
}

#[test]
fn rerun_is_byte_identical_for_html() {
    let registry = ContentRegistry::standard();
    let options = RenderOptions::default();
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);
    let ctx = sample_context();

    let first = orchestrator.run(&ctx).unwrap();
    let second = orchestrator.run(&ctx).unwrap();

    for (deliverable, report) in &first.deliverables {
        assert_eq!(report.html, second.deliverables[deliverable].html);
    }
    for (a, b) in first.intermediates.iter().zip(second.intermediates.iter()) {
        assert_eq!(a.slug, b.slug);
        assert_eq!(a.html, b.html);
    }
}

#[test]
fn missing_required_content_raises_validation_error() {
    let registry = ContentRegistry::standard();
    let options = RenderOptions::default();
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);

    let mut ctx = sample_context();
    ctx.risks.clear();

    let error = orchestrator.run(&ctx).unwrap_err();
    let validation = error
        .downcast_ref::<IntegrationValidationError>()
        .expect("expected IntegrationValidationError");
    assert!(!validation.violations.is_empty());
}

#[test]
fn single_artifact_failure_does_not_abort_run() {
    // An assessment with no chapters produces empty-state deep dives but
    // the remaining artifacts still compose
    let registry = ContentRegistry::standard();
    let options = RenderOptions {
        deliverables: vec![Deliverable::Owner, Deliverable::ExecutiveBrief],
        ..Default::default()
    };
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);

    let mut ctx = sample_context();
    ctx.chapters.clear();

    let outcome = orchestrator.run(&ctx).unwrap();
    assert_eq!(outcome.deliverables.len(), 2);
    assert!(outcome.deliverables[&Deliverable::Owner]
        .html
        .contains("Tighten invoicing"));
}

#[test]
fn cross_references_link_related_content_between_deliverables() {
    let registry = ContentRegistry::standard();
    let options = RenderOptions::default();
    let orchestrator = IntegrationOrchestrator::new(&registry, &options);

    let outcome = orchestrator.run(&sample_context()).unwrap();

    let any_cross_ref = outcome
        .deliverables
        .values()
        .any(|report| report.html.contains("cross-references"));
    assert!(any_cross_ref, "expected at least one cross-reference block");
}
