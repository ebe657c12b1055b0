//! Shared section ids and marker classes.
//!
//! Report templates emit these and registry selectors consume them, so both
//! sides reference one table. Renaming an anchor here changes producer and
//! consumer together; there is no second copy to drift.

// Deliverable section ids
pub const SEC_EXECUTIVE_SUMMARY: &str = "executive-summary";
pub const SEC_KEY_FINDINGS: &str = "key-findings";
pub const SEC_RISK_OVERVIEW: &str = "risk-overview";
pub const SEC_RECOMMENDATIONS: &str = "recommendations";
pub const SEC_QUICK_WINS: &str = "quick-wins";
pub const SEC_FINANCIAL_IMPACT: &str = "financial-impact";
pub const SEC_ROADMAP_OVERVIEW: &str = "roadmap-overview";
pub const SEC_GROWTH_FOCUS: &str = "growth-focus";
pub const SEC_OPERATIONS_FOCUS: &str = "operations-focus";
pub const SEC_NEXT_STEPS: &str = "next-steps";
pub const SEC_APPENDIX: &str = "appendix";

// Marker classes on extractable elements
pub const CLASS_DIMENSION_SECTION: &str = "dimension-section";
pub const CLASS_RISK_CARD: &str = "risk-card";
pub const CLASS_RECOMMENDATION_CARD: &str = "recommendation-card";
pub const CLASS_QUICK_WIN_CARD: &str = "quick-win-card";
pub const CLASS_PHASE_CARD: &str = "phase-card";
pub const CLASS_OPPORTUNITY_ROW: &str = "financial-opportunity";
pub const CLASS_SCENARIO_SUMMARY: &str = "scenario-summary";
pub const CLASS_CARD_TITLE: &str = "card-title";
pub const CLASS_CARD_BODY: &str = "card-body";
pub const CLASS_SEVERITY_LABEL: &str = "severity-label";
pub const CLASS_CHART_CONTAINER: &str = "svg-chart-container";

// Data attributes
pub const ATTR_DIMENSION: &str = "data-dimension";
pub const ATTR_SEVERITY: &str = "data-severity";
pub const ATTR_EFFORT_DAYS: &str = "data-effort-days";
pub const ATTR_VALUE: &str = "data-value";

/// Per-chapter detail section id in deep-dive artifacts, e.g. `chapter-STR`
pub fn chapter_section_id(code: &str) -> String {
    format!("chapter-{}", code)
}

/// Per-dimension element id in deep-dive artifacts, e.g. `dimension-STR-2`
pub fn dimension_element_id(chapter: &str, index: usize) -> String {
    format!("dimension-{}-{}", chapter, index)
}

/// Id of a spliced integration block in a deliverable, derived from the
/// content item's origin key so reruns produce the same anchors
pub fn integration_block_id(origin_key: &str) -> String {
    format!("int-{}", origin_key)
}
