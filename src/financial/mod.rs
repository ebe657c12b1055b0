//! Financial impact aggregation.
//!
//! Pure arithmetic over the context's structured opportunities: totals,
//! conservative/optimistic scenarios, a weighted five-year value, and a
//! per-category breakdown. Absent opportunities yield `None`, not zeros.

use crate::core::{FinancialOpportunity, ReportContext};
use serde::Serialize;
use std::collections::BTreeMap;

/// Scenario multipliers around the base annual value
const CONSERVATIVE_FACTOR: f64 = 0.70;
const OPTIMISTIC_FACTOR: f64 = 1.25;

/// Year-over-year realization weights for the five-year projection
pub const FIVE_YEAR_WEIGHTS: [f64; 5] = [1.0, 0.95, 0.90, 0.85, 0.80];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioAnalysis {
    pub conservative_annual: f64,
    pub base_annual: f64,
    pub optimistic_annual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub annual_value: f64,
    pub percentage_of_total: f64,
    pub opportunity_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialImpactSummary {
    pub total_identified_annual_value: f64,
    pub scenario_analysis: ScenarioAnalysis,
    pub five_year_value: f64,
    pub categories: Vec<CategoryBreakdown>,
}

/// Aggregate the context's strategic opportunities into an impact summary.
/// `None` when the context carries no opportunity list at all.
pub fn aggregate_financial_impact(ctx: &ReportContext) -> Option<FinancialImpactSummary> {
    let opportunities = ctx.strategic_financial_opportunities.as_ref()?;

    let total: f64 = opportunities.iter().map(|o| o.base_annual_value).sum();

    Some(FinancialImpactSummary {
        total_identified_annual_value: total,
        scenario_analysis: ScenarioAnalysis {
            conservative_annual: total * CONSERVATIVE_FACTOR,
            base_annual: total,
            optimistic_annual: total * OPTIMISTIC_FACTOR,
        },
        five_year_value: calculate_five_year_value(total),
        categories: build_category_breakdown(opportunities),
    })
}

/// Weighted five-year value of an annual figure
pub fn calculate_five_year_value(annual_value: f64) -> f64 {
    annual_value * FIVE_YEAR_WEIGHTS.iter().sum::<f64>()
}

/// Per-category totals with percentage-of-total, rounded to one decimal.
/// Categories come back alphabetically for stable output.
pub fn build_category_breakdown(
    opportunities: &[FinancialOpportunity],
) -> Vec<CategoryBreakdown> {
    let total: f64 = opportunities.iter().map(|o| o.base_annual_value).sum();

    let mut grouped: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for opportunity in opportunities {
        let slot = grouped.entry(opportunity.category.as_str()).or_insert((0.0, 0));
        slot.0 += opportunity.base_annual_value;
        slot.1 += 1;
    }

    grouped
        .into_iter()
        .map(|(category, (annual_value, opportunity_count))| CategoryBreakdown {
            category: category.to_string(),
            annual_value,
            percentage_of_total: if total > 0.0 {
                round_one_decimal(annual_value / total * 100.0)
            } else {
                0.0
            },
            opportunity_count,
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
