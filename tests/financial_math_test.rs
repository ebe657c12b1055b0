//! Financial aggregation properties.

mod common;

use common::sample_context;
use healthmap::core::FinancialOpportunity;
use healthmap::financial::{
    aggregate_financial_impact, build_category_breakdown, calculate_five_year_value,
};
use proptest::prelude::*;

#[test]
fn aggregate_sums_opportunity_values() {
    let summary = aggregate_financial_impact(&sample_context()).unwrap();
    assert_eq!(summary.total_identified_annual_value, 600_000.0);
}

#[test]
fn scenario_ordering_holds() {
    let summary = aggregate_financial_impact(&sample_context()).unwrap();
    let scenarios = &summary.scenario_analysis;
    assert!(scenarios.conservative_annual <= scenarios.base_annual);
    assert!(scenarios.base_annual <= scenarios.optimistic_annual);
}

#[test]
fn absent_opportunities_yield_none() {
    let mut ctx = sample_context();
    ctx.strategic_financial_opportunities = None;
    assert!(aggregate_financial_impact(&ctx).is_none());
}

#[test]
fn five_year_value_uses_decay_weights() {
    assert_eq!(calculate_five_year_value(100_000.0), 450_000.0);
    assert_eq!(calculate_five_year_value(0.0), 0.0);
}

fn opportunity(category: &str, value: f64) -> FinancialOpportunity {
    FinancialOpportunity {
        name: format!("{} opportunity", category),
        category: category.to_string(),
        base_annual_value: value,
        confidence: 0.7,
    }
}

proptest! {
    /// Category percentages stay within the documented rounding tolerance
    /// for any non-empty opportunity set
    #[test]
    fn breakdown_percentages_sum_within_tolerance(
        values in prop::collection::vec(1.0f64..1_000_000.0, 1..12)
    ) {
        let categories = ["revenue", "cost", "efficiency", "customer"];
        let opportunities: Vec<FinancialOpportunity> = values
            .iter()
            .enumerate()
            .map(|(i, v)| opportunity(categories[i % categories.len()], *v))
            .collect();

        let breakdown = build_category_breakdown(&opportunities);
        let sum: f64 = breakdown.iter().map(|c| c.percentage_of_total).sum();
        prop_assert!((95.0..=105.0).contains(&sum), "sum was {}", sum);
    }

    /// Scenario ordering is invariant across totals
    #[test]
    fn scenario_ordering_invariant(values in prop::collection::vec(0.0f64..1_000_000.0, 0..8)) {
        let mut ctx = sample_context();
        ctx.strategic_financial_opportunities = Some(
            values.iter().map(|v| opportunity("revenue", *v)).collect(),
        );
        let summary = aggregate_financial_impact(&ctx).unwrap();
        let s = &summary.scenario_analysis;
        prop_assert!(s.conservative_annual <= s.base_annual);
        prop_assert!(s.base_annual <= s.optimistic_annual);
    }
}
