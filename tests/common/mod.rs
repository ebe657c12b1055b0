//! Shared fixtures for integration tests.

use healthmap::core::{
    Chapter, ChapterCode, Dimension, FinancialOpportunity, QuickWin, Recommendation,
    ReportContext, RiskFinding, RoadmapPhase, Severity,
};

/// A fully populated assessment covering every chapter and artifact
pub fn sample_context() -> ReportContext {
    ReportContext {
        company_name: "Harbor Light Outfitters".to_string(),
        run_id: "run-2026-001".to_string(),
        health_score: 58.0,
        chapters: ChapterCode::all()
            .iter()
            .map(|code| Chapter {
                code: *code,
                name: code.display_name().to_string(),
                score: 55.0,
                summary: format!("{} needs attention.", code.display_name()),
                dimensions: (0..4)
                    .map(|i| Dimension {
                        code: format!("{}-{}", code.code(), i + 1),
                        name: format!("{} dimension {}", code.code(), i + 1),
                        score: 45.0 + (i as f64) * 8.0,
                        summary: "Performance lags peers; a significant gap in process \
                                  discipline is eroding margin."
                            .to_string(),
                    })
                    .collect(),
            })
            .collect(),
        risks: vec![
            RiskFinding {
                id: "risk-1".to_string(),
                title: "Customer concentration".to_string(),
                severity: Severity::Critical,
                description: "The top customer represents 40% of revenue; losing them \
                              would be an urgent cash problem."
                    .to_string(),
                impact_areas: vec!["revenue".to_string(), "cash flow".to_string()],
                mitigation: Some("Diversify the pipeline over two quarters.".to_string()),
            },
            RiskFinding {
                id: "risk-2".to_string(),
                title: "Key-person dependency".to_string(),
                severity: Severity::High,
                description: "Operations knowledge sits with one manager.".to_string(),
                impact_areas: vec!["team".to_string()],
                mitigation: None,
            },
        ],
        recommendations: vec![Recommendation {
            id: "rec-1".to_string(),
            title: "Sharpen the value proposition".to_string(),
            description: "Interview the last 10 closed-lost deals in order to find the \
                          pattern."
                .to_string(),
            priority: Severity::High,
            chapter: Some(ChapterCode::STR),
            impact_areas: vec!["revenue".to_string()],
            estimated_value: Some("$120K annual".to_string()),
        }],
        quick_wins: vec![
            QuickWin {
                id: "qw-1".to_string(),
                title: "Tighten invoicing".to_string(),
                description: "Bill weekly instead of monthly to pull cash forward."
                    .to_string(),
                effort_days: Some(3),
                estimated_value: Some("$8K of recovered cash".to_string()),
            },
            QuickWin {
                id: "qw-2".to_string(),
                title: "Renegotiate software spend".to_string(),
                description: "Audit unused licenses across the team.".to_string(),
                effort_days: Some(5),
                estimated_value: Some("15% reduction".to_string()),
            },
        ],
        roadmap: vec![
            RoadmapPhase {
                name: "Stabilize".to_string(),
                horizon_months: 3,
                focus: "Cash collection and cost control first.".to_string(),
                initiatives: vec!["Weekly invoicing".to_string(), "License audit".to_string()],
            },
            RoadmapPhase {
                name: "Strengthen".to_string(),
                horizon_months: 9,
                focus: "Rebuild pipeline discipline.".to_string(),
                initiatives: vec!["Win/loss program".to_string()],
            },
        ],
        strategic_financial_opportunities: Some(vec![
            FinancialOpportunity {
                name: "Pricing discipline".to_string(),
                category: "revenue".to_string(),
                base_annual_value: 375_000.0,
                confidence: 0.7,
            },
            FinancialOpportunity {
                name: "Procurement consolidation".to_string(),
                category: "cost".to_string(),
                base_annual_value: 225_000.0,
                confidence: 0.8,
            },
        ]),
    }
}
