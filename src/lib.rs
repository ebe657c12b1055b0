// Export modules for library usage
pub mod charts;
pub mod cli;
pub mod commands;
pub mod composition;
pub mod config;
pub mod core;
pub mod extraction;
pub mod financial;
pub mod formatting;
pub mod html;
pub mod io;
pub mod orchestrator;
pub mod registry;
pub mod reports;
pub mod transformers;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Chapter, ChapterCode, Deliverable, Dimension, GeneratedReport, HealthBand,
    IntermediateFileType, QuickWin, Recommendation, ReportContext, ReportMetadata, RiskFinding,
    RoadmapPhase, Severity,
};

pub use crate::config::{BrandConfig, RenderOptions};

pub use crate::extraction::{
    heuristics::{calculate_confidence, extract_estimated_value, ConfidenceSignals},
    ContentExtractor, ContentItem, ContentOrigin, DeepDiveExtractor, EstimatedValue,
    StrategicExtractor, ValueKind,
};

pub use crate::financial::{
    aggregate_financial_impact, build_category_breakdown, calculate_five_year_value,
    FinancialImpactSummary,
};

pub use crate::orchestrator::{IntegrationOrchestrator, IntegrationOutcome};

pub use crate::registry::{
    ContentRegistry, ContentRegistryEntry, ContentSelector, ContentType, DepthTier,
    InsertionPoint, IntegrationStrategy, TargetMapping, Voice,
};

pub use crate::validation::{
    FullValidationResult, IntegrationValidationError, IntegrationValidator,
};
