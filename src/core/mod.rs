pub mod types;

pub use types::{
    BrandInfo, Chapter, ChapterCode, Deliverable, Dimension, FinancialOpportunity,
    GeneratedReport, HealthBand, IntermediateFileType, QuickWin, Recommendation, ReportContext,
    ReportMetadata, RiskFinding, RoadmapPhase, SectionInfo, Severity,
};
