//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity levels for risks and extracted findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Get the display label for this severity
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// CSS class suffix used by report templates
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Low => "severity-low",
            Severity::Medium => "severity-medium",
            Severity::High => "severity-high",
            Severity::Critical => "severity-critical",
        }
    }
}

/// Overall health band derived from the 0-100 health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthBand {
    Critical,
    AtRisk,
    Stable,
    Strong,
    Thriving,
}

impl HealthBand {
    /// Classify a 0-100 health score into its band
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 40.0 => HealthBand::Critical,
            s if s < 55.0 => HealthBand::AtRisk,
            s if s < 70.0 => HealthBand::Stable,
            s if s < 85.0 => HealthBand::Strong,
            _ => HealthBand::Thriving,
        }
    }

    /// Get the display label for this band
    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Critical => "Critical",
            HealthBand::AtRisk => "At Risk",
            HealthBand::Stable => "Stable",
            HealthBand::Strong => "Strong",
            HealthBand::Thriving => "Thriving",
        }
    }
}

/// Assessment chapter codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChapterCode {
    /// Strategy & Growth
    STR,
    /// Operations & Delivery
    OPS,
    /// Financial Health
    FIN,
    /// People & Leadership
    PPL,
}

impl ChapterCode {
    pub fn code(&self) -> &'static str {
        match self {
            ChapterCode::STR => "STR",
            ChapterCode::OPS => "OPS",
            ChapterCode::FIN => "FIN",
            ChapterCode::PPL => "PPL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChapterCode::STR => "Strategy & Growth",
            ChapterCode::OPS => "Operations & Delivery",
            ChapterCode::FIN => "Financial Health",
            ChapterCode::PPL => "People & Leadership",
        }
    }

    pub fn all() -> [ChapterCode; 4] {
        [
            ChapterCode::STR,
            ChapterCode::OPS,
            ChapterCode::FIN,
            ChapterCode::PPL,
        ]
    }
}

/// Named HTML artifacts produced during stage 1 and re-parsed during stage 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntermediateFileType {
    DeepDiveStrategy,
    DeepDiveOperations,
    DeepDiveFinancial,
    DeepDivePeople,
    QuickWins,
    Roadmap,
    Financial,
    RiskProfile,
}

impl IntermediateFileType {
    /// File-name slug, used for `<slug>.html` and `<slug>.meta.json`
    pub fn slug(&self) -> &'static str {
        match self {
            IntermediateFileType::DeepDiveStrategy => "deep-dive-strategy",
            IntermediateFileType::DeepDiveOperations => "deep-dive-operations",
            IntermediateFileType::DeepDiveFinancial => "deep-dive-financial",
            IntermediateFileType::DeepDivePeople => "deep-dive-people",
            IntermediateFileType::QuickWins => "quick-wins",
            IntermediateFileType::Roadmap => "roadmap",
            IntermediateFileType::Financial => "financial",
            IntermediateFileType::RiskProfile => "risk-profile",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IntermediateFileType::DeepDiveStrategy => "Strategy & Growth Deep Dive",
            IntermediateFileType::DeepDiveOperations => "Operations & Delivery Deep Dive",
            IntermediateFileType::DeepDiveFinancial => "Financial Health Deep Dive",
            IntermediateFileType::DeepDivePeople => "People & Leadership Deep Dive",
            IntermediateFileType::QuickWins => "Quick Wins Playbook",
            IntermediateFileType::Roadmap => "Transformation Roadmap",
            IntermediateFileType::Financial => "Financial Impact Analysis",
            IntermediateFileType::RiskProfile => "Risk Profile",
        }
    }

    /// The chapter a deep-dive artifact covers, if it is one
    pub fn chapter(&self) -> Option<ChapterCode> {
        match self {
            IntermediateFileType::DeepDiveStrategy => Some(ChapterCode::STR),
            IntermediateFileType::DeepDiveOperations => Some(ChapterCode::OPS),
            IntermediateFileType::DeepDiveFinancial => Some(ChapterCode::FIN),
            IntermediateFileType::DeepDivePeople => Some(ChapterCode::PPL),
            _ => None,
        }
    }

    /// Inverse of `slug`
    pub fn from_slug(slug: &str) -> Option<IntermediateFileType> {
        IntermediateFileType::all()
            .into_iter()
            .find(|f| f.slug() == slug)
    }

    pub fn all() -> [IntermediateFileType; 8] {
        [
            IntermediateFileType::DeepDiveStrategy,
            IntermediateFileType::DeepDiveOperations,
            IntermediateFileType::DeepDiveFinancial,
            IntermediateFileType::DeepDivePeople,
            IntermediateFileType::QuickWins,
            IntermediateFileType::Roadmap,
            IntermediateFileType::Financial,
            IntermediateFileType::RiskProfile,
        ]
    }
}

/// Named report variants composed by the integration pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Deliverable {
    Comprehensive,
    Owner,
    ExecutiveBrief,
    SalesMarketingManager,
    OperationsManager,
}

impl Deliverable {
    pub fn slug(&self) -> &'static str {
        match self {
            Deliverable::Comprehensive => "comprehensive",
            Deliverable::Owner => "owner",
            Deliverable::ExecutiveBrief => "executive-brief",
            Deliverable::SalesMarketingManager => "sales-marketing-manager",
            Deliverable::OperationsManager => "operations-manager",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Deliverable::Comprehensive => "Comprehensive Business Health Report",
            Deliverable::Owner => "Owner's Report",
            Deliverable::ExecutiveBrief => "Executive Brief",
            Deliverable::SalesMarketingManager => "Sales & Marketing Manager Report",
            Deliverable::OperationsManager => "Operations Manager Report",
        }
    }

    pub fn all() -> [Deliverable; 5] {
        [
            Deliverable::Comprehensive,
            Deliverable::Owner,
            Deliverable::ExecutiveBrief,
            Deliverable::SalesMarketingManager,
            Deliverable::OperationsManager,
        ]
    }
}

/// A scored assessment dimension within a chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    pub code: String,
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub summary: String,
}

/// A scored assessment chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub code: ChapterCode,
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

/// An identified business risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFinding {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub description: String,
    #[serde(default)]
    pub impact_areas: Vec<String>,
    #[serde(default)]
    pub mitigation: Option<String>,
}

/// A prioritized recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Severity,
    /// Chapter the recommendation belongs to, when it has one
    #[serde(default)]
    pub chapter: Option<ChapterCode>,
    #[serde(default)]
    pub impact_areas: Vec<String>,
    /// Free-text value statement, e.g. "$120K annual" or "15% margin lift"
    #[serde(default)]
    pub estimated_value: Option<String>,
}

/// A near-term, low-effort improvement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickWin {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub effort_days: Option<u32>,
    #[serde(default)]
    pub estimated_value: Option<String>,
}

/// One phase of the transformation roadmap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub name: String,
    pub horizon_months: u32,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub initiatives: Vec<String>,
}

/// A structured financial opportunity used by the impact analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialOpportunity {
    pub name: String,
    pub category: String,
    pub base_annual_value: f64,
    /// Realization confidence in [0, 1]
    #[serde(default = "default_opportunity_confidence")]
    pub confidence: f64,
}

fn default_opportunity_confidence() -> f64 {
    0.7
}

/// The typed assessment result tree consumed by report builders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContext {
    pub company_name: String,
    pub run_id: String,
    pub health_score: f64,
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub risks: Vec<RiskFinding>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub quick_wins: Vec<QuickWin>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapPhase>,
    #[serde(default)]
    pub strategic_financial_opportunities: Option<Vec<FinancialOpportunity>>,
}

impl ReportContext {
    pub fn health_band(&self) -> HealthBand {
        HealthBand::from_score(self.health_score)
    }

    pub fn chapter(&self, code: ChapterCode) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.code == code)
    }
}

/// Section descriptor recorded in metadata sidecars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub id: String,
    pub title: String,
}

/// Brand colors recorded in metadata sidecars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    pub primary_color: String,
    pub accent_color: String,
}

/// Fixed-shape metadata written next to every generated HTML file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub report_type: String,
    pub report_name: String,
    pub generated_at: DateTime<Utc>,
    pub company_name: String,
    pub run_id: String,
    pub health_score: f64,
    pub health_band: HealthBand,
    pub page_suggestion_estimate: u32,
    pub sections: Vec<SectionInfo>,
    pub brand: BrandInfo,
}

/// One rendered report artifact: HTML plus its metadata sidecar
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub slug: String,
    pub html: String,
    pub metadata: ReportMetadata,
}
