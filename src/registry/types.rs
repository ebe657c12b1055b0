//! Declarative content-registry types.
//!
//! A registry entry tells the pipeline, for one intermediate artifact: which
//! elements to lift (extraction config), and where the lifted content lands
//! (target mappings). Entries are data; all behavior lives in the
//! extractors and builders that interpret them.

use crate::core::{Deliverable, IntermediateFileType};
use serde::{Deserialize, Serialize};

/// Kinds of reusable content the extractors produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    Finding,
    Recommendation,
    QuickWin,
    Risk,
    FinancialProjection,
    RoadmapPhase,
    Metric,
}

impl ContentType {
    /// Attribute-safe tag emitted on spliced blocks and checked by validation
    pub fn slug(&self) -> &'static str {
        match self {
            ContentType::Finding => "finding",
            ContentType::Recommendation => "recommendation",
            ContentType::QuickWin => "quick-win",
            ContentType::Risk => "risk",
            ContentType::FinancialProjection => "financial-projection",
            ContentType::RoadmapPhase => "roadmap-phase",
            ContentType::Metric => "metric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Finding => "Finding",
            ContentType::Recommendation => "Recommendation",
            ContentType::QuickWin => "Quick Win",
            ContentType::Risk => "Risk",
            ContentType::FinancialProjection => "Financial Projection",
            ContentType::RoadmapPhase => "Roadmap Phase",
            ContentType::Metric => "Metric",
        }
    }
}

/// How an entry's content is integrated into its targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStrategy {
    /// Rewrite and redistribute existing content into new locations
    Transform,
    /// Insert additional subsections after existing content
    Supplement,
}

/// Audience register applied by the voice transformer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Owner,
    Executive,
    Manager,
}

/// Body-text depth applied by the depth transformer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthTier {
    Standard,
    Detailed,
}

/// Position of spliced content relative to the target section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionPoint {
    Before,
    After,
    Replace,
}

/// One declarative extraction rule
#[derive(Debug, Clone)]
pub struct ContentSelector {
    /// Selector pattern: `.class`, `#id`, `[attr=value]`, compounds,
    /// comma-separated alternatives
    pub pattern: String,
    pub content_type: ContentType,
    /// Sub-selector for the item title, scoped to the matched element
    pub title_selector: Option<String>,
    /// Sub-selector for the item body, scoped to the matched element
    pub content_selector: Option<String>,
    /// Sub-selector whose text names the severity, scoped to the element
    pub severity_selector: Option<String>,
    /// Required selectors must yield content in at least one target
    /// deliverable; enforced by validation, not at extraction time
    pub required: bool,
}

impl ContentSelector {
    pub fn new(pattern: &str, content_type: ContentType) -> Self {
        Self {
            pattern: pattern.to_string(),
            content_type,
            title_selector: None,
            content_selector: None,
            severity_selector: None,
            required: false,
        }
    }

    pub fn with_title(mut self, selector: &str) -> Self {
        self.title_selector = Some(selector.to_string());
        self
    }

    pub fn with_content(mut self, selector: &str) -> Self {
        self.content_selector = Some(selector.to_string());
        self
    }

    pub fn with_severity(mut self, selector: &str) -> Self {
        self.severity_selector = Some(selector.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Where one content type from an entry lands in one deliverable
#[derive(Debug, Clone)]
pub struct TargetMapping {
    pub content_type: ContentType,
    pub deliverable: Deliverable,
    /// Section id in the deliverable shell the content anchors to
    pub target_section: String,
    pub section_number: u32,
    /// Heading label used when the builder introduces the spliced block
    pub label: String,
    /// Ordering weight within a section; lower renders first
    pub priority: u8,
    pub target_voice: Voice,
    pub target_depth: Option<DepthTier>,
    pub insertion_point: InsertionPoint,
    /// Free-text editorial instruction; recorded, not executed
    pub transformation_guidance: String,
}

/// Registry entry for one intermediate file type
#[derive(Debug, Clone)]
pub struct ContentRegistryEntry {
    pub source_file: IntermediateFileType,
    pub strategy: IntegrationStrategy,
    pub description: String,
    pub expected_content_types: Vec<ContentType>,
    pub extraction_config: Vec<ContentSelector>,
    pub target_mappings: Vec<TargetMapping>,
}

impl ContentRegistryEntry {
    /// Mappings that apply to one content type
    pub fn mappings_for(&self, content_type: ContentType) -> Vec<&TargetMapping> {
        self.target_mappings
            .iter()
            .filter(|m| m.content_type == content_type)
            .collect()
    }

    /// Deliverables any of this entry's content can land in
    pub fn target_deliverables(&self) -> Vec<Deliverable> {
        let mut out: Vec<Deliverable> = Vec::new();
        for mapping in &self.target_mappings {
            if !out.contains(&mapping.deliverable) {
                out.push(mapping.deliverable);
            }
        }
        out
    }
}
