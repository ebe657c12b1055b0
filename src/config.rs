use crate::core::Deliverable;
use crate::registry::DepthTier;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Brand palette applied to every generated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            accent_color: default_accent_color(),
        }
    }
}

fn default_primary_color() -> String {
    "#1a365d".to_string()
}

fn default_accent_color() -> String {
    "#2b6cb0".to_string()
}

/// Options controlling one report-generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Directory all HTML and metadata files are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Deliverables to compose; empty means all of them
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,

    /// Depth applied when a target mapping does not pin one
    #[serde(default = "default_depth")]
    pub default_depth: DepthTier,

    #[serde(default)]
    pub brand: BrandConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            deliverables: Vec::new(),
            default_depth: default_depth(),
            brand: BrandConfig::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_depth() -> DepthTier {
    DepthTier::Standard
}

impl RenderOptions {
    /// Deliverables this run composes, honoring the empty-means-all default
    pub fn selected_deliverables(&self) -> Vec<Deliverable> {
        if self.deliverables.is_empty() {
            Deliverable::all().to_vec()
        } else {
            self.deliverables.clone()
        }
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let options: RenderOptions = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        options.validate().map_err(anyhow::Error::msg)?;
        Ok(options)
    }

    /// Look for `healthmap.toml` beside the working directory, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate = Path::new("healthmap.toml");
        if candidate.exists() {
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), String> {
        validate_color(&self.brand.primary_color, "brand.primary_color")?;
        validate_color(&self.brand.accent_color, "brand.accent_color")?;
        Ok(())
    }
}

// Pure function: check a hex color literal like "#1a365d"
fn is_valid_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn validate_color(value: &str, name: &str) -> Result<(), String> {
    if is_valid_color(value) {
        Ok(())
    } else {
        Err(format!("{} must be a #rrggbb hex color, got {:?}", name, value))
    }
}
