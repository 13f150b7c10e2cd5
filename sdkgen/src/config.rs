//! Generator configuration loaded from `sdkgen.toml`.

use std::path::Path;

use eyre::{Context, Result};
use serde::Deserialize;

/// Per-project generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Target language backend.
    pub language: String,
    /// SDK class name emitted into the methods module.
    pub package_name: String,
    /// Package directory generated sources live under.
    pub package_path: String,
    /// Base URL of a running server instance, used by the version
    /// stamper. Stamping is skipped when unset.
    pub base_url: Option<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            language: "python".to_string(),
            package_name: "ApiSDK".to_string(),
            package_path: "api_sdk".to_string(),
            base_url: None,
        }
    }
}

impl GenConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// defaults; a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).wrap_err_with(|| format!("failed to parse {}", path.display()))
    }
}
