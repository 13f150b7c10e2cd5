//! Version-info fetch and stamp-file rewriting.
//!
//! The stamper keeps the constants embedded in the generated-code
//! runtime in sync with a live server. Both halves are recoverable:
//! a failed fetch or a missing stamp file skips the step with a warning
//! and never aborts a generation run.

use std::path::Path;
use std::sync::LazyLock;

use eyre::{Context, Result};
use regex::{NoExpand, Regex};
use serde::Deserialize;

/// Version info reported by a running server instance.
///
/// Both fields are required; a payload missing either fails the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionInfo {
    #[serde(alias = "productVersion")]
    pub product_version: String,
    #[serde(alias = "apiVersion")]
    pub api_version: String,
}

/// Outcome of a stamp attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampResult {
    /// The stamp file was rewritten.
    Stamped,
    /// The stamp file was not found; nothing was changed.
    Skipped,
}

/// Fetch `{product_version, api_version}` from the server's version-info
/// endpoint.
///
/// This is a blocking network call. Callers treat failure as
/// recoverable: warn, skip stamping, continue the run.
pub fn fetch_version_info(base_url: &str) -> Result<VersionInfo> {
    let url = format!("{}/versions", base_url.trim_end_matches('/'));
    let info = reqwest::blocking::get(&url)
        .and_then(|response| response.error_for_status())
        .wrap_err_with(|| format!("version-info request to {url} failed"))?
        .json::<VersionInfo>()
        .wrap_err("version-info payload was not in the expected shape")?;
    Ok(info)
}

static PRODUCT_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)product_version\s*=\s*['"][^'"]*['"]"#).expect("hard-coded pattern")
});
static API_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)api_version\s*=\s*['"][^'"]*['"]"#).expect("hard-coded pattern")
});
static ENVIRONMENT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)environment_prefix\s*=\s*['"][^'"]*['"]"#).expect("hard-coded pattern")
});

/// Rewrite the version constants in the runtime source file at `path`.
///
/// Performs three independent pattern-anchored literal replacements
/// (the product-version, api-version, and environment-prefix
/// assignments) and leaves every other byte of the file intact. A
/// missing file is a warning, not an error.
pub fn stamp_file(path: &Path, versions: &VersionInfo, env_prefix: &str) -> Result<StampResult> {
    if !path.is_file() {
        eprintln!(
            "warning: {} was not found, skipping version stamp",
            path.display()
        );
        return Ok(StampResult::Skipped);
    }

    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let product = format!(r#"product_version = "{}""#, versions.product_version);
    let api = format!(r#"api_version = "{}""#, versions.api_version);
    let prefix = format!(r#"environment_prefix = "{env_prefix}""#);

    let content = PRODUCT_VERSION.replace(&content, NoExpand(&product));
    let content = API_VERSION.replace(&content, NoExpand(&api));
    let content = ENVIRONMENT_PREFIX.replace(&content, NoExpand(&prefix));

    std::fs::write(path, content.as_bytes())
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(StampResult::Stamped)
}
