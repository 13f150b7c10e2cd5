use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use sdkgen_codegen::{LanguageBackend, StampResult, fetch_version_info, stamp_file};

use crate::config::GenConfig;
use crate::language;

#[derive(Args)]
pub struct StampCommand {
    /// Path to sdkgen.toml (defaults to ./sdkgen.toml)
    #[arg(short, long, default_value = "sdkgen.toml")]
    pub config: PathBuf,

    /// Output directory the SDK was generated into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Server base URL (overrides the configured base_url)
    #[arg(long)]
    pub base_url: Option<String>,
}

impl StampCommand {
    pub fn run(&self) -> Result<()> {
        let config = GenConfig::load(&self.config)?;
        let backend = language::backend_for(&config).ok_or_else(|| {
            eyre!(
                "unsupported language '{}' (supported: {})",
                config.language,
                language::SUPPORTED.join(", ")
            )
        })?;

        let Some(base_url) = self.base_url.as_ref().or(config.base_url.as_ref()) else {
            return Err(eyre!(
                "no server base URL; set base_url in sdkgen.toml or pass --base-url"
            ));
        };

        let versions = match fetch_version_info(base_url) {
            Ok(versions) => versions,
            Err(e) => {
                eprintln!("warning: version information was not retrieved, skipping stamp: {e}");
                return Ok(());
            }
        };

        let target = self.output.join(backend.stamp_target());
        match stamp_file(&target, &versions, &backend.environment_prefix())? {
            StampResult::Stamped => {
                println!(
                    "Stamped {} to {}.{}",
                    target.display(),
                    versions.api_version,
                    versions.product_version
                );
            }
            StampResult::Skipped => {}
        }
        Ok(())
    }
}
