use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, eyre};
use sdkgen_codegen::{
    LanguageBackend, StampResult, fetch_version_info, generate_sdk, output, stamp_file,
};
use sdkgen_ir::ApiModel;

use crate::config::GenConfig;
use crate::language;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to sdkgen.toml (defaults to ./sdkgen.toml)
    #[arg(short, long, default_value = "sdkgen.toml")]
    pub config: PathBuf,

    /// Path to the parsed API model document
    #[arg(short, long, default_value = "model.json")]
    pub model: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = GenConfig::load(&self.config)?;
        let backend = language::backend_for(&config).ok_or_else(|| {
            eyre!(
                "unsupported language '{}' (supported: {})",
                config.language,
                language::SUPPORTED.join(", ")
            )
        })?;
        let model = self.load_model()?;

        let files =
            generate_sdk(&model, backend.as_ref()).wrap_err("code generation failed")?;

        if self.dry_run {
            for file in &files {
                println!("── {} ──", file.path.display());
                println!("{}", file.content);
            }
            println!("── Summary ──");
            println!("{} files would be generated", files.len());
            return Ok(());
        }

        let written = output::write_files(&self.output, &files)?;

        println!(
            "{} ({}): {} types, {} methods",
            config.package_name,
            backend.language(),
            model.types.len(),
            model.methods.len()
        );
        for path in &written {
            println!("Generated {}", path.display());
        }

        backend.reformat(&self.output);
        self.stamp(&config, backend.as_ref());

        Ok(())
    }

    fn load_model(&self) -> Result<ApiModel> {
        let content = std::fs::read_to_string(&self.model)
            .wrap_err_with(|| format!("failed to read {}", self.model.display()))?;
        serde_json::from_str(&content)
            .wrap_err_with(|| format!("failed to parse {}", self.model.display()))
    }

    /// Post-step: sync the runtime's version constants with the live
    /// server. Every failure here is a warning; generation has already
    /// succeeded.
    fn stamp(&self, config: &GenConfig, backend: &dyn LanguageBackend) {
        let Some(base_url) = &config.base_url else {
            return;
        };
        let versions = match fetch_version_info(base_url) {
            Ok(versions) => versions,
            Err(e) => {
                eprintln!("warning: version information was not retrieved, skipping stamp: {e}");
                return;
            }
        };
        let target = self.output.join(backend.stamp_target());
        match stamp_file(&target, &versions, &backend.environment_prefix()) {
            Ok(StampResult::Stamped) => println!(
                "Stamped {} to {}.{}",
                target.display(),
                versions.api_version,
                versions.product_version
            ),
            Ok(StampResult::Skipped) => {}
            Err(e) => eprintln!("warning: version stamp failed: {e}"),
        }
    }
}
