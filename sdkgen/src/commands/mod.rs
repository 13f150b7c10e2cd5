mod generate;
mod stamp;

use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use stamp::StampCommand;

#[derive(Parser)]
#[command(name = "sdkgen")]
#[command(version)]
#[command(about = "Generate SDK bindings from a language-agnostic API model")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Stamp(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SDK source files from a model document
    Generate(GenerateCommand),

    /// Update embedded version constants from a running server
    Stamp(StampCommand),
}
