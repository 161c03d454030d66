mod generate;
mod init;

use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

#[derive(Parser)]
#[command(name = "aritygen")]
#[command(version)]
#[command(about = "Generate arity-specialized C# type families from a TOML configuration")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter aritygen.toml
    Init(InitCommand),

    /// Generate the configured type families
    Generate(GenerateCommand),
}
