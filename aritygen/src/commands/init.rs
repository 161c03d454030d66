use std::fs;
use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};

const STARTER: &str = r#"namespace = "Acme.Monads"
max-arity = 8
organization = "per-arity"

[output]
source = "src/Generated"
tests = "tests/Generated"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to place aritygen.toml in (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let target = self.path.join("aritygen.toml");
        if target.exists() {
            bail!("{} already exists, refusing to overwrite", target.display());
        }

        fs::create_dir_all(&self.path)
            .wrap_err_with(|| format!("Failed to create {}", self.path.display()))?;
        fs::write(&target, STARTER)
            .wrap_err_with(|| format!("Failed to write {}", target.display()))?;

        println!("Created {}", target.display());
        println!();
        println!("Edit the namespace, then run: aritygen generate");
        Ok(())
    }
}
