use std::fs;
use std::path::PathBuf;

use aritygen_families::{FileOrganization, GenerationConfig, Orchestrator};
use clap::{Args, ValueEnum};
use eyre::{Context, Result};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to aritygen.toml (defaults to ./aritygen.toml)
    #[arg(short, long, default_value = "aritygen.toml")]
    pub config: PathBuf,

    /// Base namespace for generated code
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Highest arity to generate, inclusive
    #[arg(short, long)]
    pub arity: Option<usize>,

    /// Generated-source output root
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Generated-test output root
    #[arg(long)]
    pub test_root: Option<PathBuf>,

    /// How the factory and extension surfaces are organized
    #[arg(long, value_enum)]
    pub organization: Option<OrganizationArg>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrganizationArg {
    PerArity,
    Merged,
}

impl From<OrganizationArg> for FileOrganization {
    fn from(arg: OrganizationArg) -> Self {
        match arg {
            OrganizationArg::PerArity => Self::PerArity,
            OrganizationArg::Merged => Self::Merged,
        }
    }
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        config.validate()?;

        let orchestrator = Orchestrator::new(config);
        if self.dry_run {
            self.run_preview(&orchestrator)
        } else {
            self.run_generation(&orchestrator)
        }
    }

    /// Load the config file if present, then apply flag overrides.
    fn resolve_config(&self) -> Result<GenerationConfig> {
        let mut config = if self.config.exists() {
            let text = fs::read_to_string(&self.config)
                .wrap_err_with(|| format!("Failed to read {}", self.config.display()))?;
            GenerationConfig::parse(&text)
                .wrap_err_with(|| format!("Failed to parse {}", self.config.display()))?
        } else {
            GenerationConfig::default()
        };

        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(arity) = self.arity {
            config.max_arity = arity;
        }
        if let Some(source) = &self.source_root {
            config.output.source = source.clone();
        }
        if let Some(tests) = &self.test_root {
            config.output.tests = tests.clone();
        }
        if let Some(organization) = self.organization {
            config.organization = organization.into();
        }
        Ok(config)
    }

    fn run_preview(&self, orchestrator: &Orchestrator) -> Result<()> {
        let files = orchestrator.preview()?;
        println!("Would write {} files:", files.len());
        for file in &files {
            println!("  {}", file.path.display());
        }
        Ok(())
    }

    fn run_generation(&self, orchestrator: &Orchestrator) -> Result<()> {
        let report = orchestrator
            .run()
            .wrap_err("Failed to generate type families")?;

        println!(
            "Generated {} files ({} stale removed)",
            report.files_written(),
            report.files_removed()
        );
        println!();
        println!("Source: {}", report.source_root.display());
        println!("Tests:  {}", report.test_root.display());
        println!();
        println!("Families:");
        for family in &report.families {
            println!("  {} ({} files)", family.family, family.written.len());
        }
        Ok(())
    }
}
