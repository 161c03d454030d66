//! Sequencing of every generator family against shared configuration.

use std::fs;
use std::path::{Path, PathBuf};

use aritygen_core::OutputFile;
use eyre::{Context, Result};

use crate::GenerationConfig;
use crate::generator::{FamilyGenerator, FamilyReport};
use crate::oneof::{OneOfGenerator, OneOfTestsGenerator};
use crate::results::{ResultExtensionsGenerator, ResultGenerator, ResultTestsGenerator};

/// The outcome of a full generation run, for narration.
#[derive(Debug)]
pub struct RunReport {
    /// Absolute source output root.
    pub source_root: PathBuf,
    /// Absolute test output root.
    pub test_root: PathBuf,
    /// Per-family reports in execution order.
    pub families: Vec<FamilyReport>,
}

impl RunReport {
    pub fn files_written(&self) -> usize {
        self.families.iter().map(|f| f.written.len()).sum()
    }

    pub fn files_removed(&self) -> usize {
        self.families.iter().map(|f| f.removed.len()).sum()
    }
}

/// Runs every family in a fixed order against one configuration.
///
/// Any failure aborts the whole run; regeneration is idempotent, so
/// re-running after fixing the underlying condition is the recovery
/// path.
pub struct Orchestrator {
    config: GenerationConfig,
}

impl Orchestrator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Every file a run would write, with root-relative paths, without
    /// touching the disk.
    pub fn preview(&self) -> Result<Vec<OutputFile>> {
        let mut files = Vec::new();
        for (generator, root) in self.sequence() {
            for file in generator.output_files()? {
                files.push(OutputFile::new(root.join(&file.path), file.content));
            }
        }
        Ok(files)
    }

    /// Resolve roots, create them, and run every family in order.
    pub fn run(&self) -> Result<RunReport> {
        let source_root = absolute(&self.config.output.source)?;
        let test_root = absolute(&self.config.output.tests)?;
        fs::create_dir_all(&source_root)
            .wrap_err_with(|| format!("Failed to create {}", source_root.display()))?;
        fs::create_dir_all(&test_root)
            .wrap_err_with(|| format!("Failed to create {}", test_root.display()))?;

        let mut families = Vec::new();
        for (generator, root) in self.sequence() {
            let root = absolute(&root)?;
            families.push(generator.generate(&root)?);
        }

        Ok(RunReport {
            source_root,
            test_root,
            families,
        })
    }

    /// The fixed family order, each paired with its output root.
    fn sequence(&self) -> Vec<(Box<dyn FamilyGenerator>, PathBuf)> {
        let source = self.config.output.source.clone();
        let tests = self.config.output.tests.clone();
        vec![
            (
                Box::new(OneOfGenerator::new(self.config.clone())) as Box<dyn FamilyGenerator>,
                source.clone(),
            ),
            (
                Box::new(OneOfTestsGenerator::new(self.config.clone())),
                tests.clone(),
            ),
            (
                Box::new(ResultGenerator::new(self.config.clone())),
                source.clone(),
            ),
            (
                Box::new(ResultExtensionsGenerator::new(self.config.clone())),
                source,
            ),
            (
                Box::new(ResultTestsGenerator::new(self.config.clone())),
                tests,
            ),
        ]
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .wrap_err_with(|| format!("Failed to resolve {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GenerationConfig {
        GenerationConfig {
            namespace: "Acme".to_string(),
            max_arity: 2,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn preview_prefixes_paths_with_the_configured_roots() {
        let files = Orchestrator::new(config()).preview().unwrap();
        assert!(files
            .iter()
            .any(|f| f.path == PathBuf::from("src/Generated/OneOf/OneOf2.cs")));
        assert!(files
            .iter()
            .any(|f| f.path == PathBuf::from("tests/Generated/Results/ResultTests1.cs")));
    }

    #[test]
    fn preview_orders_families_deterministically() {
        let first = Orchestrator::new(config()).preview().unwrap();
        let second = Orchestrator::new(config()).preview().unwrap();
        let paths = |files: &[OutputFile]| {
            files.iter().map(|f| f.path.clone()).collect::<Vec<_>>()
        };
        assert_eq!(paths(&first), paths(&second));
        // OneOf artifacts come before Result artifacts.
        let oneof = first
            .iter()
            .position(|f| f.path.ends_with("OneOf2.cs"))
            .unwrap();
        let result = first
            .iter()
            .position(|f| f.path.ends_with("Result1.cs"))
            .unwrap();
        assert!(oneof < result);
    }
}
