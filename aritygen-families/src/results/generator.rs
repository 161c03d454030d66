//! On-disk layout for the Result family.

use std::path::PathBuf;

use aritygen_core::{FilePattern, OutputFile};
use aritygen_csharp::SourceFile;
use eyre::Result;

use crate::{FamilyGenerator, FileOrganization, GenerationConfig};

use super::{
    AsyncVariant, build_base, build_extensions, build_factory_arity, build_failure, build_fixture,
    build_merged_factory, build_success,
};

const DIR: &str = "Results";

/// Writes `Results/Result{N}.cs`, its `.Success.cs` / `.Failure.cs`
/// siblings, and the factory surface to the source root.
pub struct ResultGenerator {
    config: GenerationConfig,
}

impl ResultGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }
}

impl FamilyGenerator for ResultGenerator {
    fn family(&self) -> &'static str {
        "Result"
    }

    fn output_files(&self) -> Result<Vec<OutputFile>> {
        let namespace = self.config.results_namespace();
        let mut files = Vec::new();
        for arity in 1..=self.config.max_arity {
            let base = SourceFile::new(namespace.clone())
                .declaration(build_base(arity, &self.config));
            files.push(OutputFile::new(
                format!("{DIR}/Result{arity}.cs"),
                base.render(),
            ));

            let success = SourceFile::new(namespace.clone())
                .declaration(build_success(arity, &self.config));
            files.push(OutputFile::new(
                format!("{DIR}/Result{arity}.Success.cs"),
                success.render(),
            ));

            let failure = SourceFile::new(namespace.clone())
                .declaration(build_failure(arity, &self.config));
            files.push(OutputFile::new(
                format!("{DIR}/Result{arity}.Failure.cs"),
                failure.render(),
            ));

            if self.config.organization == FileOrganization::PerArity {
                let factory = SourceFile::new(namespace.clone())
                    .declaration(build_factory_arity(arity, &self.config)?);
                files.push(OutputFile::new(
                    format!("{DIR}/Result{arity}.Factory.cs"),
                    factory.render(),
                ));
            }
        }
        if self.config.organization == FileOrganization::Merged {
            let factory = SourceFile::new(namespace)
                .declaration(build_merged_factory(self.config.max_arity, &self.config)?);
            files.push(OutputFile::new(
                format!("{DIR}/Result.Factory.cs"),
                factory.render(),
            ));
        }
        Ok(files)
    }

    fn stale_patterns(&self) -> Vec<(PathBuf, FilePattern)> {
        vec![(PathBuf::from(DIR), FilePattern::new("Result"))]
    }
}

/// Writes the `ResultExtensions` partial classes: the synchronous
/// rendition under `Results/`, the deferred-task and value-task
/// renditions under `Results/Tasks/` and `Results/ValueTasks/`.
pub struct ResultExtensionsGenerator {
    config: GenerationConfig,
}

impl ResultExtensionsGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    fn variant_dir(variant: AsyncVariant) -> PathBuf {
        match variant.subdir() {
            None => PathBuf::from(DIR),
            Some(subdir) => PathBuf::from(DIR).join(subdir),
        }
    }
}

const EXTENSION_VARIANTS: [AsyncVariant; 3] =
    [AsyncVariant::Sync, AsyncVariant::Task, AsyncVariant::ValueTask];

impl FamilyGenerator for ResultExtensionsGenerator {
    fn family(&self) -> &'static str {
        "Result extensions"
    }

    fn output_files(&self) -> Result<Vec<OutputFile>> {
        let namespace = self.config.results_namespace();
        let mut files = Vec::new();
        for arity in 1..=self.config.max_arity {
            for variant in EXTENSION_VARIANTS {
                let file = SourceFile::new(namespace.clone())
                    .declaration(build_extensions(arity, variant));
                files.push(OutputFile::new(
                    Self::variant_dir(variant).join(format!("ResultExtensions{arity}.cs")),
                    file.render(),
                ));
            }
        }
        Ok(files)
    }

    fn stale_patterns(&self) -> Vec<(PathBuf, FilePattern)> {
        EXTENSION_VARIANTS
            .iter()
            .map(|variant| {
                (
                    Self::variant_dir(*variant),
                    FilePattern::new("ResultExtensions"),
                )
            })
            .collect()
    }
}

/// Writes `Results/ResultTests{N}.cs` fixtures to the test root.
pub struct ResultTestsGenerator {
    config: GenerationConfig,
}

impl ResultTestsGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }
}

impl FamilyGenerator for ResultTestsGenerator {
    fn family(&self) -> &'static str {
        "Result tests"
    }

    fn output_files(&self) -> Result<Vec<OutputFile>> {
        let namespace = self.config.tests_namespace();
        let mut files = Vec::new();
        for arity in 1..=self.config.max_arity {
            let file = SourceFile::new(namespace.clone())
                .using(self.config.results_namespace())
                .using(self.config.errors_namespace())
                .declaration(build_fixture(arity)?);
            files.push(OutputFile::new(
                format!("{DIR}/ResultTests{arity}.cs"),
                file.render(),
            ));
        }
        Ok(files)
    }

    fn stale_patterns(&self) -> Vec<(PathBuf, FilePattern)> {
        vec![(PathBuf::from(DIR), FilePattern::new("ResultTests"))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_arity: usize, organization: FileOrganization) -> GenerationConfig {
        GenerationConfig {
            namespace: "Acme".to_string(),
            max_arity,
            organization,
            ..GenerationConfig::default()
        }
    }

    fn paths(files: &[OutputFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn per_arity_layout_writes_four_files_per_arity() {
        let files = ResultGenerator::new(config(2, FileOrganization::PerArity))
            .output_files()
            .unwrap();
        assert_eq!(
            paths(&files),
            [
                "Results/Result1.cs",
                "Results/Result1.Success.cs",
                "Results/Result1.Failure.cs",
                "Results/Result1.Factory.cs",
                "Results/Result2.cs",
                "Results/Result2.Success.cs",
                "Results/Result2.Failure.cs",
                "Results/Result2.Factory.cs",
            ]
        );
    }

    #[test]
    fn merged_layout_writes_one_factory_file() {
        let files = ResultGenerator::new(config(2, FileOrganization::Merged))
            .output_files()
            .unwrap();
        let all = paths(&files);
        assert!(all.contains(&"Results/Result.Factory.cs".to_string()));
        assert!(!all.iter().any(|p| p.ends_with("1.Factory.cs")));
        let factory = files.last().unwrap();
        assert!(factory.content.contains("#region Arity 1"));
        assert!(factory.content.contains("#region Arity 2"));
    }

    #[test]
    fn base_files_carry_usings_and_namespace() {
        let files = ResultGenerator::new(config(1, FileOrganization::PerArity))
            .output_files()
            .unwrap();
        let base = &files[0].content;
        assert!(base.starts_with("#nullable enable\n\nusing Acme.Errors;\nusing System;\n"));
        assert!(base.contains("namespace Acme.Results;"));
    }

    #[test]
    fn extension_variants_land_in_sibling_directories() {
        let files = ResultExtensionsGenerator::new(config(1, FileOrganization::PerArity))
            .output_files()
            .unwrap();
        assert_eq!(
            paths(&files),
            [
                "Results/ResultExtensions1.cs",
                "Results/Tasks/ResultExtensions1.cs",
                "Results/ValueTasks/ResultExtensions1.cs",
            ]
        );
        assert!(files[1].content.contains("async Task<Result<TOut>>"));
        assert!(files[2].content.contains("async ValueTask<Result<TOut>>"));
    }

    #[test]
    fn extension_pattern_does_not_claim_base_files() {
        let patterns = ResultExtensionsGenerator::new(config(1, FileOrganization::PerArity))
            .stale_patterns();
        assert_eq!(patterns.len(), 3);
        assert!(patterns[0].1.matches("ResultExtensions3.cs"));
        assert!(!patterns[0].1.matches("Result3.Success.cs"));
    }

    #[test]
    fn fixtures_import_family_and_error_namespaces() {
        let files = ResultTestsGenerator::new(config(1, FileOrganization::PerArity))
            .output_files()
            .unwrap();
        let content = &files[0].content;
        assert!(content.contains("namespace Acme.Tests;"));
        assert!(content.contains("using Acme.Errors;"));
        assert!(content.contains("using Acme.Results;"));
        assert!(content.contains("using Xunit;"));
    }
}
