//! On-disk layout for the OneOf family.

use std::path::PathBuf;

use aritygen_core::{FilePattern, OutputFile, ordinal};
use aritygen_csharp::SourceFile;
use eyre::Result;

use crate::{FamilyGenerator, GenerationConfig};

use super::{MIN_ARITY, build_base, build_case, build_fixture};

const DIR: &str = "OneOf";

/// Writes `OneOf/OneOf{N}.cs` and one `OneOf/OneOf{N}.<Ordinal>.cs`
/// per position to the source root.
pub struct OneOfGenerator {
    config: GenerationConfig,
}

impl OneOfGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }
}

impl FamilyGenerator for OneOfGenerator {
    fn family(&self) -> &'static str {
        "OneOf"
    }

    fn output_files(&self) -> Result<Vec<OutputFile>> {
        let namespace = self.config.oneof_namespace();
        let mut files = Vec::new();
        for arity in MIN_ARITY..=self.config.max_arity {
            let base = SourceFile::new(namespace.clone()).declaration(build_base(arity)?);
            files.push(OutputFile::new(
                format!("{DIR}/OneOf{arity}.cs"),
                base.render(),
            ));
            for position in 1..=arity {
                let case = SourceFile::new(namespace.clone())
                    .declaration(build_case(arity, position)?);
                files.push(OutputFile::new(
                    format!("{DIR}/OneOf{arity}.{}.cs", ordinal(position)?),
                    case.render(),
                ));
            }
        }
        Ok(files)
    }

    fn stale_patterns(&self) -> Vec<(PathBuf, FilePattern)> {
        vec![(PathBuf::from(DIR), FilePattern::new("OneOf"))]
    }
}

/// Writes `OneOf/OneOfTests{N}.cs` fixtures to the test root.
pub struct OneOfTestsGenerator {
    config: GenerationConfig,
}

impl OneOfTestsGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }
}

impl FamilyGenerator for OneOfTestsGenerator {
    fn family(&self) -> &'static str {
        "OneOf tests"
    }

    fn output_files(&self) -> Result<Vec<OutputFile>> {
        let namespace = self.config.tests_namespace();
        let oneof_namespace = self.config.oneof_namespace();
        let mut files = Vec::new();
        for arity in MIN_ARITY..=self.config.max_arity {
            let file = SourceFile::new(namespace.clone())
                .using(oneof_namespace.clone())
                .declaration(build_fixture(arity)?);
            files.push(OutputFile::new(
                format!("{DIR}/OneOfTests{arity}.cs"),
                file.render(),
            ));
        }
        Ok(files)
    }

    fn stale_patterns(&self) -> Vec<(PathBuf, FilePattern)> {
        vec![(PathBuf::from(DIR), FilePattern::new("OneOfTests"))]
    }
}
