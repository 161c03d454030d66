//! The generator contract shared by every family.

use std::path::{Path, PathBuf};

use aritygen_core::{FilePattern, OutputFile, remove_matching, write_file};
use eyre::Result;

/// Result of one family's generation pass.
#[derive(Debug, Default)]
pub struct FamilyReport {
    /// Family identifier.
    pub family: &'static str,
    /// Stale files deleted before writing.
    pub removed: Vec<PathBuf>,
    /// Files written, in generation order.
    pub written: Vec<PathBuf>,
}

/// A generator family: one on-disk layout policy over a set of arity
/// builders.
pub trait FamilyGenerator {
    /// Family identifier used in narration and reports.
    fn family(&self) -> &'static str;

    /// Render every output file without touching the disk.
    ///
    /// Paths are relative to the family's output root. Files appear in
    /// ascending arity order, and multiple files for one arity in the
    /// order the family enumerates them.
    fn output_files(&self) -> Result<Vec<OutputFile>>;

    /// The directories (relative to the output root) this family owns,
    /// each with the file-name pattern identifying its files there.
    fn stale_patterns(&self) -> Vec<(PathBuf, FilePattern)>;

    /// Regenerate this family under `root`.
    ///
    /// Rendering happens first, so a builder error leaves existing
    /// output untouched. Stale-file deletion then completes fully
    /// before the first fresh write; this is what makes shrinking the
    /// arity bound drop orphaned high-arity files without disturbing
    /// other families sharing a directory.
    fn generate(&self, root: &Path) -> Result<FamilyReport> {
        let files = self.output_files()?;
        let mut report = FamilyReport {
            family: self.family(),
            ..FamilyReport::default()
        };
        for (dir, pattern) in self.stale_patterns() {
            report.removed.extend(remove_matching(&root.join(dir), pattern)?);
        }
        for file in files {
            let path = root.join(&file.path);
            write_file(&path, &file.content)?;
            report.written.push(path);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct FixedGenerator {
        files: Vec<OutputFile>,
    }

    impl FamilyGenerator for FixedGenerator {
        fn family(&self) -> &'static str {
            "Fixed"
        }

        fn output_files(&self) -> Result<Vec<OutputFile>> {
            Ok(self.files.clone())
        }

        fn stale_patterns(&self) -> Vec<(PathBuf, FilePattern)> {
            vec![(PathBuf::from("Out"), FilePattern::new("Fixed"))]
        }
    }

    #[test]
    fn generate_writes_files_and_reports_paths() {
        let temp = TempDir::new().unwrap();
        let generator = FixedGenerator {
            files: vec![OutputFile::new("Out/Fixed1.cs", "one")],
        };

        let report = generator.generate(temp.path()).unwrap();

        assert_eq!(report.family, "Fixed");
        assert_eq!(report.written.len(), 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("Out/Fixed1.cs")).unwrap(),
            "one"
        );
    }

    #[test]
    fn stale_files_are_removed_before_writing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("Out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("Fixed7.cs"), "stale").unwrap();
        fs::write(out.join("Other7.cs"), "kept").unwrap();

        let generator = FixedGenerator {
            files: vec![OutputFile::new("Out/Fixed1.cs", "one")],
        };
        let report = generator.generate(temp.path()).unwrap();

        assert_eq!(report.removed.len(), 1);
        assert!(!out.join("Fixed7.cs").exists());
        assert!(out.join("Other7.cs").exists());
        assert!(out.join("Fixed1.cs").exists());
    }
}
