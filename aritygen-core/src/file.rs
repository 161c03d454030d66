//! File-system operations for generated output.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// A generated file: a path relative to some output root plus content.
///
/// Generators produce `OutputFile`s without touching the disk, which is
/// what makes dry-run previews and idempotence tests cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the output root.
    pub path: PathBuf,
    /// Rendered file content.
    pub content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))
}

/// Name pattern identifying the files a generator family owns.
///
/// A family's files are named `<stem><digits>.<segments>.cs` (per-arity
/// files, e.g. `Result2.Success.cs`) or `<stem>.<segments>.cs` (merged
/// files, e.g. `Result.Factory.cs`). The character after the stem must
/// be a digit or a dot, so the `Result` pattern does not claim
/// `ResultExtensions1.cs` or `ResultTests2.cs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePattern {
    stem: &'static str,
}

impl FilePattern {
    pub const fn new(stem: &'static str) -> Self {
        Self { stem }
    }

    /// The family stem this pattern matches.
    pub fn stem(&self) -> &'static str {
        self.stem
    }

    /// Whether `file_name` belongs to this family.
    pub fn matches(&self, file_name: &str) -> bool {
        let Some(rest) = file_name.strip_prefix(self.stem) else {
            return false;
        };
        let after_arity = rest.trim_start_matches(|c: char| c.is_ascii_digit());
        after_arity.starts_with('.') && after_arity.ends_with(".cs")
    }
}

/// Delete regular files in `dir` whose name matches `pattern`.
///
/// A missing directory is a no-op. Subdirectories are not recursed
/// into; sibling variant directories are cleaned by their own call.
/// Returns the deleted paths.
pub fn remove_matching(dir: &Path, pattern: FilePattern) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    if !dir.is_dir() {
        return Ok(removed);
    }
    let entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("Failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if pattern.matches(name) {
            fs::remove_file(&path)
                .wrap_err_with(|| format!("Failed to remove stale file {}", path.display()))?;
            removed.push(path);
        }
    }
    removed.sort();
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Results").join("Tasks").join("a.cs");

        write_file(&path, "content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn write_file_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.cs");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn pattern_matches_per_arity_and_merged_names() {
        let pattern = FilePattern::new("Result");
        assert!(pattern.matches("Result1.cs"));
        assert!(pattern.matches("Result2.Success.cs"));
        assert!(pattern.matches("Result8.Failure.cs"));
        assert!(pattern.matches("Result.Factory.cs"));
    }

    #[test]
    fn pattern_does_not_claim_longer_stems() {
        let pattern = FilePattern::new("Result");
        assert!(!pattern.matches("ResultExtensions1.cs"));
        assert!(!pattern.matches("ResultTests2.cs"));
        assert!(!pattern.matches("Results.cs"));
        assert!(!pattern.matches("OneOf2.cs"));
    }

    #[test]
    fn pattern_requires_cs_extension() {
        let pattern = FilePattern::new("Result");
        assert!(!pattern.matches("Result2.Success.txt"));
        assert!(!pattern.matches("Result2"));
    }

    #[test]
    fn remove_matching_deletes_only_owned_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Result3.cs"), "").unwrap();
        fs::write(temp.path().join("Result3.Success.cs"), "").unwrap();
        fs::write(temp.path().join("ResultExtensions3.cs"), "").unwrap();

        let removed = remove_matching(temp.path(), FilePattern::new("Result")).unwrap();

        assert_eq!(removed.len(), 2);
        assert!(!temp.path().join("Result3.cs").exists());
        assert!(!temp.path().join("Result3.Success.cs").exists());
        assert!(temp.path().join("ResultExtensions3.cs").exists());
    }

    #[test]
    fn remove_matching_missing_dir_is_noop() {
        let temp = TempDir::new().unwrap();
        let removed =
            remove_matching(&temp.path().join("missing"), FilePattern::new("Result")).unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn remove_matching_does_not_recurse() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("Tasks");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("Result2.cs"), "").unwrap();

        let removed = remove_matching(temp.path(), FilePattern::new("Result")).unwrap();

        assert!(removed.is_empty());
        assert!(sub.join("Result2.cs").exists());
    }
}
