//! Generation configuration.

use std::path::PathBuf;

use aritygen_core::MAX_ORDINAL;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised by configuration parsing and validation.
///
/// Configuration failures are reported before any generation begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("namespace must not be empty")]
    EmptyNamespace,
    #[error("namespace `{0}` is not a valid dotted identifier")]
    InvalidNamespace(String),
    #[error("{0} output path must not be empty")]
    EmptyPath(&'static str),
    #[error("max-arity {0} is out of range (supported: 1..={MAX_ORDINAL})")]
    ArityOutOfRange(usize),
    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),
}

/// How the factory and extension surfaces are organized on disk.
///
/// Base, variant, and case files are always one file per arity; this
/// mode only chooses between one file per arity and a single merged
/// file with one region per arity for the surfaces that allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileOrganization {
    #[default]
    PerArity,
    Merged,
}

/// Output roots for generated code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Generated-source root.
    #[serde(default = "default_source_root")]
    pub source: PathBuf,
    /// Generated-test root.
    #[serde(default = "default_test_root")]
    pub tests: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            source: default_source_root(),
            tests: default_test_root(),
        }
    }
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src/Generated")
}

fn default_test_root() -> PathBuf {
    PathBuf::from("tests/Generated")
}

fn default_max_arity() -> usize {
    MAX_ORDINAL
}

/// Shared configuration for every generator family.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenerationConfig {
    /// Base namespace; families append their own segment.
    #[serde(default)]
    pub namespace: String,
    /// Highest arity to generate, inclusive.
    #[serde(default = "default_max_arity")]
    pub max_arity: usize,
    #[serde(default)]
    pub organization: FileOrganization,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            max_arity: default_max_arity(),
            organization: FileOrganization::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GenerationConfig {
    /// Parse from TOML without validating; call [`validate`](Self::validate)
    /// after applying command-line overrides.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Fail fast on an unusable configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }
        if !self.namespace.split('.').all(is_identifier) {
            return Err(ConfigError::InvalidNamespace(self.namespace.clone()));
        }
        if self.max_arity == 0 || self.max_arity > MAX_ORDINAL {
            return Err(ConfigError::ArityOutOfRange(self.max_arity));
        }
        if self.output.source.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("source"));
        }
        if self.output.tests.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("tests"));
        }
        Ok(())
    }

    pub fn results_namespace(&self) -> String {
        format!("{}.Results", self.namespace)
    }

    pub fn oneof_namespace(&self) -> String {
        format!("{}.OneOf", self.namespace)
    }

    /// Namespace of the hand-written error types the Result family
    /// references (`IError`, `Error`, `ExceptionalError`).
    pub fn errors_namespace(&self) -> String {
        format!("{}.Errors", self.namespace)
    }

    pub fn tests_namespace(&self) -> String {
        format!("{}.Tests", self.namespace)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
