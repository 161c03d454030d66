//! Arity-specialized type-family generation.
//!
//! This crate drives the C# declaration model across an arity range:
//! pure builders produce one [`ClassDeclaration`](aritygen_csharp::ClassDeclaration)
//! per (arity, variant), generators wrap them in source files and own
//! the on-disk layout (including stale-file cleanup), and the
//! [`Orchestrator`] sequences every family against shared
//! configuration.

mod config;
mod generator;
mod orchestrator;
mod values;

pub mod oneof;
pub mod results;

pub use config::{ConfigError, FileOrganization, GenerationConfig, OutputConfig};
pub use generator::{FamilyGenerator, FamilyReport};
pub use orchestrator::{Orchestrator, RunReport};
pub use values::{SeedValue, seed};
