//! Core primitives for the aritygen source generator.
//!
//! This crate provides the building blocks shared by every generator
//! family: an indentation-tracking text sink, file-system helpers for
//! writing and cleaning generated output, and the ordinal naming table
//! used for position-derived member names.

mod builder;
mod file;
mod naming;

pub use builder::{CodeBuilder, Indent};
pub use file::{FilePattern, OutputFile, remove_matching, write_file};
pub use naming::{MAX_ORDINAL, NamingError, ordinal};
