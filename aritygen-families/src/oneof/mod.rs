//! The OneOf family: an arity-indexed discriminated union.
//!
//! For each arity N (N >= 2) the family emits an abstract base
//! `OneOf<TFirst..>` plus N sealed single-case implementations, one per
//! position, named by ordinal.

mod base;
mod case;
mod fixtures;
mod generator;

use aritygen_core::{NamingError, ordinal};
use aritygen_csharp::ast::{GenericParameter, type_param_list};

pub use base::build_base;
pub use case::build_case;
pub use fixtures::build_fixture;
pub use generator::{OneOfGenerator, OneOfTestsGenerator};

/// The union's first valid arity; a 1-case union is not generated.
pub const MIN_ARITY: usize = 2;

pub(crate) const USING_SYSTEM: &str = "System";

/// The ordinal-derived type parameter name for a position: `TFirst`,
/// `TSecond`, ..
pub(crate) fn type_param_name(position: usize) -> Result<String, NamingError> {
    Ok(format!("T{}", ordinal(position)?))
}

/// `TFirst..T<OrdinalN>`, each constrained `notnull`.
pub(crate) fn ordinal_params(arity: usize) -> Result<Vec<GenericParameter>, NamingError> {
    (1..=arity)
        .map(|position| Ok(GenericParameter::notnull(type_param_name(position)?)))
        .collect()
}

/// `OneOf<TFirst, ..>` for the arity.
pub(crate) fn oneof_type(arity: usize) -> Result<String, NamingError> {
    Ok(format!("OneOf{}", type_param_list(&ordinal_params(arity)?)))
}

/// The sealed case-class name for a position: `FirstCase`, ..
pub(crate) fn case_class_name(position: usize) -> Result<String, NamingError> {
    Ok(format!("{}Case", ordinal(position)?))
}
