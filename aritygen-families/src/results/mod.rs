//! The Result family: an arity-indexed success/failure monad.
//!
//! For each arity N the family emits an abstract base `Result<TValue1..
//! TValueN>`, a sealed `SuccessResult` storing N values, a sealed
//! `FailureResult` storing an error collection, a static factory
//! surface, and a `ResultExtensions` partial class with deferred-task
//! and value-task counterparts.

mod base;
mod extensions;
mod factory;
mod failure;
mod fixtures;
mod generator;
mod success;

use aritygen_csharp::ast::{GenericParameter, Parameter, type_param_list};

pub use base::build_base;
pub use extensions::{AsyncVariant, build_extensions};
pub use factory::{build_factory_arity, build_merged_factory};
pub use failure::build_failure;
pub use fixtures::build_fixture;
pub use generator::{ResultExtensionsGenerator, ResultGenerator, ResultTestsGenerator};
pub use success::build_success;

/// The error collection type shared by every failure-path member.
pub(crate) const ERRORS_COLLECTION: &str = "IReadOnlyCollection<IError>";

pub(crate) const USING_SYSTEM: &str = "System";
pub(crate) const USING_COLLECTIONS: &str = "System.Collections.Generic";

/// `TValue1..TValueN`, each constrained `notnull`.
pub(crate) fn value_params(arity: usize) -> Vec<GenericParameter> {
    (1..=arity)
        .map(|position| GenericParameter::notnull(format!("TValue{position}")))
        .collect()
}

/// `TValue1, TValue2, ..` without angle brackets.
pub(crate) fn value_args(arity: usize) -> String {
    (1..=arity)
        .map(|position| format!("TValue{position}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Result<TValue1, ..>` for the arity.
pub(crate) fn result_type(arity: usize) -> String {
    format!("Result{}", type_param_list(&value_params(arity)))
}

/// `value1, value2, ..`.
pub(crate) fn value_names(arity: usize) -> String {
    (1..=arity)
        .map(|position| format!("value{position}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Constructor/factory parameters `TValueK valueK` in position order.
pub(crate) fn value_parameters(arity: usize) -> Vec<Parameter> {
    (1..=arity)
        .map(|position| Parameter::new(format!("TValue{position}"), format!("value{position}")))
        .collect()
}

/// `out TValueK? valueK` in position order, for the `TryGet` overloads.
pub(crate) fn try_get_parameters(arity: usize) -> Vec<Parameter> {
    (1..=arity)
        .map(|position| Parameter::out(format!("TValue{position}?"), format!("value{position}")))
        .collect()
}

/// The `Deconstruct` value out-parameter type: the bare type at arity 1
/// and a nullable N-tuple above it.
pub(crate) fn deconstruct_value_type(arity: usize) -> String {
    if arity == 1 {
        "TValue1?".to_string()
    } else {
        format!("({})?", value_args(arity))
    }
}

/// The stored values as a deconstructable expression: `_value1` at
/// arity 1, `(_value1, _value2, ..)` above it.
pub(crate) fn stored_values(arity: usize) -> String {
    if arity == 1 {
        "_value1".to_string()
    } else {
        let fields = (1..=arity)
            .map(|position| format!("_value{position}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({fields})")
    }
}

/// `Func<TValue1, .., TResult>` for the function-based success handler.
pub(crate) fn success_func(arity: usize) -> String {
    format!("Func<{}, TResult>", value_args(arity))
}

/// `Action<TValue1, ..>` for the action-based success handler.
pub(crate) fn success_action(arity: usize) -> String {
    format!("Action<{}>", value_args(arity))
}

pub(crate) fn failure_func() -> String {
    format!("Func<{ERRORS_COLLECTION}, TResult>")
}

pub(crate) fn failure_action() -> String {
    format!("Action<{ERRORS_COLLECTION}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_lists_positions_in_order() {
        assert_eq!(result_type(1), "Result<TValue1>");
        assert_eq!(result_type(3), "Result<TValue1, TValue2, TValue3>");
    }

    #[test]
    fn arity_one_deconstructs_to_the_bare_type() {
        assert_eq!(deconstruct_value_type(1), "TValue1?");
        assert_eq!(stored_values(1), "_value1");
    }

    #[test]
    fn higher_arities_deconstruct_to_tuples() {
        assert_eq!(deconstruct_value_type(2), "(TValue1, TValue2)?");
        assert_eq!(stored_values(2), "(_value1, _value2)");
    }

    #[test]
    fn try_get_parameters_are_nullable_outs() {
        let params = try_get_parameters(2);
        assert_eq!(params[0].render(), "out TValue1? value1");
        assert_eq!(params[1].render(), "out TValue2? value2");
    }

    #[test]
    fn handler_types_scale_with_arity() {
        assert_eq!(success_func(2), "Func<TValue1, TValue2, TResult>");
        assert_eq!(success_action(1), "Action<TValue1>");
        assert_eq!(failure_func(), "Func<IReadOnlyCollection<IError>, TResult>");
    }
}
