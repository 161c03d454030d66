//! Static `Result` factory surface.

use aritygen_csharp::ast::{Method, Parameter, XmlDoc};
use aritygen_csharp::{ClassDeclaration, ClassError};

use crate::GenerationConfig;

use super::{
    ERRORS_COLLECTION, USING_COLLECTIONS, USING_SYSTEM, result_type, value_args, value_names,
    value_parameters, value_params,
};

/// The factory members for one arity, grouped under an `Arity N` region
/// so per-arity declarations merge cleanly into one surface.
pub fn build_factory_arity(
    arity: usize,
    config: &GenerationConfig,
) -> Result<ClassDeclaration, ClassError> {
    let errors_ns = config.errors_namespace();
    let return_ty = result_type(arity);

    let success = Method::new(return_ty.clone(), "Success")
        .static_()
        .generics(value_params(arity))
        .parameters(value_parameters(arity))
        .body(format!(
            "return new SuccessResult<{}>({});",
            value_args(arity),
            value_names(arity)
        ))
        .docs(XmlDoc::summary("Creates a successful result."));

    let failure_from_errors = Method::new(return_ty.clone(), "Failure")
        .static_()
        .generics(value_params(arity))
        .parameter(Parameter::new(ERRORS_COLLECTION, "errors"))
        .body(format!(
            "return new FailureResult<{}>(errors);",
            value_args(arity)
        ))
        .requires(USING_COLLECTIONS)
        .requires(errors_ns);

    let failure_from_exception = Method::new(return_ty, "Failure")
        .static_()
        .generics(value_params(arity))
        .parameter(Parameter::new("Exception", "exception"))
        .parameter(Parameter::new("bool", "wrapException"))
        .body(format!(
            "return new FailureResult<{}>(exception, wrapException);",
            value_args(arity)
        ))
        .requires(USING_SYSTEM);

    ClassDeclaration::new("Result")
        .static_()
        .partial()
        .with_region(format!("Arity {arity}"), |region| {
            region
                .add_method(success)
                .add_method(failure_from_errors)
                .add_method(failure_from_exception);
        })
}

/// The whole factory surface as one declaration with one region per
/// arity, for the merged file organization.
pub fn build_merged_factory(
    max_arity: usize,
    config: &GenerationConfig,
) -> Result<ClassDeclaration, ClassError> {
    let arities = (1..=max_arity)
        .map(|arity| build_factory_arity(arity, config))
        .collect::<Result<Vec<_>, _>>()?;
    ClassDeclaration::merge(arities)
}
