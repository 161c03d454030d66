//! Sealed `FailureResult<..>` variant declaration.

use aritygen_csharp::ast::{
    Constructor, Field, GenericParameter, Method, Parameter, Property, XmlDoc,
};
use aritygen_csharp::{ClassDeclaration, TypeRef};

use crate::GenerationConfig;

use super::{
    ERRORS_COLLECTION, USING_COLLECTIONS, USING_SYSTEM, deconstruct_value_type, failure_action,
    failure_func, result_type, success_action, success_func, try_get_parameters, value_params,
};

/// The failure variant: stores an error collection and mirrors every
/// success-variant body.
pub fn build_failure(arity: usize, config: &GenerationConfig) -> ClassDeclaration {
    let errors_ns = config.errors_namespace();

    let default_assignments = (1..=arity)
        .map(|position| format!("value{position} = default;"))
        .collect::<Vec<_>>()
        .join("\n");

    ClassDeclaration::new("FailureResult")
        .sealed()
        .generics(value_params(arity))
        .base(TypeRef::new(result_type(arity)))
        .docs(XmlDoc::summary("The faulted outcome."))
        .field(
            Field::readonly(ERRORS_COLLECTION, "_errors")
                .requires(USING_COLLECTIONS)
                .requires(errors_ns.clone()),
        )
        .constructor(
            Constructor::new("FailureResult")
                .parameter(Parameter::new("Exception", "exception"))
                .parameter(Parameter::new("bool", "wrapException"))
                .body(
                    "IError error = wrapException\n    ? new ExceptionalError(exception)\n    : new Error(exception.Message);\n_errors = new[] { error };",
                )
                .docs(XmlDoc::summary(
                    "Records a single error derived from the exception, either wrapping",
                ).summary_line("it whole or keeping only its message."))
                .requires(USING_SYSTEM)
                .requires(errors_ns.clone()),
        )
        .constructor(
            Constructor::new("FailureResult")
                .parameter(Parameter::new(ERRORS_COLLECTION, "errors"))
                .body("_errors = errors;")
                .requires(USING_COLLECTIONS)
                .requires(errors_ns.clone()),
        )
        .constructor(
            Constructor::new("FailureResult")
                .parameter(Parameter::new("Exception", "exception"))
                .chained("this(exception, true)")
                .requires(USING_SYSTEM),
        )
        .property(Property::override_expression("bool", "IsSuccess", "false"))
        .property(Property::override_expression("bool", "IsFaulted", "true"))
        .method(
            Method::new("TResult", "Match")
                .override_()
                .generic(GenericParameter::new("TResult"))
                .parameter(Parameter::new(success_func(arity), "onSuccess"))
                .parameter(Parameter::new(failure_func(), "onFailure"))
                .body("return onFailure(_errors);")
                .requires(USING_SYSTEM),
        )
        .method(
            Method::new("void", "Match")
                .override_()
                .parameter(Parameter::new(success_action(arity), "onSuccess"))
                .parameter(Parameter::new(failure_action(), "onFailure"))
                .body("onFailure(_errors);")
                .requires(USING_SYSTEM),
        )
        .method(
            Method::new("void", "IfSuccess")
                .override_()
                .parameter(Parameter::new(success_action(arity), "action"))
                .requires(USING_SYSTEM),
        )
        .method(
            Method::new("void", "IfFailure")
                .override_()
                .parameter(Parameter::new(failure_action(), "action"))
                .body("action(_errors);")
                .requires(USING_SYSTEM),
        )
        .method(
            Method::new("bool", "TryGet")
                .override_()
                .parameters(try_get_parameters(arity))
                .body(format!("{default_assignments}\nreturn false;")),
        )
        .method(
            Method::new("bool", "TryGet")
                .override_()
                .parameters(try_get_parameters(arity))
                .parameter(Parameter::out(format!("{ERRORS_COLLECTION}?"), "errors"))
                .body(format!(
                    "{default_assignments}\nerrors = _errors;\nreturn false;"
                )),
        )
        .method(
            Method::new("void", "Deconstruct")
                .override_()
                .parameter(Parameter::out("bool", "isSuccess"))
                .parameter(Parameter::out(deconstruct_value_type(arity), "value"))
                .parameter(Parameter::out(format!("{ERRORS_COLLECTION}?"), "errors"))
                .body("isSuccess = false;\nvalue = default;\nerrors = _errors;"),
        )
}

#[cfg(test)]
mod tests {
    use aritygen_core::CodeBuilder;

    use super::*;

    fn render(arity: usize) -> String {
        let config = GenerationConfig {
            namespace: "Acme".to_string(),
            ..GenerationConfig::default()
        };
        let declaration = build_failure(arity, &config);
        let mut out = CodeBuilder::csharp();
        declaration.render(&mut out);
        out.build()
    }

    #[test]
    fn stores_the_error_collection() {
        let text = render(2);
        assert!(text.contains("private readonly IReadOnlyCollection<IError> _errors;"));
    }

    #[test]
    fn wrap_flag_chooses_the_error_shape() {
        let text = render(1);
        assert!(text.contains("public FailureResult(Exception exception, bool wrapException)\n"));
        assert!(text.contains("IError error = wrapException"));
        assert!(text.contains("? new ExceptionalError(exception)"));
        assert!(text.contains(": new Error(exception.Message);"));
    }

    #[test]
    fn bare_exception_constructor_chains_with_wrapping() {
        let text = render(1);
        assert!(text.contains(
            "public FailureResult(Exception exception)\n        : this(exception, true)\n"
        ));
    }

    #[test]
    fn flags_report_faulted() {
        let text = render(1);
        assert!(text.contains("public override bool IsSuccess => false;"));
        assert!(text.contains("public override bool IsFaulted => true;"));
    }

    #[test]
    fn match_never_touches_the_success_handler() {
        let text = render(2);
        assert!(text.contains("return onFailure(_errors);"));
        assert!(!text.contains("onSuccess(_value"));
        assert!(text.contains(
            "public override void IfSuccess(Action<TValue1, TValue2> action)\n    {\n    }"
        ));
    }

    #[test]
    fn try_get_defaults_every_position() {
        let text = render(3);
        assert!(text.contains(
            "value1 = default;\n        value2 = default;\n        value3 = default;\n        return false;"
        ));
        assert!(text.contains("errors = _errors;\n        return false;"));
    }

    #[test]
    fn deconstruct_reports_the_stored_errors() {
        let text = render(2);
        assert!(text.contains("isSuccess = false;\n        value = default;\n        errors = _errors;"));
    }
}
