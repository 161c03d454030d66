//! Abstract `Result<..>` base declaration.

use aritygen_csharp::ClassDeclaration;
use aritygen_csharp::ast::{AbstractMethod, GenericParameter, Parameter, Property, XmlDoc};

use crate::GenerationConfig;

use super::{
    ERRORS_COLLECTION, USING_COLLECTIONS, USING_SYSTEM, deconstruct_value_type, failure_action,
    failure_func, success_action, success_func, try_get_parameters, value_params,
};

/// The abstract base type for the given arity: the member surface both
/// concrete variants implement.
pub fn build_base(arity: usize, config: &GenerationConfig) -> ClassDeclaration {
    let errors_ns = config.errors_namespace();
    let value_word = if arity == 1 { "value" } else { "values" };

    let try_get = AbstractMethod::new("bool", "TryGet")
        .parameters(try_get_parameters(arity))
        .docs(XmlDoc::summary(format!(
            "Extracts the stored {value_word} when the result is successful."
        )));
    let try_get_errors = AbstractMethod::new("bool", "TryGet")
        .parameters(try_get_parameters(arity))
        .parameter(Parameter::out(format!("{ERRORS_COLLECTION}?"), "errors"))
        .requires(USING_COLLECTIONS)
        .requires(errors_ns.clone());

    ClassDeclaration::new("Result")
        .abstract_()
        .generics(value_params(arity))
        .docs(
            XmlDoc::summary(format!(
                "The outcome of an operation producing {arity} {value_word}: exactly one of"
            ))
            .summary_line("success or failure."),
        )
        .property(Property::abstract_("bool", "IsSuccess"))
        .property(Property::abstract_("bool", "IsFaulted"))
        .method(
            AbstractMethod::new("TResult", "Match")
                .generic(GenericParameter::new("TResult"))
                .parameter(Parameter::new(success_func(arity), "onSuccess"))
                .parameter(Parameter::new(failure_func(), "onFailure"))
                .docs(
                    XmlDoc::summary("Projects the result through exactly one handler.")
                        .type_param("TResult", "Projection result type."),
                )
                .requires(USING_SYSTEM)
                .requires(USING_COLLECTIONS)
                .requires(errors_ns.clone()),
        )
        .method(
            AbstractMethod::new("void", "Match")
                .parameter(Parameter::new(success_action(arity), "onSuccess"))
                .parameter(Parameter::new(failure_action(), "onFailure"))
                .requires(USING_SYSTEM),
        )
        .method(
            AbstractMethod::new("void", "IfSuccess")
                .parameter(Parameter::new(success_action(arity), "action"))
                .requires(USING_SYSTEM),
        )
        .method(
            AbstractMethod::new("void", "IfFailure")
                .parameter(Parameter::new(failure_action(), "action"))
                .requires(USING_SYSTEM),
        )
        .method(try_get)
        .method(try_get_errors)
        .method(
            AbstractMethod::new("void", "Deconstruct")
                .parameter(Parameter::out("bool", "isSuccess"))
                .parameter(Parameter::out(deconstruct_value_type(arity), "value"))
                .parameter(Parameter::out(format!("{ERRORS_COLLECTION}?"), "errors")),
        )
}

#[cfg(test)]
mod tests {
    use aritygen_core::CodeBuilder;

    use super::*;

    fn render(arity: usize) -> String {
        let declaration = build_base(arity, &config());
        let mut out = CodeBuilder::csharp();
        declaration.render(&mut out);
        out.build()
    }

    fn config() -> GenerationConfig {
        GenerationConfig {
            namespace: "Acme".to_string(),
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn header_constrains_every_value_parameter() {
        let text = render(2);
        assert!(text.contains("public abstract class Result<TValue1, TValue2>\n"));
        assert!(text.contains("    where TValue1 : notnull\n"));
        assert!(text.contains("    where TValue2 : notnull\n"));
    }

    #[test]
    fn declares_the_full_abstract_surface() {
        let text = render(2);
        assert!(text.contains("public abstract bool IsSuccess { get; }"));
        assert!(text.contains("public abstract bool IsFaulted { get; }"));
        assert!(text.contains(
            "public abstract TResult Match<TResult>(Func<TValue1, TValue2, TResult> onSuccess, Func<IReadOnlyCollection<IError>, TResult> onFailure);"
        ));
        assert!(text.contains(
            "public abstract void Match(Action<TValue1, TValue2> onSuccess, Action<IReadOnlyCollection<IError>> onFailure);"
        ));
        assert!(text.contains("public abstract void IfSuccess(Action<TValue1, TValue2> action);"));
        assert!(
            text.contains("public abstract void IfFailure(Action<IReadOnlyCollection<IError>> action);")
        );
    }

    #[test]
    fn try_get_gains_one_out_parameter_per_position() {
        let text = render(3);
        assert!(text.contains(
            "public abstract bool TryGet(out TValue1? value1, out TValue2? value2, out TValue3? value3);"
        ));
        assert!(text.contains(
            "public abstract bool TryGet(out TValue1? value1, out TValue2? value2, out TValue3? value3, out IReadOnlyCollection<IError>? errors);"
        ));
    }

    #[test]
    fn arity_one_deconstruct_uses_the_bare_type() {
        let text = render(1);
        assert!(text.contains(
            "public abstract void Deconstruct(out bool isSuccess, out TValue1? value, out IReadOnlyCollection<IError>? errors);"
        ));
    }

    #[test]
    fn higher_arity_deconstruct_uses_a_tuple() {
        let text = render(2);
        assert!(text.contains(
            "public abstract void Deconstruct(out bool isSuccess, out (TValue1, TValue2)? value, out IReadOnlyCollection<IError>? errors);"
        ));
    }

    #[test]
    fn required_usings_cover_handlers_and_errors() {
        let usings = build_base(2, &config()).usings();
        assert!(usings.contains("System"));
        assert!(usings.contains("System.Collections.Generic"));
        assert!(usings.contains("Acme.Errors"));
    }
}
