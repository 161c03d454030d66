//! Sealed `SuccessResult<..>` variant declaration.

use aritygen_csharp::ast::{
    Constructor, Field, GenericParameter, Method, Parameter, Property, XmlDoc,
};
use aritygen_csharp::{ClassDeclaration, TypeRef};

use crate::GenerationConfig;

use super::{
    ERRORS_COLLECTION, USING_COLLECTIONS, USING_SYSTEM, deconstruct_value_type, failure_action,
    failure_func, result_type, stored_values, success_action, success_func, try_get_parameters,
    value_params, value_parameters,
};

/// The success variant: stores one value per position and routes every
/// member to them.
pub fn build_success(arity: usize, config: &GenerationConfig) -> ClassDeclaration {
    let errors_ns = config.errors_namespace();
    let stored_args = (1..=arity)
        .map(|position| format!("_value{position}"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut declaration = ClassDeclaration::new("SuccessResult")
        .sealed()
        .generics(value_params(arity))
        .base(TypeRef::new(result_type(arity)))
        .docs(XmlDoc::summary("The successful outcome."));

    for position in 1..=arity {
        declaration = declaration.field(Field::readonly(
            format!("TValue{position}"),
            format!("_value{position}"),
        ));
    }

    let ctor_body = (1..=arity)
        .map(|position| format!("_value{position} = value{position};"))
        .collect::<Vec<_>>()
        .join("\n");

    let try_get_assignments = (1..=arity)
        .map(|position| format!("value{position} = _value{position};"))
        .collect::<Vec<_>>()
        .join("\n");

    declaration
        .constructor(
            Constructor::new("SuccessResult")
                .parameters(value_parameters(arity))
                .body(ctor_body),
        )
        .property(Property::override_expression("bool", "IsSuccess", "true"))
        .property(Property::override_expression("bool", "IsFaulted", "false"))
        .method(
            Method::new("TResult", "Match")
                .override_()
                .generic(GenericParameter::new("TResult"))
                .parameter(Parameter::new(success_func(arity), "onSuccess"))
                .parameter(Parameter::new(failure_func(), "onFailure"))
                .body(format!("return onSuccess({stored_args});"))
                .requires(USING_SYSTEM)
                .requires(USING_COLLECTIONS)
                .requires(errors_ns.clone()),
        )
        .method(
            Method::new("void", "Match")
                .override_()
                .parameter(Parameter::new(success_action(arity), "onSuccess"))
                .parameter(Parameter::new(failure_action(), "onFailure"))
                .body(format!("onSuccess({stored_args});"))
                .requires(USING_SYSTEM),
        )
        .method(
            Method::new("void", "IfSuccess")
                .override_()
                .parameter(Parameter::new(success_action(arity), "action"))
                .body(format!("action({stored_args});"))
                .requires(USING_SYSTEM),
        )
        .method(
            Method::new("void", "IfFailure")
                .override_()
                .parameter(Parameter::new(failure_action(), "action"))
                .requires(USING_SYSTEM),
        )
        .method(
            Method::new("bool", "TryGet")
                .override_()
                .parameters(try_get_parameters(arity))
                .body(format!("{try_get_assignments}\nreturn true;")),
        )
        .method(
            Method::new("bool", "TryGet")
                .override_()
                .parameters(try_get_parameters(arity))
                .parameter(Parameter::out(format!("{ERRORS_COLLECTION}?"), "errors"))
                .body(format!("{try_get_assignments}\nerrors = null;\nreturn true;"))
                .requires(USING_COLLECTIONS)
                .requires(errors_ns),
        )
        .method(
            Method::new("void", "Deconstruct")
                .override_()
                .parameter(Parameter::out("bool", "isSuccess"))
                .parameter(Parameter::out(deconstruct_value_type(arity), "value"))
                .parameter(Parameter::out(format!("{ERRORS_COLLECTION}?"), "errors"))
                .body(format!(
                    "isSuccess = true;\nvalue = {};\nerrors = null;",
                    stored_values(arity)
                )),
        )
}
