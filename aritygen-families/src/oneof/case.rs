//! Sealed per-position case declarations.

use aritygen_core::{NamingError, ordinal};
use aritygen_csharp::ast::{
    Constructor, Field, GenericParameter, Method, Parameter, Property, XmlDoc,
};
use aritygen_csharp::{ClassDeclaration, TypeRef};

use super::{USING_SYSTEM, case_class_name, oneof_type, ordinal_params, type_param_name};

/// The sealed implementation activating one position of the union.
pub fn build_case(arity: usize, position: usize) -> Result<ClassDeclaration, NamingError> {
    debug_assert!(position >= 1 && position <= arity);
    let class_name = case_class_name(position)?;
    let stored_ty = type_param_name(position)?;

    let mut declaration = ClassDeclaration::new(class_name.clone())
        .sealed()
        .generics(ordinal_params(arity)?)
        .base(TypeRef::new(oneof_type(arity)?))
        .docs(XmlDoc::summary(format!(
            "The union with its {} position active.",
            ordinal(position)?.to_lowercase()
        )))
        .field(Field::readonly(stored_ty.clone(), "_value"))
        .constructor(
            Constructor::new(class_name)
                .parameter(Parameter::new(stored_ty, "value"))
                .body("_value = value;"),
        );

    for other in 1..=arity {
        declaration = declaration.property(Property::override_expression(
            "bool",
            format!("Is{}", ordinal(other)?),
            if other == position { "true" } else { "false" },
        ));
    }

    let func_handlers = (1..=arity)
        .map(|other| {
            Ok(Parameter::new(
                format!("Func<{}, TResult>", type_param_name(other)?),
                format!("on{}", ordinal(other)?),
            ))
        })
        .collect::<Result<Vec<_>, NamingError>>()?;
    let action_handlers = (1..=arity)
        .map(|other| {
            Ok(Parameter::new(
                format!("Action<{}>", type_param_name(other)?),
                format!("on{}", ordinal(other)?),
            ))
        })
        .collect::<Result<Vec<_>, NamingError>>()?;
    let active_handler = format!("on{}", ordinal(position)?);

    declaration = declaration
        .method(
            Method::new("TResult", "Match")
                .override_()
                .generic(GenericParameter::new("TResult"))
                .parameters(func_handlers)
                .body(format!("return {active_handler}(_value);"))
                .requires(USING_SYSTEM),
        )
        .method(
            Method::new("void", "Match")
                .override_()
                .parameters(action_handlers)
                .body(format!("{active_handler}(_value);"))
                .requires(USING_SYSTEM),
        );

    for other in 1..=arity {
        let body = if other == position {
            "value = _value;\nreturn true;"
        } else {
            "value = default;\nreturn false;"
        };
        declaration = declaration.method(
            Method::new("bool", ordinal(other)?)
                .override_()
                .parameter(Parameter::out(
                    format!("{}?", type_param_name(other)?),
                    "value",
                ))
                .body(body),
        );
    }

    Ok(declaration)
}
