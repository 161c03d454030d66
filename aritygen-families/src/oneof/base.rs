//! Abstract `OneOf<..>` base declaration.

use aritygen_core::{NamingError, ordinal};
use aritygen_csharp::ClassDeclaration;
use aritygen_csharp::ast::{
    AbstractMethod, GenericParameter, Method, Parameter, Property, XmlDoc,
};

use super::{USING_SYSTEM, case_class_name, oneof_type, ordinal_params, type_param_name};

/// The abstract union base for the given arity: per-position flags,
/// both `Match` shapes, per-position extraction, and the factory plus
/// implicit-conversion surface the case classes plug into.
pub fn build_base(arity: usize) -> Result<ClassDeclaration, NamingError> {
    let union_ty = oneof_type(arity)?;
    let type_args = (1..=arity)
        .map(type_param_name)
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");

    let mut declaration = ClassDeclaration::new("OneOf")
        .abstract_()
        .generics(ordinal_params(arity)?)
        .docs(
            XmlDoc::summary(format!(
                "A discriminated union over {arity} positions: exactly one is active"
            ))
            .summary_line("at a time."),
        );

    for position in 1..=arity {
        declaration = declaration.property(Property::abstract_(
            "bool",
            format!("Is{}", ordinal(position)?),
        ));
    }

    let func_handlers = (1..=arity)
        .map(|position| {
            Ok(Parameter::new(
                format!("Func<{}, TResult>", type_param_name(position)?),
                format!("on{}", ordinal(position)?),
            ))
        })
        .collect::<Result<Vec<_>, NamingError>>()?;
    let action_handlers = (1..=arity)
        .map(|position| {
            Ok(Parameter::new(
                format!("Action<{}>", type_param_name(position)?),
                format!("on{}", ordinal(position)?),
            ))
        })
        .collect::<Result<Vec<_>, NamingError>>()?;

    declaration = declaration
        .method(
            AbstractMethod::new("TResult", "Match")
                .generic(GenericParameter::new("TResult"))
                .parameters(func_handlers)
                .docs(
                    XmlDoc::summary("Projects the union through the active position's handler.")
                        .type_param("TResult", "Projection result type."),
                )
                .requires(USING_SYSTEM),
        )
        .method(
            AbstractMethod::new("void", "Match")
                .parameters(action_handlers)
                .requires(USING_SYSTEM),
        );

    for position in 1..=arity {
        declaration = declaration.method(
            AbstractMethod::new("bool", ordinal(position)?)
                .parameter(Parameter::out(
                    format!("{}?", type_param_name(position)?),
                    "value",
                ))
                .docs(XmlDoc::summary(format!(
                    "Extracts the stored value when the {} position is active.",
                    ordinal(position)?.to_lowercase()
                ))),
        );
    }

    for position in 1..=arity {
        declaration = declaration.method(
            Method::new(union_ty.clone(), format!("From{}", ordinal(position)?))
                .static_()
                .parameter(Parameter::new(type_param_name(position)?, "value"))
                .body(format!(
                    "return new {}<{type_args}>(value);",
                    case_class_name(position)?
                )),
        );
    }

    for position in 1..=arity {
        declaration = declaration.method(
            Method::new("implicit operator", union_ty.clone())
                .static_()
                .parameter(Parameter::new(type_param_name(position)?, "value"))
                .body(format!("return From{}(value);", ordinal(position)?)),
        );
    }

    Ok(declaration)
}

#[cfg(test)]
mod tests {
    use aritygen_core::CodeBuilder;

    use super::*;

    fn render(arity: usize) -> String {
        let declaration = build_base(arity).unwrap();
        let mut out = CodeBuilder::csharp();
        declaration.render(&mut out);
        out.build()
    }

    #[test]
    fn header_constrains_every_ordinal_parameter() {
        let text = render(3);
        assert!(text.contains("public abstract class OneOf<TFirst, TSecond, TThird>\n"));
        assert!(text.contains("    where TFirst : notnull\n"));
        assert!(text.contains("    where TThird : notnull\n"));
    }

    #[test]
    fn one_flag_per_position() {
        let text = render(3);
        assert!(text.contains("public abstract bool IsFirst { get; }"));
        assert!(text.contains("public abstract bool IsSecond { get; }"));
        assert!(text.contains("public abstract bool IsThird { get; }"));
        assert!(!text.contains("IsFourth"));
    }

    #[test]
    fn match_overloads_take_one_handler_per_position() {
        let text = render(2);
        assert!(text.contains(
            "public abstract TResult Match<TResult>(Func<TFirst, TResult> onFirst, Func<TSecond, TResult> onSecond);"
        ));
        assert!(text.contains(
            "public abstract void Match(Action<TFirst> onFirst, Action<TSecond> onSecond);"
        ));
    }

    #[test]
    fn extraction_methods_are_named_by_ordinal() {
        let text = render(2);
        assert!(text.contains("public abstract bool First(out TFirst? value);"));
        assert!(text.contains("public abstract bool Second(out TSecond? value);"));
    }

    #[test]
    fn factories_delegate_to_the_case_classes() {
        let text = render(2);
        assert!(text.contains(
            "public static OneOf<TFirst, TSecond> FromFirst(TFirst value)\n"
        ));
        assert!(text.contains("return new FirstCase<TFirst, TSecond>(value);"));
        assert!(text.contains("return new SecondCase<TFirst, TSecond>(value);"));
    }

    #[test]
    fn implicit_operators_delegate_to_the_factories() {
        let text = render(2);
        assert!(text.contains(
            "public static implicit operator OneOf<TFirst, TSecond>(TFirst value)\n"
        ));
        assert!(text.contains("return FromFirst(value);"));
        assert!(text.contains(
            "public static implicit operator OneOf<TFirst, TSecond>(TSecond value)\n"
        ));
        assert!(text.contains("return FromSecond(value);"));
    }

    #[test]
    fn out_of_range_arity_is_a_naming_error() {
        assert!(matches!(
            build_base(9),
            Err(NamingError::OrdinalOutOfRange(9))
        ));
    }
}
