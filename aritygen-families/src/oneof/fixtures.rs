//! Generated xUnit fixtures for the OneOf family.

use aritygen_core::{NamingError, ordinal};
use aritygen_csharp::ClassDeclaration;
use aritygen_csharp::ast::{AttributeRef, Method, XmlDoc};

use crate::values::seed;

const USING_XUNIT: &str = "Xunit";

fn fact() -> AttributeRef {
    AttributeRef::new("Fact").requires(USING_XUNIT)
}

/// `OneOf<int, string, ..>` with concrete seed types.
fn concrete_union(arity: usize) -> Result<String, NamingError> {
    let types = (1..=arity)
        .map(|position| seed(position).map(|s| s.csharp_type))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("OneOf<{}>", types.join(", ")))
}

/// The `OneOfTests{N}` fixture class: four scenarios per position.
pub fn build_fixture(arity: usize) -> Result<ClassDeclaration, NamingError> {
    let union = concrete_union(arity)?;
    let mut declaration = ClassDeclaration::new(format!("OneOfTests{arity}"))
        .sealed()
        .docs(XmlDoc::summary(format!(
            "Behavioral checks for the arity-{arity} OneOf family."
        )));

    for position in 1..=arity {
        let name = ordinal(position)?;
        let value = seed(position)?;
        let construct = format!("var oneOf = {union}.From{name}({});", value.literal);

        let flag_asserts = (1..=arity)
            .map(|other| {
                ordinal(other).map(|other_name| {
                    if other == position {
                        format!("Assert.True(oneOf.Is{other_name});")
                    } else {
                        format!("Assert.False(oneOf.Is{other_name});")
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");

        let extraction_asserts = (1..=arity)
            .map(|other| {
                ordinal(other).map(|other_name| {
                    if other == position {
                        format!(
                            "Assert.True(oneOf.{other_name}(out var value));\nAssert.Equal({}, value);",
                            value.literal
                        )
                    } else {
                        format!("Assert.False(oneOf.{other_name}(out _));")
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");

        let handlers = (1..=arity)
            .map(|other| format!("value => {other}"))
            .collect::<Vec<_>>()
            .join(",\n    ");

        declaration = declaration
            .method(
                Method::new("void", format!("From{name}ActivatesOnly{name}"))
                    .attribute(fact())
                    .body(format!("{construct}\n\n{flag_asserts}")),
            )
            .method(
                Method::new("void", format!("{name}ExtractsTheStoredValue"))
                    .attribute(fact())
                    .body(format!("{construct}\n\n{extraction_asserts}")),
            )
            .method(
                Method::new("void", format!("MatchRoutesTo{name}Handler"))
                    .attribute(fact())
                    .body(format!(
                        "{construct}\n\nvar routed = oneOf.Match(\n    {handlers});\n\nAssert.Equal({position}, routed);"
                    )),
            )
            .method(
                Method::new("void", format!("ImplicitConversionFrom{name}Value"))
                    .attribute(fact())
                    .body(format!(
                        "{union} oneOf = {};\n\nAssert.True(oneOf.Is{name});",
                        value.literal
                    )),
            );
    }

    Ok(declaration)
}
