//! Generated xUnit fixtures for the Result family.

use aritygen_core::NamingError;
use aritygen_csharp::ClassDeclaration;
use aritygen_csharp::ast::{AttributeRef, Method, XmlDoc};

use crate::values::seed;

use super::{USING_SYSTEM, value_names};

const USING_XUNIT: &str = "Xunit";

fn fact() -> AttributeRef {
    AttributeRef::new("Fact").requires(USING_XUNIT)
}

/// `<int, string, ..>` concrete type arguments from the seed table.
fn concrete_args(arity: usize) -> Result<String, NamingError> {
    let types = (1..=arity)
        .map(|position| seed(position).map(|s| s.csharp_type))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("<{}>", types.join(", ")))
}

/// `1, "alpha", ..` constructor literals from the seed table.
fn literal_args(arity: usize) -> Result<String, NamingError> {
    let literals = (1..=arity)
        .map(|position| seed(position).map(|s| s.literal))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(literals.join(", "))
}

fn out_args(arity: usize) -> String {
    (1..=arity)
        .map(|position| format!("out var value{position}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One `Assert` line per position checking the stored literal.
fn stored_asserts(arity: usize) -> Result<String, NamingError> {
    let lines = (1..=arity)
        .map(|position| {
            seed(position).map(|s| format!("Assert.Equal({}, value{position});", s.literal))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// One `Assert` line per position checking the type default.
fn default_asserts(arity: usize) -> Result<String, NamingError> {
    let lines = (1..=arity)
        .map(|position| {
            seed(position).map(|s| {
                if s.is_reference_type() {
                    format!("Assert.Null(value{position});")
                } else {
                    format!("Assert.Equal({}, value{position});", s.default_literal)
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

fn handler_params(arity: usize) -> String {
    if arity == 1 {
        "value1".to_string()
    } else {
        format!("({})", value_names(arity))
    }
}

/// The `ResultTests{N}` fixture class exercising the generated family
/// end to end for one arity.
pub fn build_fixture(arity: usize) -> Result<ClassDeclaration, NamingError> {
    let args = concrete_args(arity)?;
    let literals = literal_args(arity)?;
    let success = format!("var result = Result.Success{args}({literals});");
    let failure_errors =
        "var errors = new IError[] { new Error(\"boom\") };\nvar result = Result.Failure";
    let outs = out_args(arity);

    let deconstruct_value_assert = if arity == 1 {
        let first = seed(1)?;
        format!("Assert.Equal({}, value);", first.literal)
    } else {
        format!("Assert.Equal(({literals}), value);")
    };
    let deconstruct_default_assert = if arity == 1 {
        let first = seed(1)?;
        if first.is_reference_type() {
            "Assert.Null(value);".to_string()
        } else {
            format!("Assert.Equal({}, value);", first.default_literal)
        }
    } else {
        "Assert.Null(value);".to_string()
    };

    Ok(ClassDeclaration::new(format!("ResultTests{arity}"))
        .sealed()
        .docs(XmlDoc::summary(format!(
            "Behavioral checks for the arity-{arity} Result family."
        )))
        .method(
            Method::new("void", "SuccessTryGetYieldsStoredValues")
                .attribute(fact())
                .body(format!(
                    "{success}\n\nAssert.True(result.TryGet({outs}));\n{}",
                    stored_asserts(arity)?
                )),
        )
        .method(
            Method::new("void", "FailureTryGetYieldsDefaultsAndErrors")
                .attribute(fact())
                .body(format!(
                    "{failure_errors}{args}(errors);\n\nAssert.False(result.TryGet({outs}, out var reported));\n{}\nAssert.Same(errors, reported);",
                    default_asserts(arity)?
                )),
        )
        .method(
            Method::new("void", "SuccessDeconstructYieldsValues")
                .attribute(fact())
                .body(format!(
                    "{success}\n\nresult.Deconstruct(out var isSuccess, out var value, out var errors);\n\nAssert.True(isSuccess);\n{deconstruct_value_assert}\nAssert.Null(errors);"
                )),
        )
        .method(
            Method::new("void", "FailureDeconstructYieldsErrors")
                .attribute(fact())
                .body(format!(
                    "{failure_errors}{args}(errors);\n\nresult.Deconstruct(out var isSuccess, out var value, out var reported);\n\nAssert.False(isSuccess);\n{deconstruct_default_assert}\nAssert.Same(errors, reported);"
                )),
        )
        .method(
            Method::new("void", "MatchRoutesToSuccessHandler")
                .attribute(fact())
                .body(format!(
                    "{success}\n\nvar routed = result.Match(\n    {} => true,\n    errors => false);\n\nAssert.True(routed);",
                    handler_params(arity)
                )),
        )
        .method(
            Method::new("void", "MatchRoutesToFailureHandler")
                .attribute(fact())
                .body(format!(
                    "{failure_errors}{args}(errors);\n\nvar routed = result.Match(\n    {} => true,\n    reported => false);\n\nAssert.False(routed);",
                    handler_params(arity)
                )),
        )
        .method(
            Method::new("void", "ExceptionFailureCarriesOneError")
                .attribute(fact())
                .body(format!(
                    "var result = Result.Failure{args}(new InvalidOperationException(\"boom\"), true);\n\nAssert.True(result.IsFaulted);\nresult.IfFailure(reported => Assert.Single(reported));"
                ))
                .requires(USING_SYSTEM),
        ))
}

#[cfg(test)]
mod tests {
    use aritygen_core::CodeBuilder;

    use super::*;

    fn render(arity: usize) -> String {
        let declaration = build_fixture(arity).unwrap();
        let mut out = CodeBuilder::csharp();
        declaration.render(&mut out);
        out.build()
    }

    #[test]
    fn fixture_class_is_named_by_arity() {
        assert!(render(2).contains("public sealed class ResultTests2\n"));
    }

    #[test]
    fn success_scenario_uses_seed_literals_in_order() {
        let text = render(2);
        assert!(text.contains("var result = Result.Success<int, string>(1, \"alpha\");"));
        assert!(text.contains("Assert.True(result.TryGet(out var value1, out var value2));"));
        assert!(text.contains("Assert.Equal(1, value1);"));
        assert!(text.contains("Assert.Equal(\"alpha\", value2);"));
    }

    #[test]
    fn failure_scenario_asserts_defaults_per_type() {
        let text = render(2);
        assert!(text.contains("Assert.Equal(0, value1);"));
        assert!(text.contains("Assert.Null(value2);"));
        assert!(text.contains("Assert.Same(errors, reported);"));
    }

    #[test]
    fn arity_one_deconstruct_asserts_the_bare_value() {
        let text = render(1);
        assert!(text.contains("Assert.Equal(1, value);"));
        assert!(!text.contains("Assert.Equal((1), value);"));
    }

    #[test]
    fn higher_arity_deconstruct_asserts_the_tuple() {
        let text = render(3);
        assert!(text.contains("Assert.Equal((1, \"alpha\", true), value);"));
    }

    #[test]
    fn match_handlers_scale_with_arity() {
        let one = render(1);
        assert!(one.contains("value1 => true,"));
        let three = render(3);
        assert!(three.contains("(value1, value2, value3) => true,"));
    }

    #[test]
    fn facts_require_the_xunit_using() {
        let usings = build_fixture(1).unwrap().usings();
        assert!(usings.contains("Xunit"));
        assert!(usings.contains("System"));
    }

    #[test]
    fn every_method_is_a_fact() {
        let text = render(2);
        assert_eq!(text.matches("[Fact]").count(), 7);
    }
}
