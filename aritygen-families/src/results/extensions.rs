//! `ResultExtensions` partial-class surface: `Map`, `Bind`,
//! `ValueOrThrow`, in synchronous, deferred-task, and value-task
//! renditions that recombine through the partial-type mechanism.

use aritygen_csharp::ClassDeclaration;
use aritygen_csharp::ast::{GenericParameter, Method, Parameter, XmlDoc};

use super::{USING_SYSTEM, result_type, value_args, value_names, value_params};

const USING_TASKS: &str = "System.Threading.Tasks";

/// Which rendition of the extension surface to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncVariant {
    /// Extensions on `Result<..>` itself.
    Sync,
    /// Extensions on `Task<Result<..>>`.
    Task,
    /// Extensions on `ValueTask<Result<..>>`.
    ValueTask,
}

impl AsyncVariant {
    /// The sibling subdirectory this rendition lands in, if any.
    pub fn subdir(&self) -> Option<&'static str> {
        match self {
            Self::Sync => None,
            Self::Task => Some("Tasks"),
            Self::ValueTask => Some("ValueTasks"),
        }
    }

    fn wrapper(&self) -> Option<&'static str> {
        match self {
            Self::Sync => None,
            Self::Task => Some("Task"),
            Self::ValueTask => Some("ValueTask"),
        }
    }
}

/// Lambda parameter list over the value positions: bare at arity 1,
/// parenthesized above it.
fn lambda_params(arity: usize) -> String {
    if arity == 1 {
        "value1".to_string()
    } else {
        format!("({})", value_names(arity))
    }
}

/// The extracted-value type: bare at arity 1, a tuple above it.
fn value_tuple_type(arity: usize) -> String {
    if arity == 1 {
        "TValue1".to_string()
    } else {
        format!("({})", value_args(arity))
    }
}

fn with_out_param(arity: usize) -> Vec<GenericParameter> {
    let mut generics = value_params(arity);
    generics.push(GenericParameter::notnull("TOut"));
    generics
}

/// One arity's worth of the extension surface for the chosen rendition.
pub fn build_extensions(arity: usize, variant: AsyncVariant) -> ClassDeclaration {
    let receiver_ty = match variant.wrapper() {
        None => result_type(arity),
        Some(wrapper) => format!("{wrapper}<{}>", result_type(arity)),
    };
    let receiver_name = match variant {
        AsyncVariant::Sync => "result",
        _ => "resultTask",
    };
    let this_param = Parameter::new(format!("this {receiver_ty}"), receiver_name);

    let map_body = match variant {
        AsyncVariant::Sync => format!(
            "return result.Match<Result<TOut>>(\n    {} => Result.Success(selector({})),\n    errors => Result.Failure<TOut>(errors));",
            lambda_params(arity),
            value_names(arity)
        ),
        _ => "var result = await resultTask.ConfigureAwait(false);\nreturn result.Map(selector);"
            .to_string(),
    };
    let bind_body = match variant {
        AsyncVariant::Sync => {
            "return result.Match<Result<TOut>>(\n    selector,\n    errors => Result.Failure<TOut>(errors));"
                .to_string()
        }
        _ => "var result = await resultTask.ConfigureAwait(false);\nreturn result.Bind(selector);"
            .to_string(),
    };
    let value_or_throw_body = match variant {
        // The lambda parameter list doubles as the extracted-value
        // expression at every arity.
        AsyncVariant::Sync => format!(
            "return result.Match<{}>(\n    {} => {},\n    errors => throw new InvalidOperationException(\"The result is faulted.\"));",
            value_tuple_type(arity),
            lambda_params(arity),
            lambda_params(arity)
        ),
        _ => "var result = await resultTask.ConfigureAwait(false);\nreturn result.ValueOrThrow();"
            .to_string(),
    };

    let wrap = |ty: String| match variant.wrapper() {
        None => ty,
        Some(wrapper) => format!("{wrapper}<{ty}>"),
    };

    let mut map = Method::new(wrap("Result<TOut>".to_string()), "Map")
        .static_()
        .generics(with_out_param(arity))
        .parameter(this_param.clone())
        .parameter(Parameter::new(
            format!("Func<{}, TOut>", value_args(arity)),
            "selector",
        ))
        .body(map_body)
        .docs(XmlDoc::summary(
            "Projects the stored values into a unary result, passing failures through.",
        ))
        .requires(USING_SYSTEM);

    let mut bind = Method::new(wrap("Result<TOut>".to_string()), "Bind")
        .static_()
        .generics(with_out_param(arity))
        .parameter(this_param.clone())
        .parameter(Parameter::new(
            format!("Func<{}, Result<TOut>>", value_args(arity)),
            "selector",
        ))
        .body(bind_body)
        .requires(USING_SYSTEM);

    let mut value_or_throw = Method::new(wrap(value_tuple_type(arity)), "ValueOrThrow")
        .static_()
        .generics(value_params(arity))
        .parameter(this_param)
        .body(value_or_throw_body)
        .requires(USING_SYSTEM);

    if variant != AsyncVariant::Sync {
        map = map.async_().requires(USING_TASKS);
        bind = bind.async_().requires(USING_TASKS);
        value_or_throw = value_or_throw.async_().requires(USING_TASKS);
    }

    ClassDeclaration::new("ResultExtensions")
        .static_()
        .partial()
        .method(map)
        .method(bind)
        .method(value_or_throw)
}
