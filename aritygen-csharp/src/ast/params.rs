//! Method and constructor parameters.

/// A single parameter: a rendered type expression plus a name.
///
/// The type expression is opaque text and may embed parameter modifiers
/// (`out`, `this`, `ref`) or nullable annotations (`TValue1?`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    ty: String,
    name: String,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Shorthand for an `out` parameter.
    pub fn out(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(format!("out {}", ty.into()), name)
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render as `Type name`.
    pub fn render(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }

    /// Render a parameter list as `Type1 name1, Type2 name2`.
    pub fn join(params: &[Parameter]) -> String {
        params
            .iter()
            .map(Parameter::render)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_type_then_name() {
        let p = Parameter::new("TValue1", "value1");
        assert_eq!(p.render(), "TValue1 value1");
    }

    #[test]
    fn out_shorthand() {
        let p = Parameter::out("TValue1?", "value1");
        assert_eq!(p.render(), "out TValue1? value1");
    }

    #[test]
    fn join_separates_with_commas() {
        let params = [
            Parameter::new("int", "a"),
            Parameter::new("string", "b"),
        ];
        assert_eq!(Parameter::join(&params), "int a, string b");
    }

    #[test]
    fn join_empty_list() {
        assert_eq!(Parameter::join(&[]), "");
    }
}
