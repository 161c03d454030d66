//! Generic type parameters and constraint clauses.

use std::collections::BTreeSet;

use aritygen_core::CodeBuilder;

/// A generic type parameter with an optional constraint.
///
/// An empty constraint means the parameter is unconstrained. The name
/// must be unique within its owning declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParameter {
    name: String,
    constraint: String,
    requires: Option<String>,
}

impl GenericParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: String::new(),
            requires: None,
        }
    }

    /// Shorthand for a `notnull`-constrained parameter.
    pub fn notnull(name: impl Into<String>) -> Self {
        Self::new(name).constraint("notnull")
    }

    /// Set the constraint expression (e.g. `notnull`, `class, new()`).
    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Register a `using` the constraint expression depends on.
    pub fn requires(mut self, using: impl Into<String>) -> Self {
        self.requires = Some(using.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_constraint(&self) -> bool {
        !self.constraint.is_empty()
    }

    /// The `where` clause for this parameter, if constrained.
    pub fn constraint_clause(&self) -> Option<String> {
        if self.constraint.is_empty() {
            None
        } else {
            Some(format!("where {} : {}", self.name, self.constraint))
        }
    }

    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        if let Some(u) = &self.requires {
            usings.insert(u.clone());
        }
    }
}

/// Render `<T1, T2>` for a parameter list, or an empty string.
pub fn type_param_list(params: &[GenericParameter]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = params.iter().map(GenericParameter::name).collect();
    format!("<{}>", names.join(", "))
}

/// Write one indented `where` line per constrained parameter.
pub fn render_constraints(params: &[GenericParameter], out: &mut CodeBuilder) {
    let clauses: Vec<String> = params
        .iter()
        .filter_map(GenericParameter::constraint_clause)
        .collect();
    if clauses.is_empty() {
        return;
    }
    out.indent();
    for clause in clauses {
        out.line(&clause);
    }
    out.dedent();
}
