//! Field declarations.

use std::collections::BTreeSet;

use aritygen_core::CodeBuilder;

use super::Visibility;

/// A field declaration, private by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    visibility: Visibility,
    is_static: bool,
    is_readonly: bool,
    ty: String,
    name: String,
    initializer: Option<String>,
    requires: Vec<String>,
}

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Private,
            is_static: false,
            is_readonly: false,
            ty: ty.into(),
            name: name.into(),
            initializer: None,
            requires: Vec::new(),
        }
    }

    /// Shorthand for `private readonly`.
    pub fn readonly(ty: impl Into<String>, name: impl Into<String>) -> Self {
        let mut field = Self::new(ty, name);
        field.is_readonly = true;
        field
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    /// Register a `using` the field's type expression depends on.
    pub fn requires(mut self, using: impl Into<String>) -> Self {
        self.requires.push(using.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, out: &mut CodeBuilder) {
        let mut line = String::from(self.visibility.as_str());
        line.push(' ');
        if self.is_static {
            line.push_str("static ");
        }
        if self.is_readonly {
            line.push_str("readonly ");
        }
        line.push_str(&self.ty);
        line.push(' ');
        line.push_str(&self.name);
        if let Some(init) = &self.initializer {
            line.push_str(" = ");
            line.push_str(init);
        }
        line.push(';');
        out.line(&line);
    }

    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        usings.extend(self.requires.iter().cloned());
    }
}
