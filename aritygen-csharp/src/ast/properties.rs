//! Property declarations.

use std::collections::BTreeSet;

use aritygen_core::CodeBuilder;

use super::{Visibility, XmlDoc};

/// How a property renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyStyle {
    /// `public T Name { get; }`
    Auto,
    /// `public T Name => body;`
    Expression,
    /// `public override T Name => body;`
    Override,
    /// `public abstract T Name { get; }` — body text is suppressed.
    Abstract,
}

/// A property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    visibility: Visibility,
    is_static: bool,
    ty: String,
    name: String,
    style: PropertyStyle,
    body: String,
    docs: Option<XmlDoc>,
    requires: Vec<String>,
}

impl Property {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, style: PropertyStyle) -> Self {
        Self {
            visibility: Visibility::Public,
            is_static: false,
            ty: ty.into(),
            name: name.into(),
            style,
            body: String::new(),
            docs: None,
            requires: Vec::new(),
        }
    }

    /// `public abstract T Name { get; }`
    pub fn abstract_(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ty, name, PropertyStyle::Abstract)
    }

    /// `public override T Name => body;`
    pub fn override_expression(
        ty: impl Into<String>,
        name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let mut property = Self::new(ty, name, PropertyStyle::Override);
        property.body = body.into();
        property
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn docs(mut self, docs: XmlDoc) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Register a `using` the property type depends on.
    pub fn requires(mut self, using: impl Into<String>) -> Self {
        self.requires.push(using.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, out: &mut CodeBuilder) {
        if let Some(docs) = &self.docs {
            docs.render(out);
        }
        let mut decl = String::from(self.visibility.as_str());
        decl.push(' ');
        if self.is_static {
            decl.push_str("static ");
        }
        match self.style {
            PropertyStyle::Abstract => decl.push_str("abstract "),
            PropertyStyle::Override => decl.push_str("override "),
            PropertyStyle::Auto | PropertyStyle::Expression => {}
        }
        decl.push_str(&self.ty);
        decl.push(' ');
        decl.push_str(&self.name);
        match self.style {
            PropertyStyle::Auto | PropertyStyle::Abstract => {
                decl.push_str(" { get; }");
            }
            PropertyStyle::Expression | PropertyStyle::Override => {
                decl.push_str(" => ");
                decl.push_str(&self.body);
                decl.push(';');
            }
        }
        out.line(&decl);
    }

    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        usings.extend(self.requires.iter().cloned());
    }
}
