//! Method and abstract-method declarations.

use std::collections::BTreeSet;

use aritygen_core::CodeBuilder;

use super::{
    AttributeRef, GenericParameter, Parameter, Visibility, XmlDoc, render_constraints,
    type_param_list,
};

/// Modifier flags for a concrete method.
///
/// Rendering order is fixed: `static`, `virtual`, `sealed`, `override`,
/// `async`, so repeated runs are byte-identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodModifiers {
    pub is_static: bool,
    pub is_virtual: bool,
    pub is_sealed: bool,
    pub is_override: bool,
    pub is_async: bool,
}

impl MethodModifiers {
    fn render(&self, decl: &mut String) {
        if self.is_static {
            decl.push_str("static ");
        }
        if self.is_virtual {
            decl.push_str("virtual ");
        }
        if self.is_sealed {
            decl.push_str("sealed ");
        }
        if self.is_override {
            decl.push_str("override ");
        }
        if self.is_async {
            decl.push_str("async ");
        }
    }
}

/// A concrete method with an opaque block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    visibility: Visibility,
    modifiers: MethodModifiers,
    return_ty: String,
    name: String,
    generics: Vec<GenericParameter>,
    parameters: Vec<Parameter>,
    attributes: Vec<AttributeRef>,
    body: String,
    docs: Option<XmlDoc>,
    requires: Vec<String>,
}

impl Method {
    pub fn new(return_ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            modifiers: MethodModifiers::default(),
            return_ty: return_ty.into(),
            name: name.into(),
            generics: Vec::new(),
            parameters: Vec::new(),
            attributes: Vec::new(),
            body: String::new(),
            docs: None,
            requires: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.modifiers.is_static = true;
        self
    }

    pub fn virtual_(mut self) -> Self {
        self.modifiers.is_virtual = true;
        self
    }

    pub fn sealed(mut self) -> Self {
        self.modifiers.is_sealed = true;
        self
    }

    pub fn override_(mut self) -> Self {
        self.modifiers.is_override = true;
        self
    }

    pub fn async_(mut self) -> Self {
        self.modifiers.is_async = true;
        self
    }

    pub fn generic(mut self, generic: GenericParameter) -> Self {
        self.generics.push(generic);
        self
    }

    pub fn generics(mut self, generics: impl IntoIterator<Item = GenericParameter>) -> Self {
        self.generics.extend(generics);
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn attribute(mut self, attribute: AttributeRef) -> Self {
        self.attributes.push(attribute);
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

    /// Register a `using` the signature or body depends on.
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
        for attribute in &self.attributes {
            attribute.render(out);
        }
        let mut decl = String::from(self.visibility.as_str());
        decl.push(' ');
        self.modifiers.render(&mut decl);
        if !self.return_ty.is_empty() {
            decl.push_str(&self.return_ty);
            decl.push(' ');
        }
        decl.push_str(&self.name);
        decl.push_str(&type_param_list(&self.generics));
        decl.push('(');
        decl.push_str(&Parameter::join(&self.parameters));
        decl.push(')');
        out.line(&decl);
        render_constraints(&self.generics, out);
        out.line("{");
        out.indent();
        out.lines(&self.body);
        out.dedent();
        out.line("}");
    }

    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        for attribute in &self.attributes {
            attribute.collect_usings(usings);
        }
        for generic in &self.generics {
            generic.collect_usings(usings);
        }
        usings.extend(self.requires.iter().cloned());
    }
}

/// An abstract method: a signature terminated with `;`, no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractMethod {
    visibility: Visibility,
    return_ty: String,
    name: String,
    generics: Vec<GenericParameter>,
    parameters: Vec<Parameter>,
    docs: Option<XmlDoc>,
    requires: Vec<String>,
}

impl AbstractMethod {
    pub fn new(return_ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            return_ty: return_ty.into(),
            name: name.into(),
            generics: Vec::new(),
            parameters: Vec::new(),
            docs: None,
            requires: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn generic(mut self, generic: GenericParameter) -> Self {
        self.generics.push(generic);
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn docs(mut self, docs: XmlDoc) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Register a `using` the signature depends on.
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
        decl.push_str(" abstract ");
        decl.push_str(&self.return_ty);
        decl.push(' ');
        decl.push_str(&self.name);
        decl.push_str(&type_param_list(&self.generics));
        decl.push('(');
        decl.push_str(&Parameter::join(&self.parameters));
        decl.push(')');
        // Rare case; constrained generics stay on the signature line.
        for generic in &self.generics {
            if let Some(clause) = generic.constraint_clause() {
                decl.push(' ');
                decl.push_str(&clause);
            }
        }
        decl.push(';');
        out.line(&decl);
    }

    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        for generic in &self.generics {
            generic.collect_usings(usings);
        }
        usings.extend(self.requires.iter().cloned());
    }
}
