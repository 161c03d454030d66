//! Constructor declarations.

use std::collections::BTreeSet;

use aritygen_core::CodeBuilder;

use super::{Parameter, Visibility, XmlDoc};

/// A constructor with an opaque body and an optional chained call
/// (`: this(...)` or `: base(...)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    visibility: Visibility,
    class_name: String,
    parameters: Vec<Parameter>,
    chained: Option<String>,
    body: String,
    docs: Option<XmlDoc>,
    requires: Vec<String>,
}

impl Constructor {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            class_name: class_name.into(),
            parameters: Vec::new(),
            chained: None,
            body: String::new(),
            docs: None,
            requires: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
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

    /// Chain to another constructor, e.g. `this(exception, true)`.
    pub fn chained(mut self, call: impl Into<String>) -> Self {
        self.chained = Some(call.into());
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

    pub fn render(&self, out: &mut CodeBuilder) {
        if let Some(docs) = &self.docs {
            docs.render(out);
        }
        out.line(&format!(
            "{} {}({})",
            self.visibility.as_str(),
            self.class_name,
            Parameter::join(&self.parameters)
        ));
        if let Some(chained) = &self.chained {
            out.indent();
            out.line(&format!(": {chained}"));
            out.dedent();
        }
        out.line("{");
        out.indent();
        out.lines(&self.body);
        out.dedent();
        out.line("}");
    }

    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        usings.extend(self.requires.iter().cloned());
    }
}
