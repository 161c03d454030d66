//! Attribute references.

use std::collections::BTreeSet;

use aritygen_core::CodeBuilder;

/// A reference to a C# attribute, optionally requiring a `using`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRef {
    name: String,
    requires: Option<String>,
}

impl AttributeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: None,
        }
    }

    /// Register the `using` that brings this attribute into scope.
    pub fn requires(mut self, using: impl Into<String>) -> Self {
        self.requires = Some(using.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, out: &mut CodeBuilder) {
        out.line(&format!("[{}]", self.name));
    }

    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        if let Some(u) = &self.requires {
            usings.insert(u.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bracketed() {
        let mut out = CodeBuilder::csharp();
        AttributeRef::new("Fact").render(&mut out);
        assert_eq!(out.build(), "[Fact]\n");
    }

    #[test]
    fn collects_required_using() {
        let mut usings = BTreeSet::new();
        AttributeRef::new("Fact")
            .requires("Xunit")
            .collect_usings(&mut usings);
        assert!(usings.contains("Xunit"));
    }

    #[test]
    fn no_using_by_default() {
        let mut usings = BTreeSet::new();
        AttributeRef::new("Obsolete").collect_usings(&mut usings);
        assert!(usings.is_empty());
    }
}
