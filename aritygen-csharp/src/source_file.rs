//! A renderable source file: namespace, usings, and type declarations.

use std::collections::BTreeSet;

use aritygen_core::CodeBuilder;

use crate::class::ClassDeclaration;

/// One output file: a namespace plus an ordered list of declarations.
///
/// Rendering order is the file contract: optional `#nullable enable`
/// pragma, blank line, the sorted deduplicated union of every required
/// `using`, blank line, the file-scoped namespace declaration, blank
/// line, then each declaration separated by a blank line. Usings that
/// name the file's own namespace are omitted.
#[derive(Debug, Clone)]
pub struct SourceFile {
    namespace: String,
    nullable: bool,
    extra_usings: Vec<String>,
    types: Vec<ClassDeclaration>,
}

impl SourceFile {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            nullable: true,
            extra_usings: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Disable the strict null-checking pragma.
    pub fn without_nullable(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Add an explicit `using` beyond what the declarations require.
    pub fn using(mut self, using: impl Into<String>) -> Self {
        self.extra_usings.push(using.into());
        self
    }

    pub fn usings(mut self, usings: impl IntoIterator<Item = String>) -> Self {
        self.extra_usings.extend(usings);
        self
    }

    /// Append a type declaration.
    pub fn declaration(mut self, declaration: ClassDeclaration) -> Self {
        self.types.push(declaration);
        self
    }

    pub fn declarations(
        mut self,
        declarations: impl IntoIterator<Item = ClassDeclaration>,
    ) -> Self {
        self.types.extend(declarations);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The computed import set: extra usings plus every declaration's
    /// own usings, sorted and deduplicated.
    pub fn computed_usings(&self) -> BTreeSet<String> {
        let mut usings: BTreeSet<String> = self.extra_usings.iter().cloned().collect();
        for declaration in &self.types {
            declaration.collect_usings(&mut usings);
        }
        usings.remove(&self.namespace);
        usings
    }

    pub fn render(&self) -> String {
        let mut out = CodeBuilder::csharp();
        if self.nullable {
            out.line("#nullable enable");
            out.blank();
        }
        let usings = self.computed_usings();
        if !usings.is_empty() {
            for using in &usings {
                out.line(&format!("using {using};"));
            }
            out.blank();
        }
        out.line(&format!("namespace {};", self.namespace));
        for declaration in &self.types {
            out.blank();
            declaration.render(&mut out);
        }
        out.build()
    }
}
