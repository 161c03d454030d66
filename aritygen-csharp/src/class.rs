//! Type declarations: the aggregate of members, regions, and headers.

use std::collections::BTreeSet;

use aritygen_core::CodeBuilder;
use indexmap::IndexMap;
use thiserror::Error;

use crate::ast::{
    AbstractMethod, AttributeRef, Constructor, Field, GenericParameter, Method, Property,
    Visibility, XmlDoc, render_constraints, type_param_list,
};

/// Errors from declaration assembly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassError {
    #[error("region name must not be blank")]
    BlankRegionName,
    #[error("cannot merge an empty set of declarations")]
    EmptyMerge,
    #[error("cannot merge `{left}` with `{right}`: declaration headers differ")]
    MergeMismatch { left: String, right: String },
}

/// Modifier flags for a type declaration.
///
/// Rendering order is fixed: `static`, `abstract`, `sealed`, `partial`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeModifiers {
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_sealed: bool,
    pub is_partial: bool,
}

impl TypeModifiers {
    fn render(&self, decl: &mut String) {
        if self.is_static {
            decl.push_str("static ");
        }
        if self.is_abstract {
            decl.push_str("abstract ");
        }
        if self.is_sealed {
            decl.push_str("sealed ");
        }
        if self.is_partial {
            decl.push_str("partial ");
        }
    }
}

/// A reference to another type: base class or implemented capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    name: String,
    requires: Option<String>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: None,
        }
    }

    /// Register the `using` that brings this type into scope.
    pub fn requires(mut self, using: impl Into<String>) -> Self {
        self.requires = Some(using.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        if let Some(u) = &self.requires {
            usings.insert(u.clone());
        }
    }
}

/// The closed set of method-shaped members a declaration holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodKind {
    Concrete(Method),
    Abstract(AbstractMethod),
}

impl MethodKind {
    fn render(&self, out: &mut CodeBuilder) {
        match self {
            Self::Concrete(method) => method.render(out),
            Self::Abstract(method) => method.render(out),
        }
    }

    fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        match self {
            Self::Concrete(method) => method.collect_usings(usings),
            Self::Abstract(method) => method.collect_usings(usings),
        }
    }
}

impl From<Method> for MethodKind {
    fn from(method: Method) -> Self {
        Self::Concrete(method)
    }
}

impl From<AbstractMethod> for MethodKind {
    fn from(method: AbstractMethod) -> Self {
        Self::Abstract(method)
    }
}

/// Ordered member lists shared by the top level and by each region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Members {
    fields: Vec<Field>,
    constructors: Vec<Constructor>,
    properties: Vec<Property>,
    methods: Vec<MethodKind>,
}

impl Members {
    fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.constructors.is_empty()
            && self.properties.is_empty()
            && self.methods.is_empty()
    }

    /// Render member sections separated by single blank lines: fields as
    /// one block, each constructor alone, properties as one block, each
    /// method alone. `started` carries separator state from the caller
    /// so consecutive sections across region boundaries stay separated.
    fn render(&self, out: &mut CodeBuilder, started: &mut bool) {
        if !self.fields.is_empty() {
            separate(out, started);
            for field in &self.fields {
                field.render(out);
            }
        }
        for constructor in &self.constructors {
            separate(out, started);
            constructor.render(out);
        }
        if !self.properties.is_empty() {
            separate(out, started);
            for property in &self.properties {
                property.render(out);
            }
        }
        for method in &self.methods {
            separate(out, started);
            method.render(out);
        }
    }

    fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        for field in &self.fields {
            field.collect_usings(usings);
        }
        for constructor in &self.constructors {
            constructor.collect_usings(usings);
        }
        for property in &self.properties {
            property.collect_usings(usings);
        }
        for method in &self.methods {
            method.collect_usings(usings);
        }
    }

    fn extend(&mut self, other: Members) {
        self.fields.extend(other.fields);
        self.constructors.extend(other.constructors);
        self.properties.extend(other.properties);
        self.methods.extend(other.methods);
    }
}

fn separate(out: &mut CodeBuilder, started: &mut bool) {
    if *started {
        out.blank();
    }
    *started = true;
}

/// A named `#region` grouping of members within a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    members: Members,
}

impl Region {
    pub fn add_field(&mut self, field: Field) -> &mut Self {
        self.members.fields.push(field);
        self
    }

    pub fn add_constructor(&mut self, constructor: Constructor) -> &mut Self {
        self.members.constructors.push(constructor);
        self
    }

    pub fn add_property(&mut self, property: Property) -> &mut Self {
        self.members.properties.push(property);
        self
    }

    pub fn add_method(&mut self, method: impl Into<MethodKind>) -> &mut Self {
        self.members.methods.push(method.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn render(&self, name: &str, out: &mut CodeBuilder) {
        out.line(&format!("#region {name}"));
        out.blank();
        if !self.members.is_empty() {
            let mut started = false;
            self.members.render(out, &mut started);
            out.blank();
        }
        out.line(&format!("#endregion {name}"));
    }

    fn extend(&mut self, other: Region) {
        self.members.extend(other.members);
    }
}

/// A C# type declaration under construction.
///
/// Built through fluent calls during a single builder invocation, then
/// rendered once. Member order within each kind is preserved; the body
/// renders fields, constructors, properties, methods, then regions in
/// declaration order, per the byte-stable ordering contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    name: String,
    visibility: Visibility,
    modifiers: TypeModifiers,
    docs: Option<XmlDoc>,
    attributes: Vec<AttributeRef>,
    generics: Vec<GenericParameter>,
    base_type: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    members: Members,
    regions: IndexMap<String, Region>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            modifiers: TypeModifiers::default(),
            docs: None,
            attributes: Vec::new(),
            generics: Vec::new(),
            base_type: None,
            interfaces: Vec::new(),
            members: Members::default(),
            regions: IndexMap::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.modifiers.is_abstract = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.modifiers.is_static = true;
        self
    }

    pub fn sealed(mut self) -> Self {
        self.modifiers.is_sealed = true;
        self
    }

    pub fn partial(mut self) -> Self {
        self.modifiers.is_partial = true;
        self
    }

    pub fn docs(mut self, docs: XmlDoc) -> Self {
        self.docs = Some(docs);
        self
    }

    pub fn attribute(mut self, attribute: AttributeRef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a generic parameter. Names must be unique within the
    /// declaration.
    pub fn generic(mut self, generic: GenericParameter) -> Self {
        debug_assert!(
            self.generics.iter().all(|g| g.name() != generic.name()),
            "duplicate generic parameter {}",
            generic.name()
        );
        self.generics.push(generic);
        self
    }

    pub fn generics(mut self, generics: impl IntoIterator<Item = GenericParameter>) -> Self {
        for generic in generics {
            self = self.generic(generic);
        }
        self
    }

    pub fn base(mut self, base: TypeRef) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn implements(mut self, capability: TypeRef) -> Self {
        self.interfaces.push(capability);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.members.fields.push(field);
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.members.constructors.push(constructor);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.members.properties.push(property);
        self
    }

    pub fn method(mut self, method: impl Into<MethodKind>) -> Self {
        self.members.methods.push(method.into());
        self
    }

    /// Populate the named region, creating it on first request and
    /// returning the same region on subsequent requests. A blank name
    /// fails fast.
    pub fn with_region<F>(mut self, name: impl Into<String>, f: F) -> Result<Self, ClassError>
    where
        F: FnOnce(&mut Region),
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ClassError::BlankRegionName);
        }
        f(self.regions.entry(name).or_default());
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Merge declarations sharing a header into one declaration whose
    /// regions are the union keyed by region name. Top-level member
    /// lists are concatenated in input order; docs, attributes, and
    /// generics follow the first declaration.
    pub fn merge(
        declarations: impl IntoIterator<Item = ClassDeclaration>,
    ) -> Result<ClassDeclaration, ClassError> {
        let mut iter = declarations.into_iter();
        let mut merged = iter.next().ok_or(ClassError::EmptyMerge)?;
        for declaration in iter {
            if declaration.name != merged.name
                || declaration.visibility != merged.visibility
                || declaration.modifiers != merged.modifiers
            {
                return Err(ClassError::MergeMismatch {
                    left: merged.name,
                    right: declaration.name,
                });
            }
            merged.members.extend(declaration.members);
            for (name, region) in declaration.regions {
                merged.regions.entry(name).or_default().extend(region);
            }
        }
        Ok(merged)
    }

    /// The union of `using`s required by the base type, capability
    /// references, generic constraints, attributes, and every member,
    /// including region members.
    pub fn collect_usings(&self, usings: &mut BTreeSet<String>) {
        if let Some(base) = &self.base_type {
            base.collect_usings(usings);
        }
        for capability in &self.interfaces {
            capability.collect_usings(usings);
        }
        for generic in &self.generics {
            generic.collect_usings(usings);
        }
        for attribute in &self.attributes {
            attribute.collect_usings(usings);
        }
        self.members.collect_usings(usings);
        for region in self.regions.values() {
            region.members.collect_usings(usings);
        }
    }

    pub fn usings(&self) -> BTreeSet<String> {
        let mut usings = BTreeSet::new();
        self.collect_usings(&mut usings);
        usings
    }

    pub fn render(&self, out: &mut CodeBuilder) {
        if let Some(docs) = &self.docs {
            docs.render(out);
        }
        for attribute in &self.attributes {
            attribute.render(out);
        }

        let mut header = String::from(self.visibility.as_str());
        header.push(' ');
        self.modifiers.render(&mut header);
        header.push_str("class ");
        header.push_str(&self.name);
        header.push_str(&type_param_list(&self.generics));
        let mut bases: Vec<&str> = Vec::new();
        if let Some(base) = &self.base_type {
            bases.push(base.name());
        }
        for capability in &self.interfaces {
            bases.push(capability.name());
        }
        if !bases.is_empty() {
            header.push_str(" : ");
            header.push_str(&bases.join(", "));
        }
        out.line(&header);
        render_constraints(&self.generics, out);

        out.line("{");
        out.indent();
        let mut started = false;
        self.members.render(out, &mut started);
        for (name, region) in &self.regions {
            separate(out, &mut started);
            region.render(name, out);
        }
        out.dedent();
        out.line("}");
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Parameter, PropertyStyle};

    use super::*;

    fn render(declaration: &ClassDeclaration) -> String {
        let mut out = CodeBuilder::csharp();
        declaration.render(&mut out);
        out.build()
    }

    #[test]
    fn empty_class() {
        let declaration = ClassDeclaration::new("Empty").sealed();
        assert_eq!(render(&declaration), "public sealed class Empty\n{\n}\n");
    }

    #[test]
    fn type_modifier_order() {
        let declaration = ClassDeclaration::new("Helpers").static_().partial();
        assert!(render(&declaration).starts_with("public static partial class Helpers\n"));
    }

    #[test]
    fn header_with_generics_base_and_capability() {
        let declaration = ClassDeclaration::new("SuccessResult")
            .sealed()
            .generic(GenericParameter::notnull("TValue1"))
            .base(TypeRef::new("Result<TValue1>"))
            .implements(TypeRef::new("IEquatable<TValue1>").requires("System"));
        let text = render(&declaration);
        assert!(text.starts_with(
            "public sealed class SuccessResult<TValue1> : Result<TValue1>, IEquatable<TValue1>\n    where TValue1 : notnull\n{\n"
        ));
    }

    #[test]
    fn body_ordering_contract() {
        let declaration = ClassDeclaration::new("Sample")
            .field(Field::readonly("int", "_a"))
            .field(Field::readonly("int", "_b"))
            .constructor(Constructor::new("Sample").body("_a = 1;\n_b = 2;"))
            .property(Property::override_expression("bool", "IsSuccess", "true"))
            .method(Method::new("void", "DoFirst").body("return;"))
            .method(Method::new("void", "DoSecond").body("return;"));
        assert_eq!(
            render(&declaration),
            "public class Sample\n\
             {\n\
             \x20   private readonly int _a;\n\
             \x20   private readonly int _b;\n\
             \n\
             \x20   public Sample()\n\
             \x20   {\n\
             \x20       _a = 1;\n\
             \x20       _b = 2;\n\
             \x20   }\n\
             \n\
             \x20   public override bool IsSuccess => true;\n\
             \n\
             \x20   public void DoFirst()\n\
             \x20   {\n\
             \x20       return;\n\
             \x20   }\n\
             \n\
             \x20   public void DoSecond()\n\
             \x20   {\n\
             \x20       return;\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn regions_render_with_banners_and_separators() {
        let declaration = ClassDeclaration::new("Result")
            .static_()
            .with_region("Arity 1", |region| {
                region.add_method(Method::new("void", "A").body("return;"));
            })
            .unwrap()
            .with_region("Arity 2", |region| {
                region.add_method(Method::new("void", "B").body("return;"));
            })
            .unwrap();
        let text = render(&declaration);
        assert!(text.contains("    #region Arity 1\n\n    public void A()"));
        assert!(text.contains("    #endregion Arity 1\n\n    #region Arity 2\n"));
        assert!(text.ends_with("    #endregion Arity 2\n}\n"));
    }

    #[test]
    fn region_requests_return_the_same_region() {
        let declaration = ClassDeclaration::new("Result")
            .with_region("Arity 1", |region| {
                region.add_method(Method::new("void", "A"));
            })
            .unwrap()
            .with_region("Arity 1", |region| {
                region.add_method(Method::new("void", "B"));
            })
            .unwrap();
        assert_eq!(declaration.region_names().count(), 1);
        let text = render(&declaration);
        assert_eq!(text.matches("#region Arity 1").count(), 1);
        assert!(text.contains("public void A()"));
        assert!(text.contains("public void B()"));
    }

    #[test]
    fn blank_region_name_fails() {
        let result = ClassDeclaration::new("Result").with_region("  ", |_| {});
        assert_eq!(result.unwrap_err(), ClassError::BlankRegionName);
    }

    #[test]
    fn merge_unions_regions_by_name() {
        let first = ClassDeclaration::new("Result")
            .static_()
            .with_region("Arity 1", |region| {
                region.add_method(Method::new("void", "A"));
            })
            .unwrap();
        let second = ClassDeclaration::new("Result")
            .static_()
            .with_region("Arity 1", |region| {
                region.add_method(Method::new("void", "B"));
            })
            .unwrap()
            .with_region("Arity 2", |region| {
                region.add_method(Method::new("void", "C"));
            })
            .unwrap();

        let merged = ClassDeclaration::merge([first, second]).unwrap();

        let names: Vec<&str> = merged.region_names().collect();
        assert_eq!(names, ["Arity 1", "Arity 2"]);
        let text = render(&merged);
        assert_eq!(text.matches("#region Arity 1").count(), 1);
        assert!(text.contains("public void A()"));
        assert!(text.contains("public void B()"));
        assert!(text.contains("public void C()"));
    }

    #[test]
    fn merge_rejects_differing_headers() {
        let first = ClassDeclaration::new("Result").static_();
        let second = ClassDeclaration::new("Result").sealed();
        let error = ClassDeclaration::merge([first, second]).unwrap_err();
        assert!(matches!(error, ClassError::MergeMismatch { .. }));
    }

    #[test]
    fn merge_of_nothing_fails() {
        let error = ClassDeclaration::merge([]).unwrap_err();
        assert_eq!(error, ClassError::EmptyMerge);
    }

    #[test]
    fn usings_union_base_capability_and_member() {
        let declaration = ClassDeclaration::new("Sample")
            .base(TypeRef::new("BaseType").requires("Alpha"))
            .implements(TypeRef::new("ICapability").requires("Beta"))
            .method(Method::new("void", "Do").requires("Gamma"))
            .method(Method::new("void", "DoAgain").requires("Gamma"));
        let usings: Vec<String> = declaration.usings().into_iter().collect();
        assert_eq!(usings, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn region_member_usings_are_included() {
        let declaration = ClassDeclaration::new("Result")
            .with_region("Arity 1", |region| {
                region.add_method(Method::new("void", "A").requires("Xunit"));
            })
            .unwrap();
        assert!(declaration.usings().contains("Xunit"));
    }

    #[test]
    fn abstract_methods_interleave_with_concrete() {
        let declaration = ClassDeclaration::new("Base")
            .abstract_()
            .method(AbstractMethod::new("void", "IfSuccess").parameter(Parameter::new(
                "Action<TValue1>",
                "action",
            )))
            .method(Method::new("void", "Noop").body(""));
        let text = render(&declaration);
        assert!(text.contains("    public abstract void IfSuccess(Action<TValue1> action);\n"));
        assert!(text.contains("    public void Noop()\n"));
    }

    #[test]
    fn property_styles_in_body() {
        let declaration = ClassDeclaration::new("Flags")
            .property(Property::new("bool", "Plain", PropertyStyle::Auto))
            .property(Property::abstract_("bool", "IsFirst"));
        let text = render(&declaration);
        assert!(text.contains("    public bool Plain { get; }\n"));
        assert!(text.contains("    public abstract bool IsFirst { get; }\n"));
    }
}
