//! C# declaration model for the aritygen source generator.
//!
//! The model is a set of builder structs, one per member kind, that
//! accumulate configuration through fluent calls and render themselves
//! into an indentation-tracking [`CodeBuilder`](aritygen_core::CodeBuilder).
//! A [`ClassDeclaration`] aggregates members (optionally grouped under
//! named `#region` banners) and a [`SourceFile`] wraps declarations in a
//! namespace with the deduplicated union of every required `using`.
//!
//! Bodies and type expressions are opaque strings: the model performs no
//! C# parsing, and the caller is responsible for supplying syntactically
//! valid fragments.

pub mod ast;

mod class;
mod source_file;

pub use ast::{
    AbstractMethod, AttributeRef, Constructor, Field, GenericParameter, Method, MethodModifiers,
    Parameter, Property, PropertyStyle, Visibility, XmlDoc,
};
pub use class::{ClassDeclaration, ClassError, MethodKind, Region, TypeModifiers, TypeRef};
pub use source_file::SourceFile;
