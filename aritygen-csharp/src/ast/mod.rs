//! Member-level builder nodes of the C# declaration model.

mod attrs;
mod constructors;
mod docs;
mod fields;
mod generics;
mod methods;
mod params;
mod properties;

pub use attrs::AttributeRef;
pub use constructors::Constructor;
pub use docs::XmlDoc;
pub use fields::Field;
pub use generics::{GenericParameter, render_constraints, type_param_list};
pub use methods::{AbstractMethod, Method, MethodModifiers};
pub use params::Parameter;
pub use properties::{Property, PropertyStyle};

/// C# member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}
