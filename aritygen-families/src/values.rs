//! Seed values for generated test fixtures.

use aritygen_core::{MAX_ORDINAL, NamingError};

/// Example data for one tuple position in generated fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedValue {
    /// Concrete C# type substituted for the position's type parameter.
    pub csharp_type: &'static str,
    /// Literal used to construct instances.
    pub literal: &'static str,
    /// Literal the type defaults to, or "null" for reference types.
    pub default_literal: &'static str,
}

impl SeedValue {
    pub fn is_reference_type(&self) -> bool {
        self.default_literal == "null"
    }
}

// Types are pairwise distinct so generated implicit-conversion tests
// never hit an ambiguous overload.
const SEEDS: [SeedValue; MAX_ORDINAL] = [
    SeedValue {
        csharp_type: "int",
        literal: "1",
        default_literal: "0",
    },
    SeedValue {
        csharp_type: "string",
        literal: "\"alpha\"",
        default_literal: "null",
    },
    SeedValue {
        csharp_type: "bool",
        literal: "true",
        default_literal: "false",
    },
    SeedValue {
        csharp_type: "double",
        literal: "2.5",
        default_literal: "0d",
    },
    SeedValue {
        csharp_type: "long",
        literal: "10L",
        default_literal: "0L",
    },
    SeedValue {
        csharp_type: "char",
        literal: "'x'",
        default_literal: "'\\0'",
    },
    SeedValue {
        csharp_type: "uint",
        literal: "7u",
        default_literal: "0u",
    },
    SeedValue {
        csharp_type: "short",
        literal: "(short)3",
        default_literal: "(short)0",
    },
];

/// The seed value for a 1-based tuple position.
pub fn seed(position: usize) -> Result<&'static SeedValue, NamingError> {
    if position == 0 || position > MAX_ORDINAL {
        return Err(NamingError::OrdinalOutOfRange(position));
    }
    Ok(&SEEDS[position - 1])
}
