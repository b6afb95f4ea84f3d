//! Scalar kind registry shared by the optional-value crates.
//!
//! Every scalar an optional can wrap is declared exactly once, in
//! `scalar_kind_registry_entries!`. Everything else here is derived from it.

#[macro_use]
mod macros;

use std::fmt;

///
/// ScalarKind
///
/// Canonical tag for one wrappable scalar type.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ScalarKind {
    Blob,
    Bool,
    Char,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Isize,
    Text,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Usize,
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        scalar_kind_registry!(metadata_from_registry, self)
    }

    /// Stable registry name, identical to the variant name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        scalar_kind_registry!(name_from_registry, self)
    }

    #[must_use]
    pub const fn family(self) -> ScalarFamily {
        self.metadata().family
    }

    /// Return whether this scalar encodes as a JSON number.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.metadata().is_numeric
    }

    /// Return whether this scalar can hold negative values.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        self.metadata().is_signed
    }

    /// JSON token class a defined value of this kind encodes to.
    #[must_use]
    pub const fn json_token(self) -> JsonToken {
        self.family().json_token()
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ScalarMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub family: ScalarFamily,
    pub is_numeric: bool,
    pub is_signed: bool,
}

///
/// ScalarFamily
///
/// Coarse grouping by literal grammar.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarFamily {
    Blob,
    Bool,
    Float,
    Integer,
    Text,
}

impl ScalarFamily {
    #[must_use]
    pub const fn json_token(self) -> JsonToken {
        match self {
            Self::Bool => JsonToken::Bool,
            Self::Float | Self::Integer => JsonToken::Number,
            Self::Blob | Self::Text => JsonToken::String,
        }
    }
}

///
/// JsonToken
///
/// JSON literal class produced for a defined value. Undefined is always `null`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum JsonToken {
    Bool,
    Number,
    String,
}

/// Ordered list of all scalar kinds in registry order.
pub const ALL_SCALAR_KINDS: [ScalarKind; 18] = scalar_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///
