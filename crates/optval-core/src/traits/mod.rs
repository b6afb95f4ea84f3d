use optval_primitives::ScalarKind;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

// ============================================================================
// SCALARS
// ============================================================================

mod private {
    pub trait Sealed {}
}

///
/// Scalar
///
/// A primitive value with a JSON literal encoding. Implemented exactly for
/// the types bound in the scalar registry; it cannot be implemented outside
/// this crate.
///

pub trait Scalar:
    private::Sealed
    + Clone
    + Debug
    + Default
    + Display
    + Eq
    + Hash
    + Ord
    + Serialize
    + DeserializeOwned
    + 'static
{
    const KIND: ScalarKind;
}

macro_rules! impl_scalar {
    ( $( ($kind:ident, $ty:ty, $alias:ident) ),* $(,)? ) => {
        $(
            impl private::Sealed for $ty {}

            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;
            }
        )*
    };
}

scalar_registry_entries!(impl_scalar);

// ============================================================================
// PRESENCE
// ============================================================================

///
/// Presence
///
/// Type-erased view over any optional: whether it holds a value and how it
/// renders. Lets callers handle optionals of different scalar types through
/// one `&dyn Presence`.
///

pub trait Presence: Display {
    fn is_defined(&self) -> bool;

    /// Scalar kind of the wrapped type, regardless of state.
    fn kind(&self) -> ScalarKind;

    /// Human-readable rendering; `<undefined>` when absent.
    fn to_text(&self) -> String {
        self.to_string()
    }
}

///
/// FieldPresence
///
/// Per-field presence report for a host structure made of optionals.
/// Usually derived with `#[derive(FieldPresence)]`.
///

pub trait FieldPresence {
    /// Every reported field paired with its optional, in declaration order.
    fn field_presence(&self) -> Vec<(&'static str, &dyn Presence)>;

    fn defined_fields(&self) -> Vec<&'static str> {
        self.field_presence()
            .into_iter()
            .filter(|(_, field)| field.is_defined())
            .map(|(name, _)| name)
            .collect()
    }

    fn undefined_fields(&self) -> Vec<&'static str> {
        self.field_presence()
            .into_iter()
            .filter(|(_, field)| !field.is_defined())
            .map(|(name, _)| name)
            .collect()
    }

    fn all_defined(&self) -> bool {
        self.field_presence()
            .iter()
            .all(|(_, field)| field.is_defined())
    }
}

///
/// TESTS
///
