//! Core runtime for optval: the `Optional<T>` scalar container, the scalar
//! bound and presence capability, JSON codec helpers, and errors.
#![warn(unreachable_pub)]

#[macro_use]
pub(crate) mod scalar_registry;

// public exports are one module level down
pub mod error;
pub mod serialize;
pub mod traits;
pub mod types;

pub use optval_primitives::{ALL_SCALAR_KINDS, JsonToken, ScalarFamily, ScalarKind};

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or serializers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        ScalarKind,
        traits::{FieldPresence, Presence, Scalar},
        types::*,
    };
}
