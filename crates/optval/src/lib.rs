//! ## Crate layout
//! - `error`: decode/encode errors and the stable decode error taxonomy.
//! - `primitives`: the scalar kind registry.
//! - `serialize`: JSON helpers and `DecodeOptions`.
//! - `traits`: `Scalar`, `Presence`, `FieldPresence`.
//! - `types`: `Optional<T>`, its per-scalar aliases, and the `Blob` / float scalars.
//!
//! The `prelude` module is what host code usually glob-imports.

pub use optval_core::{error, serialize, traits, types};
pub use optval_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Derives
//

pub use optval_derive::FieldPresence;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        FieldPresence,
        primitives::ScalarKind,
        traits::{FieldPresence as _, Presence, Scalar},
        types::*,
    };
    pub use serde::{Deserialize, Serialize};
}
