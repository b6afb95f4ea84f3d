mod float32;
mod float64;

pub use float32::*;
pub use float64::*;

use thiserror::Error as ThisError;

///
/// NonFiniteError
///
/// NaN and the infinities have no JSON literal, so float scalars refuse them.
///

#[derive(Clone, Copy, Debug, PartialEq, ThisError)]
#[error("non-finite float: {value}")]
pub struct NonFiniteError {
    pub value: f64,
}
