use super::NonFiniteError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

///
/// Float32
///
/// Finite f32 only; -0.0 canonically stored as 0.0
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Serialize)]
pub struct Float32(f32);

impl Float32 {
    #[must_use]
    /// Fallible constructor that rejects non-finite values and normalizes -0.0.
    pub fn try_new(v: f32) -> Option<Self> {
        if !v.is_finite() {
            return None;
        }

        // canonicalize -0.0 to 0.0 so Eq/Hash/Ord are consistent
        Some(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Eq for Float32 {}

impl PartialEq for Float32 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl From<i16> for Float32 {
    fn from(n: i16) -> Self {
        Self(f32::from(n))
    }
}

impl TryFrom<f32> for Float32 {
    type Error = NonFiniteError;

    fn try_from(v: f32) -> Result<Self, Self::Error> {
        Self::try_new(v).ok_or(NonFiniteError {
            value: f64::from(v),
        })
    }
}

impl From<Float32> for f32 {
    fn from(x: Float32) -> Self {
        x.0
    }
}

impl Hash for Float32 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.0.to_bits()); // stable 4-byte IEEE-754
    }
}

impl Ord for Float32 {
    fn cmp(&self, other: &Self) -> Ordering {
        // no NaN, -0 normalized: total order agrees with ==
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Float32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'de> Deserialize<'de> for Float32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f32::deserialize(deserializer)?;
        Self::try_new(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid Float32 value: {value}")))
    }
}

///
/// TESTS
///
