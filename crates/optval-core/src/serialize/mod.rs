//! JSON text helpers.
//!
//! This module is format-level only:
//! - The single encode/decode contract is each type's serde impl; nothing
//!   here adds behaviour beyond delegating to it.
//! - Size limits are caller policy, passed through `DecodeOptions`.

mod json;

use crate::error::{DecodeError, EncodeError};
use serde::{Serialize, de::DeserializeOwned};

///
/// DecodeOptions
///
/// Caller-side decode policy.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DecodeOptions {
    /// Reject inputs longer than this many bytes before parsing. `None` is unbounded.
    pub max_bytes: Option<usize>,
}

impl DecodeOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_bytes: None }
    }

    #[must_use]
    pub const fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    fn check_len(&self, len: usize) -> Result<(), DecodeError> {
        match self.max_bytes {
            Some(max_bytes) if len > max_bytes => {
                Err(DecodeError::SizeLimitExceeded { len, max_bytes })
            }
            _ => Ok(()),
        }
    }
}

/// Serialize any value (typically a host structure of optionals) as JSON.
pub fn to_json<T>(value: &T) -> Result<Vec<u8>, EncodeError>
where
    T: Serialize + ?Sized,
{
    json::serialize(value)
}

pub fn to_json_string<T>(value: &T) -> Result<String, EncodeError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(EncodeError::from)
}

/// Deserialize a value produced by [`to_json`].
pub fn from_json<T>(bytes: &[u8]) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    from_json_with(bytes, &DecodeOptions::default())
}

/// Deserialize a value produced by [`to_json`], with explicit options.
pub fn from_json_with<T>(bytes: &[u8], options: &DecodeOptions) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    options.check_len(bytes.len())?;

    json::deserialize(bytes)
}

///
/// TESTS
///
