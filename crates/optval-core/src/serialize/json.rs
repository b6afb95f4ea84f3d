use crate::error::{DecodeError, EncodeError};
use serde::{Serialize, de::DeserializeOwned};

/// Serialize a value into JSON bytes.
pub(super) fn serialize<T>(t: &T) -> Result<Vec<u8>, EncodeError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec(t).map_err(EncodeError::from)
}

/// Deserialize one complete JSON document; trailing non-whitespace is an error.
pub(super) fn deserialize<T>(bytes: &[u8]) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(DecodeError::from)
}
