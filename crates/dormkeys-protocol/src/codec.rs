//! Codec trait and implementations for serializing registry snapshots.
//!
//! A "codec" (coder/decoder) converts between Rust values and raw bytes.
//! The store never cares HOW a snapshot is serialized; it only needs
//! something implementing [`Codec`]. Swapping the format means swapping
//! the codec, nothing else.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// A codec that can encode Rust values to bytes and decode bytes back.
///
/// The methods are generic so one codec handles any serde type:
/// - `encode<T: Serialize>` → `T` can be turned into bytes
/// - `decode<T: DeserializeOwned>` → `T` can be rebuilt from bytes
///   without borrowing from the input buffer
pub trait Codec {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if the value can't be represented
    /// in this format.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::EmptyInput`] for a zero-length buffer and
    /// `ProtocolError::Decode` if the bytes are malformed or don't match
    /// the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that writes indented JSON (via `serde_json`).
///
/// Snapshots are small and an operator may want to open the data file in
/// an editor, so output is pretty-printed.
///
/// ## Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use dormkeys_protocol::{Codec, JsonCodec, RoomNumber};
///
/// let codec = JsonCodec;
/// let mut keys = BTreeMap::new();
/// keys.insert(RoomNumber::from("101"), 4_i64);
///
/// let bytes = codec.encode(&keys).unwrap();
/// let decoded: BTreeMap<RoomNumber, i64> = codec.decode(&bytes).unwrap();
/// assert_eq!(keys, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec_pretty(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Err(ProtocolError::EmptyInput);
        }
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
