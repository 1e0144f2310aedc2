//! The `Store` contract and the codec-aware snapshot helpers.

use dormkeys_protocol::Codec;
use serde::{Serialize, de::DeserializeOwned};

use crate::StoreError;

/// A durable medium holding at most one snapshot.
///
/// Implementations move whole buffers: a snapshot is always read and
/// written in one piece, and the resource behind it is released before
/// the call returns, on success and on failure alike.
pub trait Store {
    /// Reads the stored snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the stored snapshot with `data`.
    fn write(&self, data: &[u8]) -> Result<(), StoreError>;

    /// A short human-readable description of where the bytes live,
    /// used in log lines.
    fn location(&self) -> String;
}

/// Encodes `value` with `codec` and writes it to `store`.
pub fn save_snapshot<S, C, T>(store: &S, codec: &C, value: &T) -> Result<(), StoreError>
where
    S: Store + ?Sized,
    C: Codec,
    T: Serialize,
{
    let bytes = codec.encode(value)?;
    store.write(&bytes)?;
    tracing::debug!(
        location = %store.location(),
        bytes = bytes.len(),
        "snapshot written"
    );
    Ok(())
}

/// Reads and decodes a snapshot from `store`.
///
/// Returns `Ok(None)` if the store holds no snapshot yet.
pub fn load_snapshot<S, C, T>(store: &S, codec: &C) -> Result<Option<T>, StoreError>
where
    S: Store + ?Sized,
    C: Codec,
    T: DeserializeOwned,
{
    let Some(bytes) = store.read()? else {
        tracing::debug!(location = %store.location(), "no snapshot stored");
        return Ok(None);
    };
    let value = codec.decode(&bytes)?;
    tracing::debug!(
        location = %store.location(),
        bytes = bytes.len(),
        "snapshot read"
    );
    Ok(Some(value))
}
