//! Error types for the store layer.

use std::path::PathBuf;

use dormkeys_protocol::ProtocolError;

/// Errors that can occur while reading or writing a snapshot.
///
/// A missing snapshot is NOT an error: [`Store::read`](crate::Store::read)
/// reports it as `Ok(None)` and callers start from an empty registry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying file could not be read, written, or renamed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot bytes could not be encoded or decoded.
    #[error(transparent)]
    Codec(#[from] ProtocolError),

    /// The snapshot decoded cleanly but breaks a rule of the data it
    /// holds (e.g. a room stored under the wrong number).
    #[error("corrupted snapshot: {0}")]
    Corrupted(String),

    /// An in-memory store's lock was poisoned by a panicking writer.
    #[error("store lock was poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
