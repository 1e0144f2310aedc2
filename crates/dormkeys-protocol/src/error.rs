//! Error types for the protocol layer.
//!
//! Each crate in dormkeys defines its own error enum. A `ProtocolError`
//! always means the problem is in turning records into bytes or back,
//! never in the bookkeeping rules or the storage medium.

/// Errors that can occur while encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust value into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a Rust value).
    ///
    /// Common causes: a hand-edited snapshot with malformed JSON,
    /// missing fields, or a negative loss counter.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The input held no bytes at all.
    ///
    /// Reported separately from [`ProtocolError::Decode`] so callers can
    /// tell a truncated snapshot from a malformed one.
    #[error("input is empty")]
    EmptyInput,
}
