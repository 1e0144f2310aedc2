//! Unified error type for dormkeys.

use dormkeys_protocol::ProtocolError;
use dormkeys_room::RoomError;
use dormkeys_store::StoreError;

/// Top-level error that wraps every crate-specific error.
///
/// The `#[from]` attributes let `?` lift a sub-crate error into this
/// type, so desk methods return one error type whatever layer failed.
#[derive(Debug, thiserror::Error)]
pub enum DormkeysError {
    /// Encoding or decoding a snapshot failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Reading or writing the store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bookkeeping rule rejected the operation.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// The operator left a required field empty.
    #[error("{0} must not be empty")]
    BlankInput(&'static str),
}

impl DormkeysError {
    /// Returns `true` if the operator can fix this by changing their
    /// input, as opposed to a storage or data problem.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Room(_) | Self::BlankInput(_))
    }
}

#[cfg(test)]
mod tests {
    use dormkeys_protocol::RoomNumber;

    use super::*;

    #[test]
    fn test_from_room_error() {
        let err: DormkeysError = RoomError::RoomNotFound(RoomNumber::from("9")).into();
        assert!(matches!(err, DormkeysError::Room(_)));
        assert_eq!(err.to_string(), "room 9 not found, add the room first");
        assert!(err.is_rejection());
    }

    #[test]
    fn test_from_store_error() {
        let err: DormkeysError = StoreError::Corrupted("bad".into()).into();
        assert!(matches!(err, DormkeysError::Store(_)));
        assert!(err.to_string().contains("bad"));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_from_protocol_error() {
        let err: DormkeysError = ProtocolError::EmptyInput.into();
        assert!(matches!(err, DormkeysError::Protocol(_)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_blank_input_message() {
        let err = DormkeysError::BlankInput("resident name");
        assert_eq!(err.to_string(), "resident name must not be empty");
        assert!(err.is_rejection());
    }
}
