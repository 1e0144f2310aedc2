//! Error types for the room layer.

use dormkeys_protocol::{ResidentName, RoomNumber};

/// Errors that can occur during room and dormitory operations.
///
/// Every variant is a rejection of one operation: when one of these is
/// returned, the room it names is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// The room already holds its maximum number of residents.
    #[error("room {room} already has {capacity} residents")]
    CapacityExceeded { room: RoomNumber, capacity: usize },

    /// A resident with this name is already checked in to the room.
    #[error("{resident} is already checked in to room {room}")]
    DuplicateResident {
        room: RoomNumber,
        resident: ResidentName,
    },

    /// No resident with this name is checked in to the room.
    #[error("{resident} is not checked in to room {room}")]
    ResidentNotFound {
        room: RoomNumber,
        resident: ResidentName,
    },

    /// The key type text is neither `room_key` nor `entrance_key`.
    #[error("invalid key type {0:?}, use 'room_key' or 'entrance_key'")]
    InvalidKeyType(String),

    /// No room with this number has been registered.
    #[error("room {0} not found, add the room first")]
    RoomNotFound(RoomNumber),
}
