//! # dormkeys
//!
//! Room occupancy, physical key inventory, and lost-key fines for a small
//! residence.
//!
//! The bookkeeping rules live in `dormkeys-room`; this crate puts a
//! [`FrontDesk`] in front of them. The desk takes the text an operator
//! typed, turns it into typed operations on a [`Dormitory`], and writes
//! the dormitory back to its [`Store`] after every change that succeeds.
//!
//! ## Quick Start
//!
//! ```rust
//! use dormkeys::prelude::*;
//!
//! let mut desk = FrontDesk::open(MemoryStore::new())?;
//! desk.add_room("101", None)?;
//! desk.check_in("101", "alice")?;
//! desk.report_key_loss("101", "alice", "room_key")?;
//!
//! let shortfall = desk.inventory_shortfall();
//! assert_eq!(shortfall[0].needed, 1);
//! # Ok::<(), DormkeysError>(())
//! ```

mod desk;
mod error;
pub mod logging;

pub use desk::FrontDesk;
pub use error::DormkeysError;

pub use dormkeys_protocol::{ResidentName, RoomNumber};
pub use dormkeys_room::{
    Dormitory, FineRecord, KeyLoss, KeyType, Occupancy, Room, RoomError, RosterEntry,
    ShortfallEntry, config,
};
pub use dormkeys_store::{FileStore, MemoryStore, Store, StoreError};

/// Everything an operator surface needs, in one import.
pub mod prelude {
    pub use crate::{
        Dormitory, DormkeysError, FileStore, FineRecord, FrontDesk, KeyType, MemoryStore,
        RoomError, RosterEntry, ShortfallEntry, Store, StoreError,
    };
}
