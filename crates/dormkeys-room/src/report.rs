//! Report rows produced by the dormitory.

use std::fmt;

use dormkeys_protocol::{ResidentName, RoomNumber};
use serde::{Deserialize, Serialize};

/// A room that holds fewer keys than the target supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortfallEntry {
    pub room_number: RoomNumber,
    /// Unassigned keys currently on hand (may be negative).
    pub num_keys: i64,
    /// Keys that must be cut to reach the target.
    pub needed: i64,
}

impl fmt::Display for ShortfallEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {}: {} keys, needs {} more",
            self.room_number, self.num_keys, self.needed
        )
    }
}

/// One room and the names of everyone checked in to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub room_number: RoomNumber,
    pub residents: Vec<ResidentName>,
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {}: ", self.room_number)?;
        for (i, resident) in self.residents.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{resident}")?;
        }
        Ok(())
    }
}
