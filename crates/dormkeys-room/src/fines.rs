//! The fine schedule.
//!
//! Fines are tiered per key type: the first loss costs the base rate,
//! and every loss from the second onward costs the base rate twice (once
//! as the charge, once as a surcharge). With rate `r` and `n` losses:
//!
//! ```text
//! n < 2  →  r·n
//! n ≥ 2  →  r·n + r·(n − 1)
//! ```

use std::fmt;

use dormkeys_protocol::{ResidentName, RoomNumber};
use serde::{Deserialize, Serialize};

use crate::{KeyLoss, KeyType};

/// Fine owed for `losses` losses at base `rate`.
pub fn tiered_fine(losses: u32, rate: u64) -> u64 {
    let n = u64::from(losses);
    if n < 2 { rate * n } else { rate * n + rate * (n - 1) }
}

/// What one resident owes, alongside the loss counts it was computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineRecord {
    pub room_fine: u64,
    pub entrance_fine: u64,
    pub room_key_loss: u32,
    pub entrance_key_loss: u32,
}

impl FineRecord {
    /// Applies the fine schedule to a resident's loss counters.
    pub fn assess(loss: &KeyLoss) -> Self {
        let room_key_loss = loss.count(KeyType::RoomKey);
        let entrance_key_loss = loss.count(KeyType::EntranceKey);
        Self {
            room_fine: tiered_fine(room_key_loss, KeyType::RoomKey.fine_rate()),
            entrance_fine: tiered_fine(
                entrance_key_loss,
                KeyType::EntranceKey.fine_rate(),
            ),
            room_key_loss,
            entrance_key_loss,
        }
    }

    /// Room and entrance fines combined.
    pub fn total(&self) -> u64 {
        self.room_fine + self.entrance_fine
    }

    /// Returns `true` if anything is owed.
    pub fn is_owed(&self) -> bool {
        self.total() > 0
    }
}

impl fmt::Display for FineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room key - ${} ({}), Entrance key - ${} ({})",
            self.room_fine, self.room_key_loss, self.entrance_fine, self.entrance_key_loss
        )
    }
}

/// The `room-resident` label fines are reported under.
pub fn fine_label(room: &RoomNumber, resident: &ResidentName) -> String {
    format!("{room}-{resident}")
}
