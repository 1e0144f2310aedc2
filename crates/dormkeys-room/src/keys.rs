//! Key types and per-resident loss counters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RoomError;
use crate::config::{ENTRANCE_KEY_RATE, ROOM_KEY_RATE};

/// The two kinds of physical key a resident carries.
///
/// Only room keys come out of a room's finite supply. Entrance keys are
/// tracked as loss counts alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    RoomKey,
    EntranceKey,
}

impl KeyType {
    /// Both key types, in report order.
    pub const ALL: [Self; 2] = [Self::RoomKey, Self::EntranceKey];

    /// The text form accepted by [`FromStr`] and shown to the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RoomKey => "room_key",
            Self::EntranceKey => "entrance_key",
        }
    }

    /// Base fine per loss of this key type.
    pub fn fine_rate(self) -> u64 {
        match self {
            Self::RoomKey => ROOM_KEY_RATE,
            Self::EntranceKey => ENTRANCE_KEY_RATE,
        }
    }

    /// Returns `true` if losing this key shrinks the room's key supply.
    pub fn draws_from_room_supply(self) -> bool {
        matches!(self, Self::RoomKey)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|key_type| key_type.as_str() == s)
            .ok_or_else(|| RoomError::InvalidKeyType(s.to_string()))
    }
}

/// How many keys of each type a resident has lost while checked in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyLoss {
    pub room_key_loss: u32,
    pub entrance_key_loss: u32,
}

impl KeyLoss {
    /// Loss count for one key type.
    pub fn count(&self, key_type: KeyType) -> u32 {
        match key_type {
            KeyType::RoomKey => self.room_key_loss,
            KeyType::EntranceKey => self.entrance_key_loss,
        }
    }

    /// Records one more loss of `key_type`.
    pub(crate) fn record(&mut self, key_type: KeyType) {
        let counter = match key_type {
            KeyType::RoomKey => &mut self.room_key_loss,
            KeyType::EntranceKey => &mut self.entrance_key_loss,
        };
        *counter = counter.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type_parses_operator_text() {
        assert_eq!("room_key".parse::<KeyType>().unwrap(), KeyType::RoomKey);
        assert_eq!(
            " entrance_key ".parse::<KeyType>().unwrap(),
            KeyType::EntranceKey
        );
    }

    #[test]
    fn test_key_type_rejects_unknown_text() {
        let err = "mailbox_key".parse::<KeyType>().unwrap_err();
        assert_eq!(err, RoomError::InvalidKeyType("mailbox_key".into()));
        assert!(err.to_string().contains("room_key"));
    }

    #[test]
    fn test_key_type_display_round_trips_through_from_str() {
        for key_type in KeyType::ALL {
            assert_eq!(key_type.to_string().parse::<KeyType>().unwrap(), key_type);
        }
    }

    #[test]
    fn test_key_type_serializes_as_snake_case() {
        let json = serde_json::to_string(&KeyType::EntranceKey).unwrap();
        assert_eq!(json, "\"entrance_key\"");
    }

    #[test]
    fn test_only_room_keys_draw_from_supply() {
        assert!(KeyType::RoomKey.draws_from_room_supply());
        assert!(!KeyType::EntranceKey.draws_from_room_supply());
    }

    #[test]
    fn test_record_increments_one_counter() {
        let mut loss = KeyLoss::default();
        loss.record(KeyType::EntranceKey);
        loss.record(KeyType::EntranceKey);
        loss.record(KeyType::RoomKey);
        assert_eq!(loss.count(KeyType::EntranceKey), 2);
        assert_eq!(loss.count(KeyType::RoomKey), 1);
    }
}
