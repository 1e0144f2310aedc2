//! A single physical room: who lives there, how many room keys are on
//! hand, and what each resident has lost.

use std::collections::BTreeMap;

use dormkeys_protocol::{ResidentName, RoomNumber};
use serde::{Deserialize, Serialize};

use crate::config::MAX_RESIDENTS;
use crate::{FineRecord, KeyLoss, KeyType, Occupancy, RoomError};

/// Occupancy and key state for one room.
///
/// `num_keys` counts unassigned room keys. Check-in hands one out,
/// check-out takes one back, and a lost room key is gone for good. The
/// count is allowed to go negative: that is a real shortage waiting for
/// new keys to be cut, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    room_number: RoomNumber,
    num_keys: i64,
    residents: BTreeMap<ResidentName, KeyLoss>,
}

impl Room {
    /// Creates an empty room with `num_keys` unassigned keys.
    pub fn new(room_number: impl Into<RoomNumber>, num_keys: i64) -> Self {
        Self {
            room_number: room_number.into(),
            num_keys,
            residents: BTreeMap::new(),
        }
    }

    pub fn room_number(&self) -> &RoomNumber {
        &self.room_number
    }

    pub fn num_keys(&self) -> i64 {
        self.num_keys
    }

    pub fn resident_count(&self) -> usize {
        self.residents.len()
    }

    /// Returns `true` if no further resident can check in.
    pub fn is_full(&self) -> bool {
        self.residents.len() >= MAX_RESIDENTS
    }

    /// Residents in name order, with their loss counters.
    pub fn residents(&self) -> impl Iterator<Item = (&ResidentName, &KeyLoss)> {
        self.residents.iter()
    }

    /// Loss counters for one resident, if checked in.
    pub fn key_loss(&self, resident: &str) -> Option<&KeyLoss> {
        self.residents.get(resident)
    }

    /// Where `resident` stands with respect to this room.
    pub fn occupancy(&self, resident: &str) -> Occupancy {
        if self.residents.contains_key(resident) {
            Occupancy::Occupied
        } else {
            Occupancy::Unoccupied
        }
    }

    /// Checks a resident in and issues them one room key.
    ///
    /// # Errors
    /// - [`RoomError::CapacityExceeded`] if the room is already full.
    /// - [`RoomError::DuplicateResident`] if the name is already checked in.
    pub fn check_in(&mut self, resident: impl Into<ResidentName>) -> Result<(), RoomError> {
        let resident = resident.into();
        if self.is_full() {
            return Err(RoomError::CapacityExceeded {
                room: self.room_number.clone(),
                capacity: MAX_RESIDENTS,
            });
        }
        if !self.occupancy(resident.as_str()).can_check_in() {
            return Err(RoomError::DuplicateResident {
                room: self.room_number.clone(),
                resident,
            });
        }

        self.num_keys = self.num_keys.saturating_sub(1);
        tracing::info!(
            room = %self.room_number,
            %resident,
            num_keys = self.num_keys,
            "resident checked in"
        );
        self.residents.insert(resident, KeyLoss::default());
        Ok(())
    }

    /// Checks a resident out and takes back one room key.
    ///
    /// Exactly one key is credited regardless of how many the resident
    /// lost while checked in.
    ///
    /// # Errors
    /// [`RoomError::ResidentNotFound`] if the name is not checked in.
    pub fn check_out(&mut self, resident: &str) -> Result<(), RoomError> {
        if !self.occupancy(resident).can_check_out() {
            return Err(self.not_found(resident));
        }
        let Some((resident, _)) = self.residents.remove_entry(resident) else {
            return Err(self.not_found(resident));
        };

        self.num_keys = self.num_keys.saturating_add(1);
        tracing::info!(
            room = %self.room_number,
            %resident,
            num_keys = self.num_keys,
            "resident checked out"
        );
        Ok(())
    }

    /// Records a lost key for a checked-in resident.
    ///
    /// A lost room key also leaves the room's supply; a lost entrance key
    /// only bumps the resident's counter.
    ///
    /// # Errors
    /// [`RoomError::ResidentNotFound`] if the name is not checked in.
    pub fn report_key_loss(&mut self, resident: &str, key_type: KeyType) -> Result<(), RoomError> {
        if !self.occupancy(resident).can_report_loss() {
            return Err(self.not_found(resident));
        }
        let Some(loss) = self.residents.get_mut(resident) else {
            return Err(self.not_found(resident));
        };
        loss.record(key_type);
        let total = loss.count(key_type);

        if key_type.draws_from_room_supply() {
            self.num_keys = self.num_keys.saturating_sub(1);
        }
        tracing::info!(
            room = %self.room_number,
            %resident,
            %key_type,
            losses = total,
            num_keys = self.num_keys,
            "key loss reported"
        );
        Ok(())
    }

    /// Computes what a resident owes. Reads state only.
    ///
    /// # Errors
    /// [`RoomError::ResidentNotFound`] if the name is not checked in.
    pub fn compute_fine(&self, resident: &str) -> Result<FineRecord, RoomError> {
        self.residents
            .get(resident)
            .map(FineRecord::assess)
            .ok_or_else(|| self.not_found(resident))
    }

    /// Checks the invariants a room must satisfy, for data that did not
    /// come through `check_in` (e.g. a decoded snapshot).
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.residents.len() > MAX_RESIDENTS {
            return Err(format!(
                "room {} holds {} residents, limit is {}",
                self.room_number,
                self.residents.len(),
                MAX_RESIDENTS
            ));
        }
        Ok(())
    }

    fn not_found(&self, resident: &str) -> RoomError {
        RoomError::ResidentNotFound {
            room: self.room_number.clone(),
            resident: ResidentName::from(resident),
        }
    }
}
