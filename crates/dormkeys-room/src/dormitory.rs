//! The dormitory registry: owns every room, builds cross-room reports,
//! and moves the whole collection to and from a store.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use dormkeys_protocol::{JsonCodec, RoomNumber};
use dormkeys_store::{Store, StoreError, load_snapshot, save_snapshot};

use crate::config::{DEFAULT_KEY_SUPPLY, TARGET_KEY_SUPPLY};
use crate::{
    FineRecord, KeyType, Room, RoomError, RosterEntry, ShortfallEntry, fine_label,
};

/// All rooms of the residence, keyed by room number.
///
/// The dormitory is the only owner of its rooms. Callers borrow a room
/// through [`room`](Self::room) / [`room_mut`](Self::room_mut) for the
/// length of one operation; nothing holds on to a room across a save or
/// a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dormitory {
    rooms: BTreeMap<RoomNumber, Room>,
}

impl Dormitory {
    /// Creates an empty dormitory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a room with the default key supply.
    ///
    /// An existing room with the same number is replaced.
    pub fn add_room(&mut self, room_number: impl Into<RoomNumber>) -> &mut Room {
        self.add_room_with_keys(room_number, DEFAULT_KEY_SUPPLY)
    }

    /// Registers a room holding `num_keys` unassigned keys.
    ///
    /// An existing room with the same number is replaced, residents and
    /// all.
    pub fn add_room_with_keys(
        &mut self,
        room_number: impl Into<RoomNumber>,
        num_keys: i64,
    ) -> &mut Room {
        let room_number = room_number.into();
        tracing::info!(
            %room_number,
            num_keys,
            replaced = self.rooms.contains_key(&room_number),
            "room added"
        );
        let room = Room::new(room_number.clone(), num_keys);
        match self.rooms.entry(room_number) {
            Entry::Occupied(mut slot) => {
                slot.insert(room);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(room),
        }
    }

    /// Borrows a registered room.
    pub fn room(&self, room_number: &str) -> Result<&Room, RoomError> {
        self.rooms
            .get(room_number)
            .ok_or_else(|| RoomError::RoomNotFound(room_number.into()))
    }

    /// Mutably borrows a registered room.
    pub fn room_mut(&mut self, room_number: &str) -> Result<&mut Room, RoomError> {
        self.rooms
            .get_mut(room_number)
            .ok_or_else(|| RoomError::RoomNotFound(room_number.into()))
    }

    /// Checks a resident in to a registered room.
    pub fn check_in(&mut self, room_number: &str, resident: &str) -> Result<(), RoomError> {
        self.room_mut(room_number)?.check_in(resident)
    }

    /// Checks a resident out of a registered room.
    pub fn check_out(&mut self, room_number: &str, resident: &str) -> Result<(), RoomError> {
        self.room_mut(room_number)?.check_out(resident)
    }

    /// Records a lost key for a resident of a registered room.
    pub fn report_key_loss(
        &mut self,
        room_number: &str,
        resident: &str,
        key_type: KeyType,
    ) -> Result<(), RoomError> {
        self.room_mut(room_number)?
            .report_key_loss(resident, key_type)
    }

    /// Computes what one resident of a registered room owes.
    pub fn compute_fine(&self, room_number: &str, resident: &str) -> Result<FineRecord, RoomError> {
        self.room(room_number)?.compute_fine(resident)
    }

    /// Rooms holding fewer than the target number of keys.
    ///
    /// Keys out with residents count as accounted for, so a room's total
    /// is `num_keys + residents`. A room appears only if that total is
    /// below [`TARGET_KEY_SUPPLY`], whatever count it was created with.
    pub fn check_inventory_shortfall(&self) -> Vec<ShortfallEntry> {
        self.rooms
            .values()
            .filter_map(|room| {
                let held = i64::try_from(room.resident_count()).unwrap_or(i64::MAX);
                let needed = TARGET_KEY_SUPPLY.saturating_sub(room.num_keys().saturating_add(held));
                (needed > 0).then(|| ShortfallEntry {
                    room_number: room.room_number().clone(),
                    num_keys: room.num_keys(),
                    needed,
                })
            })
            .collect()
    }

    /// Fines for every checked-in resident, keyed `room-resident`.
    ///
    /// Labels are not guaranteed unique (room `1-a` with `b` and room `1`
    /// with `a-b` both give `1-a-b`); on a clash the later room wins and
    /// the clash is logged.
    pub fn compute_all_fines(&self) -> BTreeMap<String, FineRecord> {
        let mut fines = BTreeMap::new();
        for room in self.rooms.values() {
            for (resident, loss) in room.residents() {
                let label = fine_label(room.room_number(), resident);
                if let Some(shadowed) = fines.insert(label, FineRecord::assess(loss)) {
                    tracing::warn!(
                        room = %room.room_number(),
                        %resident,
                        dropped = %shadowed,
                        "fine label collides with another resident"
                    );
                }
            }
        }
        fines
    }

    /// Like [`compute_all_fines`](Self::compute_all_fines), restricted to
    /// residents who owe something.
    pub fn outstanding_fines(&self) -> BTreeMap<String, FineRecord> {
        let mut fines = self.compute_all_fines();
        fines.retain(|_, fine| fine.is_owed());
        fines
    }

    /// Every room with the names of its residents, in room order.
    pub fn list_roster(&self) -> Vec<RosterEntry> {
        self.rooms
            .values()
            .map(|room| RosterEntry {
                room_number: room.room_number().clone(),
                residents: room.residents().map(|(name, _)| name.clone()).collect(),
            })
            .collect()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Writes every room to `store` as one snapshot.
    pub fn save<S: Store + ?Sized>(&self, store: &S) -> Result<(), StoreError> {
        save_snapshot(store, &JsonCodec, &self.rooms)?;
        tracing::info!(
            location = %store.location(),
            rooms = self.rooms.len(),
            "dormitory saved"
        );
        Ok(())
    }

    /// Reads a dormitory from `store`.
    ///
    /// A store with no snapshot yields an empty dormitory. A snapshot
    /// that decodes but breaks a room invariant is rejected as
    /// [`StoreError::Corrupted`].
    pub fn load<S: Store + ?Sized>(store: &S) -> Result<Self, StoreError> {
        let Some(rooms) = load_snapshot::<_, _, BTreeMap<RoomNumber, Room>>(store, &JsonCodec)?
        else {
            tracing::debug!(location = %store.location(), "starting with an empty dormitory");
            return Ok(Self::new());
        };

        for (key, room) in &rooms {
            if key != room.room_number() {
                tracing::warn!(%key, stored = %room.room_number(), "room filed under wrong number");
                return Err(StoreError::Corrupted(format!(
                    "room {} is filed under {}",
                    room.room_number(),
                    key
                )));
            }
            if let Err(reason) = room.validate() {
                tracing::warn!(%key, %reason, "room breaks an invariant");
                return Err(StoreError::Corrupted(reason));
            }
        }

        tracing::info!(location = %store.location(), rooms = rooms.len(), "dormitory loaded");
        Ok(Self { rooms })
    }

    /// Replaces every room with the contents of `store`.
    ///
    /// On error the current rooms are kept.
    pub fn reload<S: Store + ?Sized>(&mut self, store: &S) -> Result<(), StoreError> {
        *self = Self::load(store)?;
        Ok(())
    }
}
