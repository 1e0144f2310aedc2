//! The front desk: the one place operator text meets the bookkeeping
//! rules, and the one place that decides when to persist.

use std::collections::BTreeMap;

use dormkeys_room::{Dormitory, FineRecord, KeyType, RosterEntry, ShortfallEntry};
use dormkeys_store::Store;

use crate::DormkeysError;

/// A dormitory paired with the store it is persisted to.
///
/// Every mutating call follows the same steps: trim and check the
/// operator's text, apply the operation to the dormitory, then save the
/// whole dormitory. A rejected operation changes nothing and saves
/// nothing. Queries never touch the store.
#[derive(Debug)]
pub struct FrontDesk<S> {
    dorm: Dormitory,
    store: S,
}

impl<S: Store> FrontDesk<S> {
    /// Loads the dormitory from `store`, starting empty if the store
    /// holds nothing yet.
    pub fn open(store: S) -> Result<Self, DormkeysError> {
        let dorm = Dormitory::load(&store)?;
        tracing::debug!(location = %store.location(), rooms = dorm.room_count(), "desk opened");
        Ok(Self { dorm, store })
    }

    /// Wraps an existing dormitory without reading the store.
    pub fn with_dormitory(dorm: Dormitory, store: S) -> Self {
        Self { dorm, store }
    }

    pub fn dormitory(&self) -> &Dormitory {
        &self.dorm
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers a room (replacing any room with the same number) and
    /// saves. `num_keys` defaults to the standard supply.
    pub fn add_room(&mut self, room: &str, num_keys: Option<i64>) -> Result<(), DormkeysError> {
        let room = required(room, "room number")?;
        match num_keys {
            Some(keys) => self.dorm.add_room_with_keys(room, keys),
            None => self.dorm.add_room(room),
        };
        self.persist()
    }

    /// Checks a resident in and saves.
    pub fn check_in(&mut self, room: &str, resident: &str) -> Result<(), DormkeysError> {
        let room = required(room, "room number")?;
        let resident = required(resident, "resident name")?;
        self.apply(|dorm| dorm.check_in(room, resident))
    }

    /// Checks a resident out and saves.
    pub fn check_out(&mut self, room: &str, resident: &str) -> Result<(), DormkeysError> {
        let room = required(room, "room number")?;
        let resident = required(resident, "resident name")?;
        self.apply(|dorm| dorm.check_out(room, resident))
    }

    /// Records a lost key and saves. `key_type` is the operator's text,
    /// `room_key` or `entrance_key`.
    ///
    /// The room is resolved first, then the key type, then the resident,
    /// so each error names the first thing that is wrong.
    pub fn report_key_loss(
        &mut self,
        room: &str,
        resident: &str,
        key_type: &str,
    ) -> Result<(), DormkeysError> {
        let room = required(room, "room number")?;
        let resident = required(resident, "resident name")?;
        self.apply(|dorm| {
            dorm.room(room)?;
            let key_type: KeyType = key_type.parse()?;
            dorm.report_key_loss(room, resident, key_type)
        })
    }

    /// What one resident owes.
    pub fn fine(&self, room: &str, resident: &str) -> Result<FineRecord, DormkeysError> {
        let room = required(room, "room number")?;
        let resident = required(resident, "resident name")?;
        Ok(self.dorm.compute_fine(room, resident)?)
    }

    pub fn inventory_shortfall(&self) -> Vec<ShortfallEntry> {
        self.dorm.check_inventory_shortfall()
    }

    /// Fines for every resident, including those who owe nothing.
    pub fn all_fines(&self) -> BTreeMap<String, FineRecord> {
        self.dorm.compute_all_fines()
    }

    /// Fines for residents who owe something.
    pub fn outstanding_fines(&self) -> BTreeMap<String, FineRecord> {
        self.dorm.outstanding_fines()
    }

    pub fn roster(&self) -> Vec<RosterEntry> {
        self.dorm.list_roster()
    }

    /// Writes the current dormitory to the store.
    pub fn save(&self) -> Result<(), DormkeysError> {
        self.persist()
    }

    /// Replaces the dormitory with what the store holds and returns the
    /// number of rooms loaded. On error the current rooms are kept.
    pub fn reload(&mut self) -> Result<usize, DormkeysError> {
        self.dorm.reload(&self.store)?;
        Ok(self.dorm.room_count())
    }

    fn apply<F>(&mut self, op: F) -> Result<(), DormkeysError>
    where
        F: FnOnce(&mut Dormitory) -> Result<(), dormkeys_room::RoomError>,
    {
        if let Err(e) = op(&mut self.dorm) {
            tracing::debug!(error = %e, "operation rejected");
            return Err(e.into());
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), DormkeysError> {
        self.dorm.save(&self.store)?;
        Ok(())
    }
}

/// Trims operator text and rejects it if nothing is left.
fn required<'a>(text: &'a str, field: &'static str) -> Result<&'a str, DormkeysError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DormkeysError::BlankInput(field));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  101 ", "room number").unwrap(), "101");
    }

    #[test]
    fn test_required_rejects_blank() {
        assert!(matches!(
            required(" \t", "resident name"),
            Err(DormkeysError::BlankInput("resident name"))
        ));
    }
}
