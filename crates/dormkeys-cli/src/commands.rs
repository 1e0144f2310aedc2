//! Runs an [`Operation`] against the front desk and renders the result
//! as operator-facing text.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use dormkeys::config::{DEFAULT_KEY_SUPPLY, TARGET_KEY_SUPPLY};
use dormkeys::{DormkeysError, FineRecord, FrontDesk, KeyType, Store};

use crate::cli::Operation;

/// Executes one operation. On success returns the message to show.
pub fn execute<S: Store>(desk: &mut FrontDesk<S>, op: Operation) -> Result<String, DormkeysError> {
    match op {
        Operation::AddRoom { room, keys } => {
            desk.add_room(&room, keys)?;
            Ok(format!(
                "Room {} added with {} keys",
                room.trim(),
                keys.unwrap_or(DEFAULT_KEY_SUPPLY)
            ))
        }
        Operation::CheckIn { room, resident } => {
            desk.check_in(&room, &resident)?;
            Ok("Check-in successful".to_string())
        }
        Operation::CheckOut { room, resident } => {
            desk.check_out(&room, &resident)?;
            Ok("Check-out successful".to_string())
        }
        Operation::LoseKey {
            room,
            resident,
            key_type,
        } => {
            desk.report_key_loss(&room, &resident, &key_type)?;
            let label = match key_type.trim().parse::<KeyType>()? {
                KeyType::RoomKey => "Room key",
                KeyType::EntranceKey => "Entrance key",
            };
            Ok(format!("{label} loss reported"))
        }
        Operation::Inventory => {
            let mut text = format!("Rooms with less than {TARGET_KEY_SUPPLY} keys:");
            for entry in desk.inventory_shortfall() {
                let _ = write!(text, "\n{entry}");
            }
            Ok(text)
        }
        Operation::Fines { all } => {
            if all {
                Ok(render_fines("All residents:", &desk.all_fines(), "No residents checked in."))
            } else {
                Ok(render_fines(
                    "Residents with fines:",
                    &desk.outstanding_fines(),
                    "No residents have fines.",
                ))
            }
        }
        Operation::Roster => {
            let mut text = "Rooms with residents:".to_string();
            for entry in desk.roster() {
                let _ = write!(text, "\n{entry}");
            }
            Ok(text)
        }
        Operation::Save => {
            desk.save()?;
            Ok("Data saved successfully".to_string())
        }
        Operation::Load => {
            let rooms = desk.reload()?;
            Ok(format!("Data loaded successfully ({rooms} rooms)"))
        }
    }
}

fn render_fines(header: &str, fines: &BTreeMap<String, FineRecord>, empty: &str) -> String {
    if fines.is_empty() {
        return empty.to_string();
    }
    let mut text = header.to_string();
    for (label, fine) in fines {
        let _ = write!(text, "\n{label}: {fine}");
    }
    text
}
