//! Integration tests for the front desk: operator text in, persisted
//! dormitory out.

use dormkeys::prelude::*;
use dormkeys::ResidentName;
use tempfile::TempDir;

fn desk() -> FrontDesk<MemoryStore> {
    FrontDesk::open(MemoryStore::new()).unwrap()
}

// =========================================================================
// Persist-after-mutation
// =========================================================================

#[test]
fn test_open_on_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let desk = FrontDesk::open(FileStore::new(dir.path().join("dorm_data.json"))).unwrap();
    assert!(desk.dormitory().is_empty());
    assert!(desk.roster().is_empty());
}

#[test]
fn test_every_mutation_is_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dorm_data.json");

    {
        let mut desk = FrontDesk::open(FileStore::new(&path)).unwrap();
        desk.add_room("101", None).unwrap();
        desk.check_in("101", "alice").unwrap();
        desk.report_key_loss("101", "alice", "entrance_key").unwrap();
    }

    let desk = FrontDesk::open(FileStore::new(&path)).unwrap();
    let roster = desk.roster();
    assert_eq!(roster[0].residents, vec![ResidentName::from("alice")]);
    assert_eq!(desk.fine("101", "alice").unwrap().entrance_fine, 20);
    assert_eq!(desk.dormitory().room("101").unwrap().num_keys(), 3);
}

#[test]
fn test_rejected_operation_saves_nothing() {
    let mut desk = desk();
    let err = desk.check_in("404", "alice").unwrap_err();

    assert!(matches!(err, DormkeysError::Room(RoomError::RoomNotFound(_))));
    assert!(desk.store().contents().unwrap().is_none());
}

#[test]
fn test_rejected_operation_leaves_snapshot_unchanged() {
    let mut desk = desk();
    desk.add_room("101", None).unwrap();
    desk.check_in("101", "alice").unwrap();
    desk.check_in("101", "bob").unwrap();
    let before = desk.store().contents().unwrap();

    let err = desk.check_in("101", "carol").unwrap_err();
    assert!(matches!(
        err,
        DormkeysError::Room(RoomError::CapacityExceeded { .. })
    ));
    assert_eq!(desk.store().contents().unwrap(), before);
    assert_eq!(desk.dormitory().room("101").unwrap().num_keys(), 2);
}

// =========================================================================
// Operator text
// =========================================================================

#[test]
fn test_input_is_trimmed() {
    let mut desk = desk();
    desk.add_room(" 101 ", Some(3)).unwrap();
    desk.check_in("101", "  alice ").unwrap();

    assert!(desk.dormitory().room("101").is_ok());
    assert!(desk.fine(" 101", "alice").is_ok());
}

#[test]
fn test_blank_fields_are_rejected() {
    let mut desk = desk();
    assert!(matches!(
        desk.add_room("   ", None),
        Err(DormkeysError::BlankInput("room number"))
    ));

    desk.add_room("101", None).unwrap();
    assert!(matches!(
        desk.check_in("101", ""),
        Err(DormkeysError::BlankInput("resident name"))
    ));
}

#[test]
fn test_invalid_key_type_text() {
    let mut desk = desk();
    desk.add_room("101", None).unwrap();
    desk.check_in("101", "alice").unwrap();

    let err = desk.report_key_loss("101", "alice", "car_key").unwrap_err();
    assert!(matches!(
        err,
        DormkeysError::Room(RoomError::InvalidKeyType(_))
    ));
    assert_eq!(desk.fine("101", "alice").unwrap(), FineRecord::default());
}

#[test]
fn test_invalid_key_type_checked_before_resident() {
    let mut desk = desk();
    desk.add_room("101", None).unwrap();
    let err = desk.report_key_loss("101", "ghost", "car_key").unwrap_err();
    assert!(matches!(
        err,
        DormkeysError::Room(RoomError::InvalidKeyType(_))
    ));
}

#[test]
fn test_unknown_room_reported_before_invalid_key_type() {
    let mut desk = desk();
    let err = desk.report_key_loss("999", "alice", "car_key").unwrap_err();
    assert!(matches!(
        err,
        DormkeysError::Room(RoomError::RoomNotFound(_))
    ));
}

// =========================================================================
// Reports
// =========================================================================

#[test]
fn test_reports() {
    let mut desk = desk();
    desk.add_room("101", None).unwrap();
    desk.add_room("102", Some(2)).unwrap();
    desk.check_in("101", "alice").unwrap();
    desk.check_in("101", "bob").unwrap();
    desk.report_key_loss("101", "alice", "room_key").unwrap();
    desk.report_key_loss("101", "alice", "room_key").unwrap();

    let shortfall = desk.inventory_shortfall();
    let lines: Vec<String> = shortfall.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        ["Room 101: 0 keys, needs 2 more", "Room 102: 2 keys, needs 2 more"]
    );

    assert_eq!(desk.all_fines().len(), 2);
    let outstanding = desk.outstanding_fines();
    assert_eq!(outstanding.len(), 1);
    assert_eq!(outstanding["101-alice"].room_fine, 30);
}

// =========================================================================
// Save / reload
// =========================================================================

#[test]
fn test_reload_discards_unsaved_state() {
    let store = MemoryStore::new();
    let mut dorm = Dormitory::new();
    dorm.add_room("101");
    dorm.save(&store).unwrap();

    dorm.add_room("102");
    let mut desk = FrontDesk::with_dormitory(dorm, store);
    assert_eq!(desk.dormitory().room_count(), 2);

    assert_eq!(desk.reload().unwrap(), 1);
    assert!(desk.dormitory().room("102").is_err());
}

#[test]
fn test_explicit_save() {
    let mut dorm = Dormitory::new();
    dorm.add_room("101");
    let desk = FrontDesk::with_dormitory(dorm, MemoryStore::new());
    assert!(desk.store().contents().unwrap().is_none());

    desk.save().unwrap();
    let reopened = FrontDesk::open(MemoryStore::with_bytes(
        desk.store().contents().unwrap().unwrap(),
    ))
    .unwrap();
    assert_eq!(reopened.dormitory(), desk.dormitory());
}

#[test]
fn test_open_rejects_corrupted_snapshot() {
    let store = MemoryStore::with_bytes(b"{ \"101\": 4 }".to_vec());
    let err = FrontDesk::open(store).unwrap_err();
    assert!(matches!(err, DormkeysError::Store(StoreError::Codec(_))));
    assert!(!err.is_rejection());
}
