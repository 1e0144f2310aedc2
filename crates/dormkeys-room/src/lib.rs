//! Room and dormitory bookkeeping for dormkeys.
//!
//! This crate holds every rule the system has: who may check in, what a
//! lost key does to a room's supply, how fines are tiered, and when a room
//! is short of keys. Everything above it only collects text and shows
//! results; everything below it only moves bytes.
//!
//! # Key types
//!
//! - [`Room`] — occupancy and key-loss state for one physical room
//! - [`Dormitory`] — the registry that owns every room and builds reports
//! - [`KeyType`] / [`KeyLoss`] — which key was lost, and how often
//! - [`FineRecord`] — what a resident owes, computed from their losses
//! - [`Occupancy`] — per-resident state machine
//! - [`RoomError`] — every way an operation can be rejected

pub mod config;
mod dormitory;
mod error;
mod fines;
mod keys;
mod report;
mod room;

pub use config::Occupancy;
pub use dormitory::Dormitory;
pub use error::RoomError;
pub use fines::{FineRecord, fine_label, tiered_fine};
pub use keys::{KeyLoss, KeyType};
pub use report::{RosterEntry, ShortfallEntry};
pub use room::Room;
