//! Identifier types shared by every dormkeys layer.
//!
//! Both identifiers are "newtype wrappers" around `String`. The wrapper
//! keeps a room number from being passed where a resident name is
//! expected, even though both are text underneath.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoomNumber
// ---------------------------------------------------------------------------

/// The identifier of a physical room, e.g. `"101"` or `"B-12"`.
///
/// Room numbers are free text because that is what the front desk types.
/// They are immutable once a room is registered.
///
/// `#[serde(transparent)]` serializes the number as a bare JSON string,
/// which also lets it act as a JSON object key in snapshots.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Wraps a room number.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

impl From<String> for RoomNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

/// Lets `BTreeMap<RoomNumber, _>` be queried with a plain `&str`.
impl Borrow<str> for RoomNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// ResidentName
// ---------------------------------------------------------------------------

/// The name a resident is checked in under.
///
/// Names only need to be unique within one room; two rooms may each hold
/// an "Alex".
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResidentName(String);

impl ResidentName {
    /// Wraps a resident name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResidentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResidentName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ResidentName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ResidentName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
