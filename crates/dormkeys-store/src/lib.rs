//! Snapshot storage for dormkeys.
//!
//! The bookkeeping core never knows where its data lives. It hands a
//! serializable value to this crate together with a [`Store`] chosen by
//! the caller, and gets one back on the next run.
//!
//! # Key types
//!
//! - [`Store`] — the durable medium: read all bytes, write all bytes
//! - [`FileStore`] — a single file on disk, replaced atomically on write
//! - [`MemoryStore`] — an in-process buffer for tests and dry runs
//! - [`save_snapshot`] / [`load_snapshot`] — codec + store in one call
//!
//! # How it fits in the stack
//!
//! ```text
//! Room layer (Dormitory)  ← decides WHAT is saved
//!     ↕
//! Store layer (this crate)  ← decides WHERE the bytes go
//!     ↕
//! Protocol layer (below)  ← decides HOW values become bytes
//! ```

mod error;
mod file;
mod memory;
mod snapshot;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use snapshot::{Store, load_snapshot, save_snapshot};
