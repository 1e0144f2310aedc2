//! Shared vocabulary for dormkeys.
//!
//! This crate defines the pieces every other layer agrees on:
//!
//! - **Identifiers** ([`RoomNumber`], [`ResidentName`]) — the keys that
//!   address rooms in the registry and residents inside a room.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how a registry snapshot
//!   is turned into bytes and back.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while encoding or
//!   decoding.
//!
//! # Architecture
//!
//! The protocol layer knows nothing about rooms, keys, or fines. It only
//! knows how to name things and how to serialize them:
//!
//! ```text
//! Room layer (records) → Protocol (bytes) → Store (durable medium)
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{ResidentName, RoomNumber};
