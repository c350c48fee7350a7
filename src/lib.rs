#![no_std]

//! A strongly-typed decoder for the bit-packed messages of the maritime
//! Automatic Identification System (AIS).
//!
//! Binnacle turns an already-assembled, already-validated AIS payload into
//! one immutable record per message. It does not parse NMEA sentences,
//! reassemble fragments or verify checksums: these belong to the transport
//! layer, which hands its result over through the [`EncodedMessage`] trait.
//!
//! Most users should call [`decode`], which dispatches on the message type
//! through the process-wide [`REGISTRY`] and returns an [`AisMessage`].
//! Individual records can also be decoded directly through the [`Message`]
//! trait, for example `ShipAndVoyageData::decode(&payload)`.
//!
//! The bit-level primitives used by the records live in the [`bits`]
//! module, and are available to applications decoding fields the records do
//! not cover (such as the application data of binary messages).
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `serde`: derive `Serialize` for records and value types.

extern crate alloc;
extern crate self as binnacle;

pub mod bits;
pub mod decode;
pub mod messages;
pub mod types;

pub use bits::{EncodedMessage, FromField, Payload};
pub use decode::{Error, FromBits, Message, REGISTRY, Registry, decode};
pub use messages::{AisMessage, Header};

#[doc(hidden)]
pub use either;
