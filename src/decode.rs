//! Bit layouts, decoder dispatch and decoding errors.
//!
//! A record is decoded by its [`FromBits`] implementation, usually derived
//! from a declarative layout. The [`Message`] trait adds the checks that
//! make a record safe to decode from an arbitrary [`EncodedMessage`]: the
//! message must be valid, and of a type the record accepts. The
//! [`Registry`] selects the record for a message by its type code.

mod registry;

use thiserror::Error;

use crate::{
    bits::{EncodedMessage, RangeError},
    types::IdentifierError,
};

pub use registry::{DecodeFn, REGISTRY, Registry, decode};

/// Errors occurring while decoding a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The transport layer rejected the message.
    #[error("Encoded message failed validation.")]
    InvalidEncodedMessage,
    /// No decoder exists for the type code, or the decoder expects another.
    #[error("Unsupported message type ({0}).")]
    UnsupportedMessageType(u8),
    /// The layout reaches beyond the message, or a field beyond its type.
    #[error("Malformed field: {0}")]
    MalformedField(#[from] RangeError),
    /// A decoded identifier is out of range.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),
}

/// Derive [`FromBits`] for a struct describing a bit layout.
///
/// # Examples
///
/// Give each field a `bits(START..END)` attribute, where `START..END` is
/// the half-open range of absolute bit offsets holding it. The field type
/// must implement [`FromField`](crate::FromField). A single bit may be
/// written `bits(START)`, and an open range `bits(START..)` reads to the end
/// of the message.
///
/// ```
/// #[derive(Debug, FromBits)]
/// struct UtcDateInquiry {
///     #[group]
///     header: Header,
///     #[bits(40..70)]
///     destination_mmsi: Mmsi,
/// }
/// ```
///
/// Fields stored with a fixed scale are read as integers (two's complement
/// if `signed` is given), then divided by `scale` into a floating point
/// field.
///
/// ```
/// #[bits(61..89, signed, scale = 600_000)]
/// longitude: f32,
/// ```
///
/// A field whose presence depends on an earlier boolean field takes a
/// `when = FLAG` or `unless = FLAG` option and an `Option<T>` type. A field
/// at the end of a variable-length message takes the `optional` option, and
/// is present only if the message is long enough to hold it.
///
/// ```
/// #[bits(139)]
/// addressed: bool,
/// #[bits(69..99, when = addressed)]
/// destination_mmsi: Option<Mmsi>,
/// #[bits(92..122, optional)]
/// second_destination: Option<Mmsi>,
/// ```
///
/// A field of a type implementing [`FromBits`] itself takes the `group`
/// attribute. Given a flag, `group(FLAG)` selects between two mutually
/// exclusive layouts held in an `Either<L, R>`, decoding `L` if the flag is
/// set and `R` otherwise.
///
/// ```
/// #[group(addressed)]
/// target: Either<Addressees, Area>,
/// ```
///
/// Fields are decoded in declaration order, so flags must be declared
/// before the fields depending on them.
pub use binnacle_derive::FromBits;

/// Decode a value from the bits of a message.
///
/// See the [`FromBits`](macro@FromBits) derive macro for an automatic
/// implementation of this trait.
pub trait FromBits: Sized {
    /// Decode from a message, without checking its validity or type.
    fn from_bits<M: EncodedMessage + ?Sized>(m: &M) -> Result<Self, Error>;
}

/// Derive [`Message`] for a record, listing the type codes it decodes.
///
/// ```
/// #[derive(Debug, FromBits, Message)]
/// #[message(1, 2, 3)]
/// struct PositionReport { ... }
/// ```
pub use binnacle_derive::Message;

/// A record decoded from messages of particular types.
pub trait Message: FromBits {
    /// The type codes this record decodes.
    const TYPES: &'static [u8];

    /// Decode a record, first checking that the message is valid and of one
    /// of the accepted types.
    fn decode<M: EncodedMessage + ?Sized>(m: &M) -> Result<Self, Error> {
        if !m.is_valid() {
            Err(Error::InvalidEncodedMessage)?;
        }

        let code = m.message_type();
        if !Self::TYPES.contains(&code) {
            Err(Error::UnsupportedMessageType(code))?;
        }

        Self::from_bits(m)
    }
}
