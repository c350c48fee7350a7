use alloc::vec::Vec;

use tartan_bitfield::bitfield;

use super::{BitRange, Bits, RangeError};

/// An assembled AIS payload, as handed over by the transport layer.
///
/// Sentence parsing, fragment reassembly, de-armoring and checksum
/// verification happen before a message reaches the decoder. Implementors
/// report the outcome of those checks through [`is_valid`], and expose the
/// payload bits for reading.
///
/// [`is_valid`]: EncodedMessage::is_valid
pub trait EncodedMessage {
    /// Whether the structural and checksum checks passed.
    fn is_valid(&self) -> bool;

    /// The six-bit message type code.
    fn message_type(&self) -> u8;

    /// The two-bit repeat indicator.
    fn repeat_indicator(&self) -> u8;

    /// The payload bits, starting with the message type.
    fn payload(&self) -> Bits<'_>;

    /// The number of payload bits.
    fn bit_len(&self) -> usize {
        self.payload().len()
    }

    /// Borrow the absolute, half-open range `start..end` of the payload.
    fn bits(&self, start: usize, end: usize) -> Result<BitRange<'_>, RangeError> {
        self.payload().range(start, end)
    }
}

/// An owned payload.
///
/// This is the simplest [`EncodedMessage`]: a buffer of bits, most
/// significant first, together with the verdict of the transport layer's
/// checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
    len: usize,
    valid: bool,
}

impl Payload {
    /// Wrap the first `len` bits of a buffer as a valid payload.
    ///
    /// Returns an error if the buffer holds fewer than `len` bits.
    pub fn new(bytes: Vec<u8>, len: usize) -> Result<Self, RangeError> {
        Bits::new(&bytes, len)?;

        Ok(Self {
            bytes,
            len,
            valid: true,
        })
    }

    /// Pack a sequence of bits into a valid payload.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        let mut bytes = Vec::new();
        let mut len = 0;

        for bit in bits {
            if len % 8 == 0 {
                bytes.push(0);
            }

            if bit {
                if let Some(last) = bytes.last_mut() {
                    *last |= 0x80 >> (len % 8);
                }
            }

            len += 1;
        }

        Self {
            bytes,
            len,
            valid: true,
        }
    }

    /// Record the verdict of the transport layer's checks.
    pub fn with_validity(self, valid: bool) -> Self {
        Self { valid, ..self }
    }

    /// The underlying buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn lead(&self) -> Lead {
        Lead(self.bytes.first().copied().unwrap_or(0))
    }
}

// The first payload byte.
bitfield! {
    struct Lead(u8) {
        [0..2] repeat_indicator: u8,
        [2..8] message_type: u8,
    }
}

impl EncodedMessage for Payload {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn message_type(&self) -> u8 {
        self.lead().message_type()
    }

    fn repeat_indicator(&self) -> u8 {
        self.lead().repeat_indicator()
    }

    fn payload(&self) -> Bits<'_> {
        Bits {
            bytes: &self.bytes,
            len: self.len,
        }
    }
}
