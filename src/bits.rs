//! Primitive bit-field extraction.
//!
//! An AIS payload is a sequence of bits, most significant first, in which
//! fields start and end at arbitrary offsets. A [`Bits`] view borrows such a
//! sequence, and hands out checked [`BitRange`]s from which the primitives
//! read:
//!
//! - unsigned and two's-complement integers ([`BitRange::unsigned`],
//!   [`BitRange::signed`]),
//! - single-bit flags ([`BitRange::boolean`]),
//! - six-bit text ([`text::six_bit_text`]),
//! - month/day/hour/minute timestamps ([`time::Eta`]).
//!
//! Every access is checked against the length of the payload. Reading past
//! the end, or into an integer too narrow for the range, fails with a
//! [`RangeError`]. These failures indicate a layout that does not match the
//! message, and are never truncated silently.
//!
//! The [`FromField`] trait connects these primitives to the types records
//! are built from.

mod field;
mod payload;
pub mod text;
pub mod time;

use thiserror::Error;

pub use field::FromField;
pub use payload::{EncodedMessage, Payload};

/// An error accessing a range of bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The range does not lie within the payload.
    #[error("Bits {start}..{end} exceed the message length ({len}).")]
    OutOfBounds { start: usize, end: usize, len: usize },
    /// The range is wider than the integer it is read into.
    #[error("Bits {start}..{end} do not fit a {width}-bit value.")]
    TooWide {
        start: usize,
        end: usize,
        width: u32,
    },
}

/// An immutable view of payload bits.
#[derive(Debug, Clone, Copy)]
pub struct Bits<'a> {
    bytes: &'a [u8],
    len: usize,
}

impl<'a> Bits<'a> {
    /// View the first `len` bits of a slice, most significant bit first.
    ///
    /// Returns an error if the slice holds fewer than `len` bits.
    pub fn new(bytes: &'a [u8], len: usize) -> Result<Self, RangeError> {
        if len > bytes.len() * 8 {
            Err(RangeError::OutOfBounds {
                start: 0,
                end: len,
                len: bytes.len() * 8,
            })?;
        }

        Ok(Self { bytes, len })
    }

    /// The number of bits in the view.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the half-open range `start..end`.
    pub fn range(&self, start: usize, end: usize) -> Result<BitRange<'a>, RangeError> {
        if start > end || end > self.len {
            Err(RangeError::OutOfBounds {
                start,
                end,
                len: self.len,
            })?;
        }

        Ok(BitRange {
            bytes: self.bytes,
            start,
            end,
        })
    }

    /// Read `start..end` as a big-endian unsigned integer.
    pub fn unsigned(&self, start: usize, end: usize) -> Result<u64, RangeError> {
        self.range(start, end)?.unsigned()
    }

    /// Read `start..end` as a big-endian two's-complement integer.
    pub fn signed(&self, start: usize, end: usize) -> Result<i64, RangeError> {
        self.range(start, end)?.signed()
    }

    /// Read the single bit at `start`.
    pub fn boolean(&self, start: usize) -> Result<bool, RangeError> {
        self.range(start, start + 1)?.boolean()
    }

    /// Read `start..end` as six-bit text, padding included.
    pub fn text(&self, start: usize, end: usize) -> Result<alloc::string::String, RangeError> {
        Ok(text::six_bit_text(self.range(start, end)?))
    }

    /// Read `start..end` as a month/day/hour/minute timestamp.
    pub fn timestamp(&self, start: usize, end: usize) -> Result<time::Eta, RangeError> {
        time::Eta::from_range(self.range(start, end)?)
    }
}

/// A checked range of bits within a payload.
#[derive(Debug, Clone, Copy)]
pub struct BitRange<'a> {
    bytes: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> BitRange<'a> {
    /// Absolute offset of the first bit.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute offset one past the last bit.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The number of bits in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterate over the bits of the range, first to last.
    pub fn iter(&self) -> impl Iterator<Item = bool> + 'a {
        let bytes = self.bytes;
        (self.start..self.end).map(move |i| (bytes[i / 8] >> (7 - i % 8)) & 1 == 1)
    }

    /// Narrow to `from..to`, relative to the start of this range.
    pub fn slice(&self, from: usize, to: usize) -> Result<BitRange<'a>, RangeError> {
        let (start, end) = (self.start + from, self.start + to);

        if from > to || end > self.end {
            Err(RangeError::OutOfBounds {
                start,
                end,
                len: self.end,
            })?;
        }

        Ok(Self {
            bytes: self.bytes,
            start,
            end,
        })
    }

    /// Fail unless the range fits a value of `width` bits.
    pub fn fit(&self, width: u32) -> Result<(), RangeError> {
        if self.len() > width as usize {
            Err(RangeError::TooWide {
                start: self.start,
                end: self.end,
                width,
            })?;
        }

        Ok(())
    }

    /// Interpret the range as a big-endian unsigned integer.
    pub fn unsigned(&self) -> Result<u64, RangeError> {
        self.fit(u64::BITS)?;
        Ok(self.iter().fold(0, |acc, b| (acc << 1) | b as u64))
    }

    /// Interpret the range as a big-endian two's-complement integer, whose
    /// sign is the first bit.
    pub fn signed(&self) -> Result<i64, RangeError> {
        let raw = self.unsigned()?;

        if self.is_empty() {
            return Ok(0);
        }

        // Move the sign bit to the top, then shift back arithmetically.
        let shift = u64::BITS - self.len() as u32;
        Ok(((raw << shift) as i64) >> shift)
    }

    /// Interpret a single-bit range as a flag.
    pub fn boolean(&self) -> Result<bool, RangeError> {
        self.fit(1)?;
        Ok(self.unsigned()? == 1)
    }
}
