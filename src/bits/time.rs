//! Month/day/hour/minute timestamps.

use core::fmt;

use tartan_bitfield::bitfield;

use super::{BitRange, RangeError};

/// A timestamp packed as month (4 bits), day (5), hour (5) and minute (6),
/// as used for a ship's estimated time of arrival.
///
/// Each sub-field has its own 'not available' marker: month 0, day 0, hour
/// 24 and minute 60. Marked sub-fields are held as `None` rather than being
/// replaced with a default date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Eta {
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
}

impl Eta {
    /// Width of a packed timestamp.
    pub const BITS: u32 = 20;

    /// Unpack a timestamp from the low 20 bits of an integer.
    pub fn from_packed(raw: u32) -> Self {
        bitfield! {
            struct Packed(u32) {
                [0..6] minute: u8,
                [6..11] hour: u8,
                [11..16] day: u8,
                [16..20] month: u8,
            }
        }

        let packed = Packed(raw);

        Self {
            month: Some(packed.month()).filter(|&m| m != 0),
            day: Some(packed.day()).filter(|&d| d != 0),
            hour: Some(packed.hour()).filter(|&h| h != 24),
            minute: Some(packed.minute()).filter(|&m| m != 60),
        }
    }

    /// Decode a timestamp occupying a 20-bit range.
    pub fn from_range(r: BitRange<'_>) -> Result<Self, RangeError> {
        if r.len() != Self::BITS as usize {
            Err(RangeError::TooWide {
                start: r.start(),
                end: r.end(),
                width: Self::BITS,
            })?;
        }

        Ok(Self::from_packed(r.unsigned()? as u32))
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn hour(&self) -> Option<u8> {
        self.hour
    }

    pub fn minute(&self) -> Option<u8> {
        self.minute
    }

    /// Whether a date was given. A timestamp without a month is 'not
    /// available' as a whole.
    pub fn is_available(&self) -> bool {
        self.month.is_some()
    }
}

/// Formats as `DD-MM HH:MM`, with `--` for sub-fields that are not
/// available.
impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(f: &mut fmt::Formatter<'_>, value: Option<u8>) -> fmt::Result {
            match value {
                Some(v) => write!(f, "{v:02}"),
                None => f.write_str("--"),
            }
        }

        part(f, self.day)?;
        f.write_str("-")?;
        part(f, self.month)?;
        f.write_str(" ")?;
        part(f, self.hour)?;
        f.write_str(":")?;
        part(f, self.minute)
    }
}
