use core::fmt;

use thiserror::Error;

use crate::{
    bits::{BitRange, FromField},
    decode::Error,
};

/// An identifier outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// MMSI above nine digits.
    #[error("MMSI out of range ({0}).")]
    Mmsi(u32),
    /// IMO number above nine digits.
    #[error("IMO number out of range ({0}).")]
    Imo(u32),
}

/// Maritime Mobile Service Identity, the nine-digit identifier of a
/// station's radio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mmsi(u32);

impl Mmsi {
    pub const MAX: u32 = 999_999_999;

    pub fn new(value: u32) -> Result<Self, IdentifierError> {
        if value > Self::MAX {
            Err(IdentifierError::Mmsi(value))?;
        }

        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether this identifies a craft associated with a parent ship
    /// (`98MIDxxxx`).
    pub fn is_auxiliary(self) -> bool {
        self.0 / 10_000_000 == 98
    }
}

impl TryFrom<u32> for Mmsi {
    type Error = IdentifierError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Mmsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl FromField for Mmsi {
    fn from_field(r: BitRange<'_>) -> Result<Self, Error> {
        Ok(Self::new(u32::from_field(r)?)?)
    }
}

/// International Maritime Organization ship identification number.
///
/// Zero marks a number that is not available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Imo(u32);

impl Imo {
    pub const MAX: u32 = 999_999_999;
    pub const NOT_AVAILABLE: Self = Self(0);

    pub fn new(value: u32) -> Result<Self, IdentifierError> {
        if value > Self::MAX {
            Err(IdentifierError::Imo(value))?;
        }

        Ok(Self(value))
    }

    /// The number, if available.
    pub fn get(self) -> Option<u32> {
        Some(self.0).filter(|&v| v != 0)
    }

    pub fn is_available(self) -> bool {
        self.0 != 0
    }
}

impl TryFrom<u32> for Imo {
    type Error = IdentifierError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromField for Imo {
    fn from_field(r: BitRange<'_>) -> Result<Self, Error> {
        Ok(Self::new(u32::from_field(r)?)?)
    }
}
