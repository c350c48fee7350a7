use alloc::string::String;

use either::Either::{self, Left, Right};

use crate::{
    FromBits, FromField, Message,
    bits::{EncodedMessage, text::trim_padding},
    decode::Error,
    types::{Mmsi, ShipType},
};

use super::Header;

/// Static data of a class B station, sent in two parts (type 24).
#[derive(Debug, Clone, PartialEq, Eq, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(24)]
pub struct StaticDataReport {
    pub header: Header,
    pub part_number: u8,
    /// Part A for part number zero, part B otherwise.
    pub part: Either<StaticDataPartA, StaticDataPartB>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromBits)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StaticDataPartA {
    #[bits(40..160)]
    pub ship_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StaticDataPartB {
    pub ship_type: ShipType,
    pub vendor_id: String,
    pub unit_model_code: u8,
    pub serial_number: u32,
    pub call_sign: String,
    /// Dimensions for a vessel, the mothership for an auxiliary craft.
    pub hull: Either<Dimensions, Mmsi>,
}

/// Distances in metres from the position reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromBits)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dimensions {
    #[bits(132..141)]
    pub to_bow: u16,
    #[bits(141..150)]
    pub to_stern: u16,
    #[bits(150..156)]
    pub to_port: u8,
    #[bits(156..162)]
    pub to_starboard: u8,
}

impl FromBits for StaticDataReport {
    fn from_bits<M: EncodedMessage + ?Sized>(m: &M) -> Result<Self, Error> {
        let header = Header::from_bits(m)?;
        let part_number = u8::from_field(m.bits(38, 40)?)?;

        let part = if part_number == 0 {
            Left(StaticDataPartA::from_bits(m)?)
        } else {
            let hull = if header.mmsi.is_auxiliary() {
                Right(Mmsi::from_field(m.bits(132, 162)?)?)
            } else {
                Left(Dimensions::from_bits(m)?)
            };

            Right(StaticDataPartB {
                ship_type: ShipType::from_field(m.bits(40, 48)?)?,
                vendor_id: String::from_field(m.bits(48, 66)?)?,
                unit_model_code: u8::from_field(m.bits(66, 70)?)?,
                serial_number: u32::from_field(m.bits(70, 90)?)?,
                call_sign: String::from_field(m.bits(90, 132)?)?,
                hull,
            })
        };

        Ok(Self {
            header,
            part_number,
            part,
        })
    }
}

impl StaticDataReport {
    pub fn part_a(&self) -> Option<&StaticDataPartA> {
        self.part.as_ref().left()
    }

    pub fn part_b(&self) -> Option<&StaticDataPartB> {
        self.part.as_ref().right()
    }
}

impl StaticDataPartA {
    pub fn ship_name_trimmed(&self) -> &str {
        trim_padding(&self.ship_name)
    }
}

impl StaticDataPartB {
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.hull.left()
    }

    pub fn mothership_mmsi(&self) -> Option<Mmsi> {
        self.hull.right()
    }

    pub fn call_sign_trimmed(&self) -> &str {
        trim_padding(&self.call_sign)
    }
}
