use either::Either;

use crate::{
    FromBits, Message,
    types::{Mmsi, TxRxMode},
};

use super::Header;

/// Channel and power settings for a set of stations (type 22).
///
/// The command targets either two stations or a rectangular area,
/// never both.
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(22)]
pub struct ChannelManagement {
    #[group]
    pub header: Header,
    #[bits(40..52)]
    pub channel_a: u16,
    #[bits(52..64)]
    pub channel_b: u16,
    #[bits(64..68)]
    pub transmit_receive_mode: TxRxMode,
    /// Set for low power.
    #[bits(68)]
    pub power: bool,
    #[bits(139)]
    pub addressed: bool,
    /// Set if channel A uses a 12.5 kHz bandwidth.
    #[bits(140)]
    pub band_a: bool,
    #[bits(141)]
    pub band_b: bool,
    #[bits(142..145)]
    pub zone_size: u8,
    #[group(addressed)]
    pub target: Either<Addressees, Area>,
}

/// The two stations a [`ChannelManagement`] command is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBits)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Addressees {
    #[bits(69..99)]
    pub first: Mmsi,
    #[bits(104..134)]
    pub second: Mmsi,
}

/// The corners of the area a [`ChannelManagement`] command applies to.
///
/// Corners are the transmitted tenths of a minute divided by ten.
#[derive(Debug, Clone, Copy, PartialEq, FromBits)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Area {
    #[bits(69..87, signed, scale = 10)]
    pub north_east_longitude: f32,
    #[bits(87..104, signed, scale = 10)]
    pub north_east_latitude: f32,
    #[bits(104..122, signed, scale = 10)]
    pub south_west_longitude: f32,
    #[bits(122..139, signed, scale = 10)]
    pub south_west_latitude: f32,
}

impl ChannelManagement {
    pub fn destination_mmsi1(&self) -> Option<Mmsi> {
        self.target.as_ref().left().map(|a| a.first)
    }

    pub fn destination_mmsi2(&self) -> Option<Mmsi> {
        self.target.as_ref().left().map(|a| a.second)
    }

    fn area(&self) -> Option<&Area> {
        self.target.as_ref().right()
    }

    pub fn north_east_longitude(&self) -> Option<f32> {
        self.area().map(|a| a.north_east_longitude)
    }

    pub fn north_east_latitude(&self) -> Option<f32> {
        self.area().map(|a| a.north_east_latitude)
    }

    pub fn south_west_longitude(&self) -> Option<f32> {
        self.area().map(|a| a.south_west_longitude)
    }

    pub fn south_west_latitude(&self) -> Option<f32> {
        self.area().map(|a| a.south_west_latitude)
    }
}
