use crate::{
    FromBits, Message,
    types::{Mmsi, PositionFixingDevice, Sotdma},
};

use super::Header;

/// Base station report (type 4), or the response to a UTC and date inquiry
/// (type 11).
///
/// The UTC fields hold their 'not available' markers as transmitted: year
/// 0, month 0, day 0, hour 24, minute 60 and second 60.
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(4, 11)]
pub struct BaseStationReport {
    #[group]
    pub header: Header,
    #[bits(38..52)]
    pub year: u16,
    #[bits(52..56)]
    pub month: u8,
    #[bits(56..61)]
    pub day: u8,
    #[bits(61..66)]
    pub hour: u8,
    #[bits(66..72)]
    pub minute: u8,
    #[bits(72..78)]
    pub second: u8,
    #[bits(78)]
    pub position_accuracy: bool,
    #[bits(79..107, signed, scale = 600_000)]
    pub longitude: f32,
    #[bits(107..134, signed, scale = 600_000)]
    pub latitude: f32,
    #[bits(134..138)]
    pub position_fixing_device: PositionFixingDevice,
    #[bits(148)]
    pub raim: bool,
    #[bits(149..168)]
    pub radio_status: u32,
}

impl BaseStationReport {
    pub fn communication_state(&self) -> Sotdma {
        Sotdma::from_packed(self.radio_status)
    }
}

/// Request for a station's UTC time and date (type 10).
#[derive(Debug, Clone, PartialEq, Eq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(10)]
pub struct UtcDateInquiry {
    #[group]
    pub header: Header,
    #[bits(40..70)]
    pub destination_mmsi: Mmsi,
}
