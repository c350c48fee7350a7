use alloc::string::String;

use either::Either;

use crate::{
    FromBits, Message,
    bits::text::trim_padding,
    types::{Itdma, PositionFixingDevice, ShipType, Sotdma},
};

use super::Header;

/// Position report from a class B transponder (type 18).
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(18)]
pub struct ClassBPositionReport {
    #[group]
    pub header: Header,
    #[bits(46..56, scale = 10)]
    pub speed_over_ground: f32,
    #[bits(56)]
    pub position_accuracy: bool,
    #[bits(57..85, signed, scale = 600_000)]
    pub longitude: f32,
    #[bits(85..112, signed, scale = 600_000)]
    pub latitude: f32,
    #[bits(112..124, scale = 10)]
    pub course_over_ground: f32,
    #[bits(124..133)]
    pub true_heading: u16,
    #[bits(133..139)]
    pub second: u8,
    #[bits(139..141)]
    pub regional_reserved: u8,
    /// Set for a carrier sense unit, clear for a SOTDMA unit.
    #[bits(141)]
    pub cs_unit: bool,
    #[bits(142)]
    pub display: bool,
    #[bits(143)]
    pub dsc: bool,
    /// Set if the unit can use the whole marine band.
    #[bits(144)]
    pub band: bool,
    /// Set if the unit accepts channel management.
    #[bits(145)]
    pub message_22: bool,
    #[bits(146)]
    pub assigned: bool,
    #[bits(147)]
    pub raim: bool,
    #[bits(148..168)]
    pub radio_status: u32,
}

impl ClassBPositionReport {
    pub fn communication_state(&self) -> Either<Sotdma, Itdma> {
        selected_communication_state(self.radio_status)
    }
}

/// Extended position report from a class B transponder (type 19).
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(19)]
pub struct ExtendedClassBPositionReport {
    #[group]
    pub header: Header,
    #[bits(46..56, scale = 10)]
    pub speed_over_ground: f32,
    #[bits(56)]
    pub position_accuracy: bool,
    #[bits(57..85, signed, scale = 600_000)]
    pub longitude: f32,
    #[bits(85..112, signed, scale = 600_000)]
    pub latitude: f32,
    #[bits(112..124, scale = 10)]
    pub course_over_ground: f32,
    #[bits(124..133)]
    pub true_heading: u16,
    #[bits(133..139)]
    pub second: u8,
    #[bits(139..143)]
    pub regional_reserved: u8,
    #[bits(143..263)]
    pub ship_name: String,
    #[bits(263..271)]
    pub ship_type: ShipType,
    #[bits(271..280)]
    pub to_bow: u16,
    #[bits(280..289)]
    pub to_stern: u16,
    #[bits(289..295)]
    pub to_port: u8,
    #[bits(295..301)]
    pub to_starboard: u8,
    #[bits(301..305)]
    pub position_fixing_device: PositionFixingDevice,
    #[bits(305)]
    pub raim: bool,
    #[bits(306)]
    pub data_terminal_ready: bool,
    #[bits(307)]
    pub assigned: bool,
}

impl ExtendedClassBPositionReport {
    pub fn ship_name_trimmed(&self) -> &str {
        trim_padding(&self.ship_name)
    }
}

/// Unpacks a 20 bit radio status whose leading bit selects ITDMA.
pub(super) fn selected_communication_state(raw: u32) -> Either<Sotdma, Itdma> {
    let state = raw & 0x7_FFFF;

    if raw & 0x8_0000 != 0 {
        Either::Right(Itdma::from_packed(state))
    } else {
        Either::Left(Sotdma::from_packed(state))
    }
}
