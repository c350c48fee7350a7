use either::Either::{self, Left, Right};

use crate::{
    FromBits, Message,
    types::{Itdma, ManeuverIndicator, NavigationStatus, Sotdma},
};

use super::Header;

/// Class A position report (types 1, 2 and 3).
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(1, 2, 3)]
pub struct PositionReport {
    #[group]
    pub header: Header,
    #[bits(38..42)]
    pub navigation_status: NavigationStatus,
    /// Raw rate of turn indicator. `-128` means not available, `±127` a
    /// turn faster than 5° per 30 seconds without a turn indicator.
    #[bits(42..50)]
    pub rate_of_turn: i8,
    /// Knots. `102.3` means not available.
    #[bits(50..60, scale = 10)]
    pub speed_over_ground: f32,
    #[bits(60)]
    pub position_accuracy: bool,
    /// Degrees. `181` means not available.
    #[bits(61..89, signed, scale = 600_000)]
    pub longitude: f32,
    /// Degrees. `91` means not available.
    #[bits(89..116, signed, scale = 600_000)]
    pub latitude: f32,
    /// Degrees. `360` means not available.
    #[bits(116..128, scale = 10)]
    pub course_over_ground: f32,
    /// Degrees. `511` means not available.
    #[bits(128..137)]
    pub true_heading: u16,
    /// Second of the UTC minute the report was generated.
    #[bits(137..143)]
    pub second: u8,
    #[bits(143..145)]
    pub maneuver: ManeuverIndicator,
    #[bits(148)]
    pub raim: bool,
    #[bits(149..168)]
    pub radio_status: u32,
}

impl PositionReport {
    /// The communication state, incremental for responses to interrogation
    /// (type 3) and self-organised otherwise.
    pub fn communication_state(&self) -> Either<Sotdma, Itdma> {
        if self.header.message_type == 3 {
            Right(Itdma::from_packed(self.radio_status))
        } else {
            Left(Sotdma::from_packed(self.radio_status))
        }
    }
}

/// Position report of an aircraft involved in search and rescue (type 9).
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(9)]
pub struct SarAircraftPositionReport {
    #[group]
    pub header: Header,
    /// Metres. `4095` means not available.
    #[bits(38..50)]
    pub altitude: u16,
    /// Knots, in whole units for aircraft. `1023` means not available.
    #[bits(50..60)]
    pub speed_over_ground: u16,
    #[bits(60)]
    pub position_accuracy: bool,
    #[bits(61..89, signed, scale = 600_000)]
    pub longitude: f32,
    #[bits(89..116, signed, scale = 600_000)]
    pub latitude: f32,
    #[bits(116..128, scale = 10)]
    pub course_over_ground: f32,
    #[bits(128..134)]
    pub second: u8,
    #[bits(134..142)]
    pub regional_reserved: u8,
    #[bits(142)]
    pub data_terminal_ready: bool,
    #[bits(146)]
    pub assigned: bool,
    #[bits(147)]
    pub raim: bool,
    #[bits(148..168)]
    pub radio_status: u32,
}

impl SarAircraftPositionReport {
    pub fn communication_state(&self) -> Either<Sotdma, Itdma> {
        super::class_b::selected_communication_state(self.radio_status)
    }
}

/// Position report for long-range (satellite) reception (type 27).
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(27)]
pub struct LongRangeBroadcast {
    #[group]
    pub header: Header,
    #[bits(38)]
    pub position_accuracy: bool,
    #[bits(39)]
    pub raim: bool,
    #[bits(40..44)]
    pub navigation_status: NavigationStatus,
    /// Degrees, from tenths of a minute.
    #[bits(44..62, signed, scale = 600)]
    pub longitude: f32,
    #[bits(62..79, signed, scale = 600)]
    pub latitude: f32,
    /// Whole knots. `63` means not available.
    #[bits(79..85)]
    pub speed_over_ground: u8,
    /// Whole degrees. `511` means not available.
    #[bits(85..94)]
    pub course_over_ground: u16,
    /// Set if the position is older than five seconds.
    #[bits(94)]
    pub position_latency: bool,
}
