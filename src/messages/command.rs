use crate::{
    FromBits, Message,
    types::{Mmsi, ReportingInterval, ShipType, StationType, TxRxMode},
};

use super::Header;

/// Assignment of a reporting schedule to one or two stations (type 16).
#[derive(Debug, Clone, PartialEq, Eq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(16)]
pub struct AssignedModeCommand {
    #[group]
    pub header: Header,
    #[bits(40..70)]
    pub first_mmsi: Mmsi,
    #[bits(70..82)]
    pub first_offset: u16,
    #[bits(82..92)]
    pub first_increment: u16,
    #[bits(92..122, optional)]
    pub second_mmsi: Option<Mmsi>,
    #[bits(122..134, optional)]
    pub second_offset: Option<u16>,
    #[bits(134..144, optional)]
    pub second_increment: Option<u16>,
}

/// Assignment of reporting behaviour to stations within an area (type 23).
///
/// Like the area of a [`ChannelManagement`](super::ChannelManagement)
/// command, the corners are divided by ten only.
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(23)]
pub struct GroupAssignmentCommand {
    #[group]
    pub header: Header,
    #[bits(40..58, signed, scale = 10)]
    pub north_east_longitude: f32,
    #[bits(58..75, signed, scale = 10)]
    pub north_east_latitude: f32,
    #[bits(75..93, signed, scale = 10)]
    pub south_west_longitude: f32,
    #[bits(93..110, signed, scale = 10)]
    pub south_west_latitude: f32,
    #[bits(110..114)]
    pub station_type: StationType,
    #[bits(114..122)]
    pub ship_type: ShipType,
    #[bits(144..146)]
    pub transmit_receive_mode: TxRxMode,
    #[bits(146..150)]
    pub reporting_interval: ReportingInterval,
    /// Minutes without transmission. Zero means none.
    #[bits(150..154)]
    pub quiet_time: u8,
}
