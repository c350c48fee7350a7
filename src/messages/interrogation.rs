use crate::{FromBits, Message, types::Mmsi};

use super::Header;

/// Request for specific messages from one or two stations (type 15).
///
/// The message carries one to three requests: one or two addressed to the
/// first station, and optionally one to a second station. Requests that do
/// not fit in the transmitted length are absent.
#[derive(Debug, Clone, PartialEq, Eq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(15)]
pub struct Interrogation {
    #[group]
    pub header: Header,
    #[bits(40..70)]
    pub first_mmsi: Mmsi,
    #[bits(70..76)]
    pub first_message_type: u8,
    #[bits(76..88)]
    pub first_slot_offset: u16,
    #[bits(90..96, optional)]
    pub second_message_type: Option<u8>,
    #[bits(96..108, optional)]
    pub second_slot_offset: Option<u16>,
    #[bits(110..140, optional)]
    pub second_mmsi: Option<Mmsi>,
    #[bits(140..146, optional)]
    pub second_mmsi_message_type: Option<u8>,
    #[bits(146..158, optional)]
    pub second_mmsi_slot_offset: Option<u16>,
}
