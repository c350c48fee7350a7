use alloc::string::String;

use crate::{
    FromBits, Message,
    bits::{text::trim_padding, time::Eta},
    types::{Imo, PositionFixingDevice, ShipType},
};

use super::Header;

/// Static and voyage related data of a class A ship (type 5).
///
/// The message spans 424 bits, occupying two sentences. In practice the
/// voyage fields (especially the estimated time of arrival and destination)
/// are entered by hand and often out of date.
///
/// Text fields hold their padding as transmitted; the `*_trimmed` accessors
/// return them without it.
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(5)]
pub struct ShipAndVoyageData {
    #[group]
    pub header: Header,
    #[bits(38..40)]
    pub ais_version: u8,
    #[bits(40..70)]
    pub imo: Imo,
    #[bits(70..112)]
    pub call_sign: String,
    #[bits(112..232)]
    pub ship_name: String,
    #[bits(232..240)]
    pub ship_type: ShipType,
    /// Metres from the position reference point.
    #[bits(240..249)]
    pub to_bow: u16,
    #[bits(249..258)]
    pub to_stern: u16,
    #[bits(258..264)]
    pub to_port: u8,
    #[bits(264..270)]
    pub to_starboard: u8,
    #[bits(270..274)]
    pub position_fixing_device: PositionFixingDevice,
    #[bits(274..294)]
    pub eta: Eta,
    /// Metres.
    #[bits(294..302, scale = 10)]
    pub draught: f32,
    #[bits(302..422)]
    pub destination: String,
    /// Clear if data terminal equipment is available.
    #[bits(422)]
    pub data_terminal_ready: bool,
}

impl ShipAndVoyageData {
    pub fn call_sign_trimmed(&self) -> &str {
        trim_padding(&self.call_sign)
    }

    pub fn ship_name_trimmed(&self) -> &str {
        trim_padding(&self.ship_name)
    }

    pub fn destination_trimmed(&self) -> &str {
        trim_padding(&self.destination)
    }

    /// Overall length in metres.
    pub fn length(&self) -> u16 {
        self.to_bow.saturating_add(self.to_stern)
    }

    /// Overall beam in metres.
    pub fn beam(&self) -> u8 {
        self.to_port.saturating_add(self.to_starboard)
    }
}
