use alloc::string::String;

use crate::{
    FromBits, Message,
    bits::text::trim_padding,
    types::{AidType, PositionFixingDevice},
};

use super::Header;

/// Report of an aid to navigation, such as a buoy or lighthouse (type 21).
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(21)]
pub struct AidToNavigationReport {
    #[group]
    pub header: Header,
    #[bits(38..43)]
    pub aid_type: AidType,
    #[bits(43..163)]
    pub name: String,
    #[bits(163)]
    pub position_accuracy: bool,
    #[bits(164..192, signed, scale = 600_000)]
    pub longitude: f32,
    #[bits(192..219, signed, scale = 600_000)]
    pub latitude: f32,
    #[bits(219..228)]
    pub to_bow: u16,
    #[bits(228..237)]
    pub to_stern: u16,
    #[bits(237..243)]
    pub to_port: u8,
    #[bits(243..249)]
    pub to_starboard: u8,
    #[bits(249..253)]
    pub position_fixing_device: PositionFixingDevice,
    #[bits(253..259)]
    pub second: u8,
    #[bits(259)]
    pub off_position: bool,
    #[bits(260..268)]
    pub regional_reserved: u8,
    #[bits(268)]
    pub raim: bool,
    /// Set if the aid is not physically present.
    #[bits(269)]
    pub virtual_aid: bool,
    #[bits(270)]
    pub assigned: bool,
    /// Continuation of the name beyond 20 characters. Empty if not sent.
    #[bits(272..)]
    pub name_extension: String,
}

impl AidToNavigationReport {
    /// The name with its extension, padding removed.
    pub fn full_name(&self) -> String {
        let mut name = String::from(trim_padding(&self.name));
        name.push_str(trim_padding(&self.name_extension));
        name
    }
}
