use alloc::string::String;

use crate::{FromBits, Message, bits::text::trim_padding, types::Mmsi};

use super::Header;

/// Safety related text addressed to a single station (type 12).
#[derive(Debug, Clone, PartialEq, Eq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(12)]
pub struct AddressedSafetyMessage {
    #[group]
    pub header: Header,
    #[bits(38..40)]
    pub sequence_number: u8,
    #[bits(40..70)]
    pub destination_mmsi: Mmsi,
    #[bits(70)]
    pub retransmitted: bool,
    #[bits(72..)]
    pub text: String,
}

/// Safety related text broadcast to all stations (type 14).
#[derive(Debug, Clone, PartialEq, Eq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(14)]
pub struct SafetyBroadcastMessage {
    #[group]
    pub header: Header,
    #[bits(40..)]
    pub text: String,
}

impl AddressedSafetyMessage {
    pub fn text_trimmed(&self) -> &str {
        trim_padding(&self.text)
    }
}

impl SafetyBroadcastMessage {
    pub fn text_trimmed(&self) -> &str {
        trim_padding(&self.text)
    }
}
