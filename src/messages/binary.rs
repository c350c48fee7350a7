use crate::{
    FromBits, FromField, Message,
    bits::EncodedMessage,
    decode::Error,
    types::{BinaryData, Mmsi},
};

use super::Header;

/// Binary data addressed to a single station (type 6).
#[derive(Debug, Clone, PartialEq, Eq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(6)]
pub struct AddressedBinaryMessage {
    #[group]
    pub header: Header,
    #[bits(38..40)]
    pub sequence_number: u8,
    #[bits(40..70)]
    pub destination_mmsi: Mmsi,
    #[bits(70)]
    pub retransmitted: bool,
    #[bits(72..82)]
    pub designated_area_code: u16,
    #[bits(82..88)]
    pub function_id: u8,
    #[bits(88..)]
    pub data: BinaryData,
}

/// Binary data broadcast to all stations (type 8).
#[derive(Debug, Clone, PartialEq, Eq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(8)]
pub struct BinaryBroadcastMessage {
    #[group]
    pub header: Header,
    #[bits(40..50)]
    pub designated_area_code: u16,
    #[bits(50..56)]
    pub function_id: u8,
    #[bits(56..)]
    pub data: BinaryData,
}

/// Differential GNSS corrections broadcast by a base station (type 17).
#[derive(Debug, Clone, PartialEq, FromBits, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(17)]
pub struct GnssBroadcastMessage {
    #[group]
    pub header: Header,
    /// Degrees, from tenths of a minute.
    #[bits(40..58, signed, scale = 600)]
    pub longitude: f32,
    #[bits(58..75, signed, scale = 600)]
    pub latitude: f32,
    #[bits(80..)]
    pub data: BinaryData,
}

/// Identifies the format of structured binary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ApplicationId {
    pub designated_area_code: u16,
    pub function_id: u8,
}

/// Binary data transmitted in a single slot (type 25).
#[derive(Debug, Clone, PartialEq, Eq, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(25)]
pub struct SingleSlotBinaryMessage {
    pub header: Header,
    /// Present if the message is addressed.
    pub destination_mmsi: Option<Mmsi>,
    /// Present if the data is structured.
    pub application_id: Option<ApplicationId>,
    pub data: BinaryData,
}

impl FromBits for SingleSlotBinaryMessage {
    fn from_bits<M: EncodedMessage + ?Sized>(m: &M) -> Result<Self, Error> {
        let header = Header::from_bits(m)?;
        let envelope = Envelope::from_bits(m)?;
        let data = BinaryData::from_field(m.bits(envelope.data_start, m.bit_len())?)?;

        Ok(Self {
            header,
            destination_mmsi: envelope.destination_mmsi,
            application_id: envelope.application_id,
            data,
        })
    }
}

/// Binary data transmitted in multiple slots (type 26).
#[derive(Debug, Clone, PartialEq, Eq, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(26)]
pub struct MultipleSlotBinaryMessage {
    pub header: Header,
    /// Present if the message is addressed.
    pub destination_mmsi: Option<Mmsi>,
    /// Present if the data is structured.
    pub application_id: Option<ApplicationId>,
    pub data: BinaryData,
    /// The final 20 bits of the message.
    pub radio_status: u32,
}

impl MultipleSlotBinaryMessage {
    const RADIO_BITS: usize = 20;
}

impl FromBits for MultipleSlotBinaryMessage {
    fn from_bits<M: EncodedMessage + ?Sized>(m: &M) -> Result<Self, Error> {
        let header = Header::from_bits(m)?;
        let envelope = Envelope::from_bits(m)?;

        let radio_start = m.bit_len().saturating_sub(Self::RADIO_BITS);
        let data = BinaryData::from_field(m.bits(envelope.data_start, radio_start)?)?;
        let radio_status = u32::from_field(m.bits(radio_start, m.bit_len())?)?;

        Ok(Self {
            header,
            destination_mmsi: envelope.destination_mmsi,
            application_id: envelope.application_id,
            data,
            radio_status,
        })
    }
}

/// The flags and optional fields preceding the data of types 25 and 26.
///
/// Each optional field present moves the start of the data back.
struct Envelope {
    destination_mmsi: Option<Mmsi>,
    application_id: Option<ApplicationId>,
    data_start: usize,
}

impl FromBits for Envelope {
    fn from_bits<M: EncodedMessage + ?Sized>(m: &M) -> Result<Self, Error> {
        let addressed = bool::from_field(m.bits(38, 39)?)?;
        let structured = bool::from_field(m.bits(39, 40)?)?;

        let mut i = 40;

        let destination_mmsi = if addressed {
            i += 30;
            Some(Mmsi::from_field(m.bits(i - 30, i)?)?)
        } else {
            None
        };

        let application_id = if structured {
            i += 16;
            Some(ApplicationId {
                designated_area_code: u16::from_field(m.bits(i - 16, i - 6)?)?,
                function_id: u8::from_field(m.bits(i - 6, i)?)?,
            })
        } else {
            None
        };

        Ok(Self {
            destination_mmsi,
            application_id,
            data_start: i,
        })
    }
}
