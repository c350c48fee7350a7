use tinyvec::ArrayVec;

use crate::{
    FromBits, FromField, Message, bits::EncodedMessage, decode::Error, types::Mmsi,
};

use super::Header;

/// Acknowledgement of addressed binary (type 7) or safety related (type 13)
/// messages.
#[derive(Debug, Clone, PartialEq, Eq, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(7, 13)]
pub struct Acknowledge {
    pub header: Header,
    /// Between one and four entries, in transmitted order.
    pub acknowledgements: ArrayVec<[Acknowledgement; 4]>,
}

/// A single acknowledged message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Acknowledgement {
    /// Station whose message is acknowledged.
    pub mmsi: Mmsi,
    pub sequence_number: u8,
}

impl FromBits for Acknowledge {
    fn from_bits<M: EncodedMessage + ?Sized>(m: &M) -> Result<Self, Error> {
        let header = Header::from_bits(m)?;
        let mut acknowledgements = ArrayVec::new();

        for i in 0..4 {
            let start = 40 + i * 32;

            // The first entry is mandatory; later ones end the message early.
            if i > 0 && start + 32 > m.bit_len() {
                break;
            }

            acknowledgements.push(Acknowledgement {
                mmsi: Mmsi::from_field(m.bits(start, start + 30)?)?,
                sequence_number: u8::from_field(m.bits(start + 30, start + 32)?)?,
            });
        }

        Ok(Self {
            header,
            acknowledgements,
        })
    }
}
