use tinyvec::ArrayVec;

use crate::{FromBits, FromField, Message, bits::EncodedMessage, decode::Error};

use super::Header;

/// Reservation of slots by a base station (type 20).
#[derive(Debug, Clone, PartialEq, Eq, Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[message(20)]
pub struct DataLinkManagement {
    pub header: Header,
    /// Between one and four reservations, in transmitted order.
    pub reservations: ArrayVec<[SlotReservation; 4]>,
}

/// A block of reserved slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotReservation {
    /// First reserved slot, relative to the current one.
    pub offset: u16,
    /// Consecutive slots reserved.
    pub number_of_slots: u8,
    /// Minutes the reservation lasts.
    pub timeout: u8,
    /// Slots between repetitions of the block. Zero means one block per
    /// frame.
    pub increment: u16,
}

impl SlotReservation {
    const BITS: usize = 30;
}

impl FromBits for DataLinkManagement {
    fn from_bits<M: EncodedMessage + ?Sized>(m: &M) -> Result<Self, Error> {
        let header = Header::from_bits(m)?;
        let mut reservations = ArrayVec::new();

        for i in 0..4 {
            let start = 40 + i * SlotReservation::BITS;

            if i > 0 && start + SlotReservation::BITS > m.bit_len() {
                break;
            }

            reservations.push(SlotReservation {
                offset: u16::from_field(m.bits(start, start + 12)?)?,
                number_of_slots: u8::from_field(m.bits(start + 12, start + 16)?)?,
                timeout: u8::from_field(m.bits(start + 16, start + 19)?)?,
                increment: u16::from_field(m.bits(start + 19, start + 30)?)?,
            });
        }

        Ok(Self {
            header,
            reservations,
        })
    }
}
