use tartan_bitfield::bitfield;

/// Self-organised TDMA communication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sotdma {
    pub sync_state: u8,
    /// Frames remaining until a new slot is selected.
    pub slot_timeout: u8,
    /// Meaning depends on the slot timeout: received stations, slot number,
    /// UTC hour and minute, or slot offset.
    pub sub_message: u16,
}

impl Sotdma {
    /// Unpack the low 19 bits of a radio status field.
    pub fn from_packed(raw: u32) -> Self {
        bitfield! {
            struct Packed(u32) {
                [0..14] sub_message: u16,
                [14..17] slot_timeout: u8,
                [17..19] sync_state: u8,
            }
        }

        let packed = Packed(raw);

        Self {
            sync_state: packed.sync_state(),
            slot_timeout: packed.slot_timeout(),
            sub_message: packed.sub_message(),
        }
    }
}

/// Incremental TDMA communication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Itdma {
    pub sync_state: u8,
    pub slot_increment: u16,
    pub number_of_slots: u8,
    pub keep: bool,
}

impl Itdma {
    /// Unpack the low 19 bits of a radio status field.
    pub fn from_packed(raw: u32) -> Self {
        bitfield! {
            struct Packed(u32) {
                [0] keep,
                [1..4] number_of_slots: u8,
                [4..17] slot_increment: u16,
                [17..19] sync_state: u8,
            }
        }

        let packed = Packed(raw);

        Self {
            sync_state: packed.sync_state(),
            slot_increment: packed.slot_increment(),
            number_of_slots: packed.number_of_slots(),
            keep: packed.keep(),
        }
    }
}
