use alloc::{vec, vec::Vec};

use crate::{
    bits::{BitRange, FromField},
    decode::Error,
};

/// Application data carried by a binary message.
///
/// The bits are packed most significant first. A final partial byte is
/// padded with zeros; [`bit_len`](Self::bit_len) gives the exact length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryData {
    bytes: Vec<u8>,
    len: usize,
}

impl BinaryData {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bit_len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromField for BinaryData {
    fn from_field(r: BitRange<'_>) -> Result<Self, Error> {
        let mut bytes = vec![0; r.len().div_ceil(8)];

        for (i, bit) in r.iter().enumerate() {
            if bit {
                bytes[i / 8] |= 0x80 >> (i % 8);
            }
        }

        Ok(Self {
            bytes,
            len: r.len(),
        })
    }
}
