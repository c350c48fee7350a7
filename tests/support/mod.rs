#![allow(dead_code)]

use std::path::Path;

use binnacle::Payload;
use csv::ReaderBuilder;

/// Builds a payload field by field, most significant bit first.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message type, repeat indicator and source MMSI.
    pub fn header(message_type: u8, repeat_indicator: u8, mmsi: u32) -> Self {
        Self::new()
            .unsigned(6, message_type as u64)
            .unsigned(2, repeat_indicator as u64)
            .unsigned(30, mmsi as u64)
    }

    pub fn unsigned(mut self, width: usize, value: u64) -> Self {
        for i in (0..width).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
        self
    }

    pub fn signed(self, width: usize, value: i64) -> Self {
        self.unsigned(width, value as u64)
    }

    pub fn flag(self, value: bool) -> Self {
        self.unsigned(1, value as u64)
    }

    pub fn zeros(mut self, width: usize) -> Self {
        self.bits.extend(std::iter::repeat_n(false, width));
        self
    }

    /// Six-bit text of exactly `chars` characters, padded with `'@'`.
    pub fn text(mut self, chars: usize, text: &str) -> Self {
        let mut codes = text.chars().map(six_bit_code);
        for _ in 0..chars {
            self = self.unsigned(6, codes.next().unwrap_or(0) as u64);
        }
        self
    }

    pub fn pad_to(mut self, len: usize) -> Self {
        if self.bits.len() < len {
            let missing = len - self.bits.len();
            self = self.zeros(missing);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn finish(self) -> Payload {
        Payload::from_bits(self.bits)
    }
}

fn six_bit_code(c: char) -> u8 {
    match c {
        '@'..='_' => c as u8 - 64,
        ' '..='?' => c as u8,
        _ => panic!("{c:?} has no six-bit code"),
    }
}

/// Unpack an armored AIVDM payload, dropping `fill` trailing bits.
pub fn dearmor(payload: &str, fill: usize) -> Payload {
    let mut bits = Vec::new();

    for c in payload.bytes() {
        let mut value = c - 48;
        if value > 40 {
            value -= 8;
        }
        for i in (0..6).rev() {
            bits.push((value >> i) & 1 == 1);
        }
    }

    bits.truncate(bits.len() - fill);
    Payload::from_bits(bits)
}

/// Armored payloads with their expected type, repeat indicator and MMSI.
pub fn load_payloads(path: impl AsRef<Path>) -> Vec<(Payload, u8, u8, u32)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();

    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            let fill = r[1].parse().unwrap();
            (
                dearmor(&r[0], fill),
                r[2].parse().unwrap(),
                r[3].parse().unwrap(),
                r[4].parse().unwrap(),
            )
        })
        .collect()
}

#[track_caller]
pub fn assert_close(actual: f32, expected: f64) {
    assert!(
        (actual as f64 - expected).abs() < 1e-4,
        "{actual} is not close to {expected}"
    );
}
