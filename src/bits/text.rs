//! Six-bit text.
//!
//! AIS packs text into six bits per character. Codes `0..32` stand for
//! `'@'..='_'` and codes `32..64` for `' '..='?'`. Unused characters at the
//! end of a field are filled with `'@'` (code 0), and some transmitters pad
//! with spaces instead.
//!
//! [`six_bit_text`] returns every character of the field, padding included,
//! so that a record holds exactly what was transmitted. Use [`trim_padding`]
//! to obtain the text as displayed to a user.

use alloc::string::String;

use super::BitRange;

/// Decode each complete six-bit group of a range into its character.
///
/// Trailing padding is preserved. Bits left over after the last complete
/// group are ignored.
pub fn six_bit_text(r: BitRange<'_>) -> String {
    let mut text = String::with_capacity(r.len() / 6);
    let mut code = 0;

    for (i, bit) in r.iter().take(r.len() / 6 * 6).enumerate() {
        code = (code << 1) | bit as u8;

        if i % 6 == 5 {
            text.push(character(code));
            code = 0;
        }
    }

    text
}

/// Map a six-bit code to its character.
pub fn character(code: u8) -> char {
    let code = code & 0x3F;

    if code < 32 {
        (code + 64) as char
    } else {
        code as char
    }
}

/// Remove trailing `'@'` and space padding.
pub fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(['@', ' '])
}
