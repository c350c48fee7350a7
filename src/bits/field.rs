use alloc::string::String;

use crate::decode::Error;

use super::{BitRange, text::six_bit_text, time::Eta};

/// Convert a range of bits into a field value.
///
/// Implementations check that the range fits the type, so a layout
/// declaring a 9-bit field as `u8` fails rather than truncating. The
/// [`FromBits`](macro@crate::FromBits) derive macro calls this trait for
/// every `bits` attribute.
pub trait FromField: Sized {
    /// Convert the bits of a range.
    fn from_field(r: BitRange<'_>) -> Result<Self, Error>;
}

macro_rules! from_field_integer {
    ($t:ident, $read:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        impl FromField for $t {
            fn from_field(r: BitRange<'_>) -> Result<Self, Error> {
                r.fit($t::BITS)?;
                Ok(r.$read()? as $t)
            }
        }
    };
}

from_field_integer!(u8, unsigned, /** Big-endian unsigned. */);
from_field_integer!(u16, unsigned, /** Big-endian unsigned. */);
from_field_integer!(u32, unsigned, /** Big-endian unsigned. */);
from_field_integer!(u64, unsigned, /** Big-endian unsigned. */);

from_field_integer!(i8, signed, /** Two's complement. */);
from_field_integer!(i16, signed, /** Two's complement. */);
from_field_integer!(i32, signed, /** Two's complement. */);
from_field_integer!(i64, signed, /** Two's complement. */);

impl FromField for bool {
    fn from_field(r: BitRange<'_>) -> Result<Self, Error> {
        Ok(r.boolean()?)
    }
}

/// Six-bit text, padding included.
impl FromField for String {
    fn from_field(r: BitRange<'_>) -> Result<Self, Error> {
        Ok(six_bit_text(r))
    }
}

impl FromField for Eta {
    fn from_field(r: BitRange<'_>) -> Result<Self, Error> {
        Ok(Eta::from_range(r)?)
    }
}
