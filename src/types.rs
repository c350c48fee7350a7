//! Value types held by records.
//!
//! Identifiers validate their range on construction. Enumerations map every
//! code to a variant, falling back to `Reserved` for codes the standard does
//! not define, so an unexpected code never fails a decode on its own.

mod binary;
mod enums;
mod identifier;
mod radio;

pub use binary::BinaryData;
pub use enums::{
    AidType, ManeuverIndicator, NavigationStatus, PositionFixingDevice, ReportingInterval,
    ShipType, StationType, TxRxMode,
};
pub use identifier::{IdentifierError, Imo, Mmsi};
pub use radio::{Itdma, Sotdma};
