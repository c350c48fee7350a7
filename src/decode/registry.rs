//! Dispatch from message type codes to decoders.

use crate::{
    bits::EncodedMessage,
    messages::{
        Acknowledge, AddressedBinaryMessage, AddressedSafetyMessage, AidToNavigationReport,
        AisMessage, AssignedModeCommand, BaseStationReport, BinaryBroadcastMessage,
        ChannelManagement, ClassBPositionReport, DataLinkManagement, ExtendedClassBPositionReport,
        GnssBroadcastMessage, GroupAssignmentCommand, Interrogation, LongRangeBroadcast,
        MultipleSlotBinaryMessage, PositionReport, SafetyBroadcastMessage,
        SarAircraftPositionReport, ShipAndVoyageData, SingleSlotBinaryMessage, StaticDataReport,
        UtcDateInquiry,
    },
};

use super::{Error, Message};

/// A decoder for one message type.
pub type DecodeFn = fn(&dyn EncodedMessage) -> Result<AisMessage, Error>;

/// An immutable table from message type codes to decoders.
///
/// Tables are assembled in `const` context and never change afterwards, so
/// a single table can serve any number of threads. Most applications use
/// the standard table through [`REGISTRY`] or [`decode`].
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    decoders: [Option<DecodeFn>; 64],
}

/// The standard table, covering message types 1 to 27.
pub static REGISTRY: Registry = Registry::standard();

/// Decode a message with the standard table.
pub fn decode(m: &dyn EncodedMessage) -> Result<AisMessage, Error> {
    REGISTRY.decode(m)
}

impl Registry {
    /// A table without decoders.
    pub const fn empty() -> Self {
        Self {
            decoders: [None; 64],
        }
    }

    /// Add or replace the decoder for a type code.
    ///
    /// # Panics
    ///
    /// Panics if `code` does not fit in six bits.
    pub const fn with(mut self, code: u8, decoder: DecodeFn) -> Self {
        self.decoders[code as usize] = Some(decoder);
        self
    }

    /// The decoder for a type code, if any.
    pub fn get(&self, code: u8) -> Option<DecodeFn> {
        self.decoders.get(code as usize).copied().flatten()
    }

    /// The type codes with a decoder, in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..64u8).filter(|&code| self.get(code).is_some())
    }

    /// Decode a message with the decoder registered for its type.
    ///
    /// Fails without invoking a decoder if the message is invalid or no
    /// decoder is registered for its type.
    pub fn decode(&self, m: &dyn EncodedMessage) -> Result<AisMessage, Error> {
        if !m.is_valid() {
            Err(Error::InvalidEncodedMessage)?;
        }

        let code = m.message_type();
        let decoder = self.get(code).ok_or(Error::UnsupportedMessageType(code))?;

        decoder(m)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

macro_rules! standard_registry {
    ($($code:literal => $variant:ident($record:ty),)*) => {
        impl Registry {
            /// The table for message types 1 to 27.
            pub const fn standard() -> Self {
                let registry = Self::empty();

                $(
                    let registry = registry.with($code, {
                        fn decode(m: &dyn EncodedMessage) -> Result<AisMessage, Error> {
                            <$record as Message>::decode(m).map(AisMessage::$variant)
                        }
                        decode
                    });
                )*

                registry
            }
        }
    };
}

standard_registry! {
    1 => PositionReportScheduled(PositionReport),
    2 => PositionReportAssigned(PositionReport),
    3 => PositionReportResponse(PositionReport),
    4 => BaseStationReport(BaseStationReport),
    5 => ShipAndVoyageData(ShipAndVoyageData),
    6 => AddressedBinaryMessage(AddressedBinaryMessage),
    7 => BinaryAcknowledge(Acknowledge),
    8 => BinaryBroadcastMessage(BinaryBroadcastMessage),
    9 => SarAircraftPositionReport(SarAircraftPositionReport),
    10 => UtcDateInquiry(UtcDateInquiry),
    11 => UtcDateResponse(BaseStationReport),
    12 => AddressedSafetyMessage(AddressedSafetyMessage),
    13 => SafetyAcknowledge(Acknowledge),
    14 => SafetyBroadcastMessage(SafetyBroadcastMessage),
    15 => Interrogation(Interrogation),
    16 => AssignedModeCommand(AssignedModeCommand),
    17 => GnssBroadcastMessage(GnssBroadcastMessage),
    18 => ClassBPositionReport(ClassBPositionReport),
    19 => ExtendedClassBPositionReport(ExtendedClassBPositionReport),
    20 => DataLinkManagement(DataLinkManagement),
    21 => AidToNavigationReport(AidToNavigationReport),
    22 => ChannelManagement(ChannelManagement),
    23 => GroupAssignmentCommand(GroupAssignmentCommand),
    24 => StaticDataReport(StaticDataReport),
    25 => SingleSlotBinaryMessage(SingleSlotBinaryMessage),
    26 => MultipleSlotBinaryMessage(MultipleSlotBinaryMessage),
    27 => LongRangeBroadcast(LongRangeBroadcast),
}
