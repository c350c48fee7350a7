//! Records for AIS message types 1 to 27.
//!
//! Each record declares the bit layout of its message type (see the
//! [`FromBits`](macro@crate::FromBits) derive macro) and is decoded in one
//! step, after which it is never modified. Scaled quantities are converted
//! to floating point in their natural units: degrees for positions, knots
//! for speeds and degrees for courses.
//!
//! Records keep raw values for fields whose 'not available' marker is a
//! regular value of the field (such as a true heading of 511), and use
//! `Option` only where a field can be absent from the message altogether.

mod acknowledge;
mod aid;
mod base_station;
mod binary;
mod channel;
mod class_b;
mod command;
mod data_link;
mod interrogation;
mod position;
mod safety;
mod static_data;
mod voyage;

use crate::{FromBits, types::Mmsi};

pub use acknowledge::{Acknowledge, Acknowledgement};
pub use aid::AidToNavigationReport;
pub use base_station::{BaseStationReport, UtcDateInquiry};
pub use binary::{
    AddressedBinaryMessage, ApplicationId, BinaryBroadcastMessage, GnssBroadcastMessage,
    MultipleSlotBinaryMessage, SingleSlotBinaryMessage,
};
pub use channel::{Addressees, Area, ChannelManagement};
pub use class_b::{ClassBPositionReport, ExtendedClassBPositionReport};
pub use command::{AssignedModeCommand, GroupAssignmentCommand};
pub use data_link::{DataLinkManagement, SlotReservation};
pub use interrogation::Interrogation;
pub use position::{LongRangeBroadcast, PositionReport, SarAircraftPositionReport};
pub use safety::{AddressedSafetyMessage, SafetyBroadcastMessage};
pub use static_data::{Dimensions, StaticDataPartA, StaticDataPartB, StaticDataReport};
pub use voyage::ShipAndVoyageData;

/// Fields common to every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromBits)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Header {
    #[bits(0..6)]
    pub message_type: u8,
    /// Number of times the message has been repeated.
    #[bits(6..8)]
    pub repeat_indicator: u8,
    /// Source station.
    #[bits(8..38)]
    pub mmsi: Mmsi,
}

/// A decoded message, one variant per message type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AisMessage {
    /// Type 1.
    PositionReportScheduled(PositionReport),
    /// Type 2.
    PositionReportAssigned(PositionReport),
    /// Type 3.
    PositionReportResponse(PositionReport),
    /// Type 4.
    BaseStationReport(BaseStationReport),
    /// Type 5.
    ShipAndVoyageData(ShipAndVoyageData),
    /// Type 6.
    AddressedBinaryMessage(AddressedBinaryMessage),
    /// Type 7.
    BinaryAcknowledge(Acknowledge),
    /// Type 8.
    BinaryBroadcastMessage(BinaryBroadcastMessage),
    /// Type 9.
    SarAircraftPositionReport(SarAircraftPositionReport),
    /// Type 10.
    UtcDateInquiry(UtcDateInquiry),
    /// Type 11.
    UtcDateResponse(BaseStationReport),
    /// Type 12.
    AddressedSafetyMessage(AddressedSafetyMessage),
    /// Type 13.
    SafetyAcknowledge(Acknowledge),
    /// Type 14.
    SafetyBroadcastMessage(SafetyBroadcastMessage),
    /// Type 15.
    Interrogation(Interrogation),
    /// Type 16.
    AssignedModeCommand(AssignedModeCommand),
    /// Type 17.
    GnssBroadcastMessage(GnssBroadcastMessage),
    /// Type 18.
    ClassBPositionReport(ClassBPositionReport),
    /// Type 19.
    ExtendedClassBPositionReport(ExtendedClassBPositionReport),
    /// Type 20.
    DataLinkManagement(DataLinkManagement),
    /// Type 21.
    AidToNavigationReport(AidToNavigationReport),
    /// Type 22.
    ChannelManagement(ChannelManagement),
    /// Type 23.
    GroupAssignmentCommand(GroupAssignmentCommand),
    /// Type 24.
    StaticDataReport(StaticDataReport),
    /// Type 25.
    SingleSlotBinaryMessage(SingleSlotBinaryMessage),
    /// Type 26.
    MultipleSlotBinaryMessage(MultipleSlotBinaryMessage),
    /// Type 27.
    LongRangeBroadcast(LongRangeBroadcast),
}

impl AisMessage {
    pub fn header(&self) -> &Header {
        match self {
            Self::PositionReportScheduled(r)
            | Self::PositionReportAssigned(r)
            | Self::PositionReportResponse(r) => &r.header,
            Self::BaseStationReport(r) | Self::UtcDateResponse(r) => &r.header,
            Self::ShipAndVoyageData(r) => &r.header,
            Self::AddressedBinaryMessage(r) => &r.header,
            Self::BinaryAcknowledge(r) | Self::SafetyAcknowledge(r) => &r.header,
            Self::BinaryBroadcastMessage(r) => &r.header,
            Self::SarAircraftPositionReport(r) => &r.header,
            Self::UtcDateInquiry(r) => &r.header,
            Self::AddressedSafetyMessage(r) => &r.header,
            Self::SafetyBroadcastMessage(r) => &r.header,
            Self::Interrogation(r) => &r.header,
            Self::AssignedModeCommand(r) => &r.header,
            Self::GnssBroadcastMessage(r) => &r.header,
            Self::ClassBPositionReport(r) => &r.header,
            Self::ExtendedClassBPositionReport(r) => &r.header,
            Self::DataLinkManagement(r) => &r.header,
            Self::AidToNavigationReport(r) => &r.header,
            Self::ChannelManagement(r) => &r.header,
            Self::GroupAssignmentCommand(r) => &r.header,
            Self::StaticDataReport(r) => &r.header,
            Self::SingleSlotBinaryMessage(r) => &r.header,
            Self::MultipleSlotBinaryMessage(r) => &r.header,
            Self::LongRangeBroadcast(r) => &r.header,
        }
    }

    pub fn message_type(&self) -> u8 {
        self.header().message_type
    }

    pub fn repeat_indicator(&self) -> u8 {
        self.header().repeat_indicator
    }

    /// Source station.
    pub fn mmsi(&self) -> Mmsi {
        self.header().mmsi
    }
}
