use zerocopy::TryFromBytes;

use crate::{
    bits::{BitRange, FromField},
    decode::Error,
};

macro_rules! code_enum {
    (
        $(#[$attr:meta])*
        $name:ident {
            $($(#[$variant_attr:meta])* $variant:ident = $code:literal,)*
        }
    ) => {
        $(#[$attr])*
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum $name {
            $($(#[$variant_attr])* $variant = $code,)*
            /// A code the standard does not define.
            Reserved = 0xFF,
        }

        impl $name {
            /// Map a code to its variant, or to [`Self::Reserved`] if it is
            /// not defined.
            pub fn from_code(code: u8) -> Self {
                let variant: Result<Self, _> = zerocopy::try_transmute!(code);
                variant.unwrap_or(Self::Reserved)
            }
        }

        impl FromField for $name {
            fn from_field(r: BitRange<'_>) -> Result<Self, Error> {
                Ok(Self::from_code(u8::from_field(r)?))
            }
        }
    };
}

code_enum! {
    /// Type of ship and cargo.
    ShipType {
        NotAvailable = 0,
        WingInGround = 20,
        WingInGroundHazardousA = 21,
        WingInGroundHazardousB = 22,
        WingInGroundHazardousC = 23,
        WingInGroundHazardousD = 24,
        Fishing = 30,
        Towing = 31,
        TowingLarge = 32,
        Dredging = 33,
        Diving = 34,
        Military = 35,
        Sailing = 36,
        PleasureCraft = 37,
        HighSpeedCraft = 40,
        HighSpeedCraftHazardousA = 41,
        HighSpeedCraftHazardousB = 42,
        HighSpeedCraftHazardousC = 43,
        HighSpeedCraftHazardousD = 44,
        HighSpeedCraftNoInformation = 49,
        PilotVessel = 50,
        SearchAndRescue = 51,
        Tug = 52,
        PortTender = 53,
        AntiPollution = 54,
        LawEnforcement = 55,
        LocalVessel56 = 56,
        LocalVessel57 = 57,
        MedicalTransport = 58,
        Noncombatant = 59,
        Passenger = 60,
        PassengerHazardousA = 61,
        PassengerHazardousB = 62,
        PassengerHazardousC = 63,
        PassengerHazardousD = 64,
        PassengerNoInformation = 69,
        Cargo = 70,
        CargoHazardousA = 71,
        CargoHazardousB = 72,
        CargoHazardousC = 73,
        CargoHazardousD = 74,
        CargoNoInformation = 79,
        Tanker = 80,
        TankerHazardousA = 81,
        TankerHazardousB = 82,
        TankerHazardousC = 83,
        TankerHazardousD = 84,
        TankerNoInformation = 89,
        Other = 90,
        OtherHazardousA = 91,
        OtherHazardousB = 92,
        OtherHazardousC = 93,
        OtherHazardousD = 94,
        OtherNoInformation = 99,
    }
}

code_enum! {
    /// Type of electronic position-fixing device.
    PositionFixingDevice {
        Undefined = 0,
        Gps = 1,
        Glonass = 2,
        CombinedGpsGlonass = 3,
        LoranC = 4,
        Chayka = 5,
        IntegratedNavigationSystem = 6,
        Surveyed = 7,
        Galileo = 8,
        InternalGnss = 15,
    }
}

code_enum! {
    /// Transmit and receive mode of a channel management command.
    TxRxMode {
        /// Transmit on A and B, receive on A and B.
        TxAbRxAb = 0,
        /// Transmit on A, receive on A and B.
        TxARxAb = 1,
        /// Transmit on B, receive on A and B.
        TxBRxAb = 2,
    }
}

code_enum! {
    NavigationStatus {
        UnderWayUsingEngine = 0,
        AtAnchor = 1,
        NotUnderCommand = 2,
        RestrictedManoeuvrability = 3,
        ConstrainedByDraught = 4,
        Moored = 5,
        Aground = 6,
        EngagedInFishing = 7,
        UnderWaySailing = 8,
        AisSartActive = 14,
        NotDefined = 15,
    }
}

code_enum! {
    ManeuverIndicator {
        NotAvailable = 0,
        NoSpecialManeuver = 1,
        SpecialManeuver = 2,
    }
}

code_enum! {
    /// Type of aid to navigation.
    AidType {
        NotSpecified = 0,
        ReferencePoint = 1,
        Racon = 2,
        FixedStructure = 3,
        LightWithoutSectors = 5,
        LightWithSectors = 6,
        LeadingLightFront = 7,
        LeadingLightRear = 8,
        BeaconCardinalNorth = 9,
        BeaconCardinalEast = 10,
        BeaconCardinalSouth = 11,
        BeaconCardinalWest = 12,
        BeaconPortHand = 13,
        BeaconStarboardHand = 14,
        BeaconPreferredChannelPortHand = 15,
        BeaconPreferredChannelStarboardHand = 16,
        BeaconIsolatedDanger = 17,
        BeaconSafeWater = 18,
        BeaconSpecialMark = 19,
        CardinalMarkNorth = 20,
        CardinalMarkEast = 21,
        CardinalMarkSouth = 22,
        CardinalMarkWest = 23,
        PortHandMark = 24,
        StarboardHandMark = 25,
        PreferredChannelPortHand = 26,
        PreferredChannelStarboardHand = 27,
        IsolatedDanger = 28,
        SafeWater = 29,
        SpecialMark = 30,
        LightVessel = 31,
    }
}

code_enum! {
    /// Stations addressed by a group assignment command.
    StationType {
        AllMobiles = 0,
        ClassA = 1,
        AllClassB = 2,
        SarAirborne = 3,
        ClassBSelfOrganised = 4,
        ClassBCarrierSense = 5,
        InlandWaterways = 6,
        RegionalUse7 = 7,
        RegionalUse8 = 8,
        RegionalUse9 = 9,
        BaseStationCoverageArea = 10,
    }
}

code_enum! {
    /// Reporting interval assigned by a group assignment command.
    ReportingInterval {
        Autonomous = 0,
        TenMinutes = 1,
        SixMinutes = 2,
        ThreeMinutes = 3,
        OneMinute = 4,
        ThirtySeconds = 5,
        FifteenSeconds = 6,
        TenSeconds = 7,
        FiveSeconds = 8,
        NextShorter = 9,
        NextLonger = 10,
        TwoSeconds = 11,
    }
}
