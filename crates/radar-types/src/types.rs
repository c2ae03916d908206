//! Closed catalogs for detection record fields
//!
//! Every catalog-valued field is a closed enum carrying its display label,
//! so record fields are never compared as free-form strings.

use serde::{Deserialize, Serialize};

/// Vehicle category recognized by the camera network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Suv,
    Truck,
    Motorcycle,
    Bus,
    Van,
}

impl VehicleType {
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Car,
        VehicleType::Suv,
        VehicleType::Truck,
        VehicleType::Motorcycle,
        VehicleType::Bus,
        VehicleType::Van,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Suv => "SUV",
            VehicleType::Truck => "Truck",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Bus => "Bus",
            VehicleType::Van => "Van",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Plate number layout
///
/// Brazil runs two layouts side by side: the pre-2018 three-letter
/// four-digit plates and the Mercosur `LLLNLNN` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlateFormat {
    Traditional,
    Mercosur,
}

impl PlateFormat {
    pub const ALL: [PlateFormat; 2] = [PlateFormat::Traditional, PlateFormat::Mercosur];

    pub fn label(&self) -> &'static str {
        match self {
            PlateFormat::Traditional => "Traditional",
            PlateFormat::Mercosur => "Mercosur",
        }
    }
}

impl std::fmt::Display for PlateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Plate registration category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlateType {
    Standard,
    Commercial,
    Temporary,
    Official,
    Diplomatic,
    Collector,
}

impl PlateType {
    pub const ALL: [PlateType; 6] = [
        PlateType::Standard,
        PlateType::Commercial,
        PlateType::Temporary,
        PlateType::Official,
        PlateType::Diplomatic,
        PlateType::Collector,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlateType::Standard => "Standard",
            PlateType::Commercial => "Commercial",
            PlateType::Temporary => "Temporary",
            PlateType::Official => "Official",
            PlateType::Diplomatic => "Diplomatic",
            PlateType::Collector => "Collector",
        }
    }
}

impl std::fmt::Display for PlateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Road surface condition at the camera site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadCondition {
    Dry,
    Wet,
    Flooded,
    UnderConstruction,
    Potholed,
    Good,
}

impl RoadCondition {
    pub const ALL: [RoadCondition; 6] = [
        RoadCondition::Dry,
        RoadCondition::Wet,
        RoadCondition::Flooded,
        RoadCondition::UnderConstruction,
        RoadCondition::Potholed,
        RoadCondition::Good,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoadCondition::Dry => "Dry",
            RoadCondition::Wet => "Wet",
            RoadCondition::Flooded => "Flooded",
            RoadCondition::UnderConstruction => "Under Construction",
            RoadCondition::Potholed => "Potholed",
            RoadCondition::Good => "Good Condition",
        }
    }
}

impl std::fmt::Display for RoadCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Weather at detection time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Foggy,
    PartlyCloudy,
    Clear,
    Stormy,
    Windy,
    LowVisibility,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 9] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Foggy,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Clear,
        WeatherCondition::Stormy,
        WeatherCondition::Windy,
        WeatherCondition::LowVisibility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Stormy => "Stormy",
            WeatherCondition::Windy => "Windy",
            WeatherCondition::LowVisibility => "Low Visibility",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lighting / visibility at detection time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityCondition {
    Daytime,
    Nighttime,
    Dusk,
    Dawn,
    LowVisibility,
}

impl VisibilityCondition {
    pub const ALL: [VisibilityCondition; 5] = [
        VisibilityCondition::Daytime,
        VisibilityCondition::Nighttime,
        VisibilityCondition::Dusk,
        VisibilityCondition::Dawn,
        VisibilityCondition::LowVisibility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisibilityCondition::Daytime => "Daytime",
            VisibilityCondition::Nighttime => "Nighttime",
            VisibilityCondition::Dusk => "Dusk",
            VisibilityCondition::Dawn => "Dawn",
            VisibilityCondition::LowVisibility => "Low Visibility",
        }
    }
}

impl std::fmt::Display for VisibilityCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Traffic density at the camera site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficCondition {
    Light,
    Moderate,
    Heavy,
    Congested,
    Standstill,
}

impl TrafficCondition {
    pub const ALL: [TrafficCondition; 5] = [
        TrafficCondition::Light,
        TrafficCondition::Moderate,
        TrafficCondition::Heavy,
        TrafficCondition::Congested,
        TrafficCondition::Standstill,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrafficCondition::Light => "Light",
            TrafficCondition::Moderate => "Moderate",
            TrafficCondition::Heavy => "Heavy",
            TrafficCondition::Congested => "Congested",
            TrafficCondition::Standstill => "Standstill",
        }
    }
}

impl std::fmt::Display for TrafficCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction of travel past the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Northbound,
    Southbound,
    Eastbound,
    Westbound,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Northbound,
        Direction::Southbound,
        Direction::Eastbound,
        Direction::Westbound,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Northbound => "Northbound",
            Direction::Southbound => "Southbound",
            Direction::Eastbound => "Eastbound",
            Direction::Westbound => "Westbound",
            Direction::Northeast => "Northeast",
            Direction::Northwest => "Northwest",
            Direction::Southeast => "Southeast",
            Direction::Southwest => "Southwest",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Infraction label attached to a record
///
/// `None` is the "no violation" sentinel and is distinguishable from every
/// real label. At most one label is surfaced per record; simultaneous
/// violations are resolved to a single cause by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Infraction {
    None,
    MinorSpeeding,
    ModerateSpeeding,
    SevereSpeeding,
    UnregisteredVehicle,
    MissingEquipment,
    RedLight,
    WrongWay,
    MobilePhone,
    ExclusiveLane,
    HeadlightsOff,
    IncompatibleSpeed,
}

impl Infraction {
    /// Human-readable description used in exported data
    pub fn description(&self) -> &'static str {
        match self {
            Infraction::None => "No violation",
            Infraction::MinorSpeeding => "Speeding (up to 20% over limit)",
            Infraction::ModerateSpeeding => "Speeding (20-50% over limit)",
            Infraction::SevereSpeeding => "Speeding (more than 50% over limit)",
            Infraction::UnregisteredVehicle => "Unlicensed/unregistered vehicle",
            Infraction::MissingEquipment => "Missing mandatory equipment",
            Infraction::RedLight => "Red light violation",
            Infraction::WrongWay => "Wrong-way driving",
            Infraction::MobilePhone => "Mobile phone use while driving",
            Infraction::ExclusiveLane => "Exclusive lane violation",
            Infraction::HeadlightsOff => "Headlights off on highway",
            Infraction::IncompatibleSpeed => "Speed incompatible with conditions",
        }
    }

    pub fn is_violation(&self) -> bool {
        !matches!(self, Infraction::None)
    }
}

impl std::fmt::Display for Infraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_distinct_from_labels() {
        assert!(!Infraction::None.is_violation());
        assert!(Infraction::MinorSpeeding.is_violation());
        assert_ne!(
            Infraction::None.description(),
            Infraction::IncompatibleSpeed.description()
        );
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(VehicleType::ALL.len(), 6);
        assert_eq!(RoadCondition::ALL.len(), 6);
        assert_eq!(WeatherCondition::ALL.len(), 9);
        assert_eq!(VisibilityCondition::ALL.len(), 5);
        assert_eq!(TrafficCondition::ALL.len(), 5);
        assert_eq!(Direction::ALL.len(), 8);
    }

    #[test]
    fn test_labels_are_display() {
        assert_eq!(VehicleType::Suv.to_string(), "SUV");
        assert_eq!(RoadCondition::UnderConstruction.to_string(), "Under Construction");
        assert_eq!(WeatherCondition::PartlyCloudy.to_string(), "Partly Cloudy");
    }
}
