//! The catalog of train classes the generator can schedule.

use std::fmt;

/// A class of train service, fastest first.
///
/// Each class carries the product code and display name that appear on a
/// generated [`Line`](super::Line), and the average speed used to estimate
/// journey durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainClass {
    /// InterCityExpress
    Ice,
    /// InterCity
    Ic,
    /// RegionalExpress
    RegionalExpress,
    /// RegionalBahn
    RegionalBahn,
}

impl TrainClass {
    /// Every class, fastest first.
    pub const ALL: [TrainClass; 4] = [
        TrainClass::Ice,
        TrainClass::Ic,
        TrainClass::RegionalExpress,
        TrainClass::RegionalBahn,
    ];

    /// Product code as it appears on a line.
    pub fn product(self) -> &'static str {
        match self {
            TrainClass::Ice => "ice",
            TrainClass::Ic => "ic",
            TrainClass::RegionalExpress | TrainClass::RegionalBahn => "regional",
        }
    }

    /// Short display name, also used as the line name prefix.
    pub fn product_name(self) -> &'static str {
        match self {
            TrainClass::Ice => "ICE",
            TrainClass::Ic => "IC",
            TrainClass::RegionalExpress => "RE",
            TrainClass::RegionalBahn => "RB",
        }
    }

    /// Average speed in km/h.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TrainClass::Ice => 250.0,
            TrainClass::Ic => 160.0,
            TrainClass::RegionalExpress => 120.0,
            TrainClass::RegionalBahn => 100.0,
        }
    }

    /// Whether this is one of the regional classes.
    pub fn is_regional(self) -> bool {
        self.product() == "regional"
    }

    /// The slowest regional class.
    pub fn slowest_regional() -> TrainClass {
        TrainClass::RegionalBahn
    }

    /// Time in seconds to cover `distance_km` at this class's average speed.
    pub fn travel_secs(self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh() * 3600.0
    }
}

impl fmt::Display for TrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.product_name())
    }
}
