//! Station identifiers, coordinates and stations.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Longest identifier we accept. EVA numbers are 7 digits.
const MAX_ID_LEN: usize = 16;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station identifier, such as the EVA number `8000105`.
///
/// Identifiers are 1 to 16 ASCII letters or digits. This type guarantees
/// that any `StationId` value is well-formed by construction; whether it
/// resolves to a known station is up to the catalog.
///
/// # Examples
///
/// ```
/// use bahnpulse_server::domain::StationId;
///
/// let berlin = StationId::parse("8000105").unwrap();
/// assert_eq!(berlin.as_str(), "8000105");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("8000 105").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_ID_LEN {
            return Err(InvalidStationId {
                reason: "must be at most 16 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStationId {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Parse after trimming surrounding whitespace (for user input).
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationId> {
        Self::parse(s.trim())
    }

    /// Build an identifier from built-in reference data.
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(Self::parse(s).is_ok(), "bad built-in station id {s}");
        StationId(s.to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres (haversine formula).
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// A station from the reference set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub location: Coordinates,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, location: Coordinates) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }

    /// Distance to another station in kilometres.
    pub fn distance_km(&self, other: &Station) -> f64 {
        self.location.distance_km(&other.location)
    }

    /// The city part of the display name: everything before the first space.
    ///
    /// `"Berlin Hauptbahnhof"` gives `"Berlin"`.
    pub fn city(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }
}
