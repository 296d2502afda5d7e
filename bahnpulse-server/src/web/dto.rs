//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Station, format_berlin_time};
use crate::generator::Departure;
use crate::route::Route;

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (case-insensitive substring of the name)
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 10)
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station identifier
    pub id: String,

    /// Station name
    pub name: String,

    /// City derived from the name
    pub city: String,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            city: station.city().to_string(),
        }
    }
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// Request to search for journeys between two stations.
#[derive(Debug, Deserialize)]
pub struct JourneySearchRequest {
    /// Origin station identifier
    pub from: String,

    /// Destination station identifier
    pub to: String,
}

/// Response for journey search.
#[derive(Debug, Serialize)]
pub struct JourneySearchResponse {
    pub routes: Vec<Route>,
}

/// Request for a station's departure board.
#[derive(Debug, Deserialize)]
pub struct DepartureBoardRequest {
    /// Station identifier
    pub station: String,
}

/// A departure in board results.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    pub trip_id: String,

    /// Line name (e.g., "ICE 523")
    pub line: String,

    /// Product code (e.g., "ice", "regional")
    pub product: String,

    /// Station the train is heading for
    pub direction: String,

    /// Planned departure, HH:MM local time
    pub planned_time: String,

    /// Expected departure, HH:MM local time
    pub expected_time: String,

    /// Planned departure, RFC 3339
    pub planned_when: String,

    /// Expected departure, RFC 3339
    pub when: String,

    /// Delay in minutes
    pub delay_minutes: u32,

    pub platform: String,

    pub cancelled: bool,
}

impl DepartureResult {
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            trip_id: departure.trip_id.clone(),
            line: departure.line.name.clone(),
            product: departure.line.product.clone(),
            direction: departure.direction.clone(),
            planned_time: format_berlin_time(&departure.planned_when),
            expected_time: format_berlin_time(&departure.when),
            planned_when: departure.planned_when.to_rfc3339(),
            when: departure.when.to_rfc3339(),
            delay_minutes: departure.delay_minutes,
            platform: departure.platform.clone(),
            cancelled: departure.cancelled,
        }
    }
}

/// Response for a departure board.
#[derive(Debug, Serialize)]
pub struct DepartureBoardResponse {
    /// Board station identifier
    pub station: String,

    /// Board station name, if the station is known
    pub station_name: Option<String>,

    pub departures: Vec<DepartureResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
