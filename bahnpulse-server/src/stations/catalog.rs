//! Immutable station lookup table.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{Coordinates, Station, StationId};

use super::error::StationError;

/// Major German stations: (EVA number, name, latitude, longitude).
const GERMAN_STATIONS: [(&str, &str, f64, f64); 10] = [
    ("8000105", "Berlin Hauptbahnhof", 52.5251, 13.3694),
    ("8000261", "München Hauptbahnhof", 48.1402, 11.5581),
    ("8000152", "Frankfurt(Main)Hbf", 50.1070, 8.6632),
    ("8000207", "Hamburg Hbf", 53.5528, 10.0067),
    ("8000191", "Hannover Hbf", 52.3759, 9.7410),
    ("8000096", "Stuttgart Hbf", 48.7838, 9.1829),
    ("8000085", "Nürnberg Hbf", 49.4458, 11.0831),
    ("8000068", "Dresden Hbf", 51.0407, 13.7320),
    ("8000244", "Leipzig Hbf", 51.3459, 12.3821),
    ("8000080", "Köln Hbf", 50.9430, 6.9583),
];

/// A fixed set of stations keyed by identifier.
///
/// Stations keep the order they were supplied in, which is the order
/// [`search`](Self::search) and [`iter`](Self::iter) return them.
///
/// # Examples
///
/// ```
/// use bahnpulse_server::stations::StationCatalog;
///
/// let catalog = StationCatalog::germany();
/// let berlin = catalog.get("8000105").unwrap();
/// assert_eq!(berlin.name, "Berlin Hauptbahnhof");
///
/// // Unknown or malformed identifiers simply don't resolve
/// assert!(catalog.get("0000000").is_none());
/// assert!(catalog.get("not an id").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
}

impl StationCatalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(stations: Vec<Station>) -> Result<Self, StationError> {
        let mut index = HashMap::with_capacity(stations.len());

        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.id.clone(), i).is_some() {
                return Err(StationError::DuplicateId(station.id.clone()));
            }
        }

        Ok(Self { stations, index })
    }

    /// The built-in table of major German stations.
    pub fn germany() -> Self {
        let stations: Vec<Station> = GERMAN_STATIONS
            .iter()
            .map(|&(id, name, lat, lon)| {
                Station::new(StationId::from_static(id), name, Coordinates::new(lat, lon))
            })
            .collect();

        let index = stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();

        Self { stations, index }
    }

    /// Parse a catalog from a JSON array of stations.
    ///
    /// Each entry looks like
    /// `{"id": "8000105", "name": "Berlin Hbf", "location": {"latitude": 52.5, "longitude": 13.4}}`.
    pub fn from_json_str(json: &str) -> Result<Self, StationError> {
        let stations: Vec<Station> = serde_json::from_str(json)?;

        if stations.is_empty() {
            return Err(StationError::Empty);
        }

        Self::new(stations)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    /// Look up a station by identifier.
    pub fn get(&self, id: &str) -> Option<&Station> {
        self.index.get(id).map(|&i| &self.stations[i])
    }

    /// Whether the identifier resolves.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Stations whose name contains `query`, ignoring case.
    ///
    /// Returns at most `limit` stations, in catalog order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let query = query.trim().to_lowercase();

        self.stations
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }

    /// All stations except those listed.
    pub fn others(&self, excluding: &[&StationId]) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|s| !excluding.contains(&&s.id))
            .collect()
    }

    /// Iterate over all stations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the catalog has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::germany()
    }
}
