//! Display-oriented route records.
//!
//! These are what the presentation layer consumes: times are already
//! formatted, train classes reduced to a badge, and the journey's delays
//! summarised. Field names serialize in camelCase for the browser.

use std::fmt;

use serde::Serialize;

use crate::domain::Station;

/// Train badge shown on a route card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrainType {
    #[serde(rename = "ICE")]
    Ice,
    #[serde(rename = "IC")]
    Ic,
    #[serde(rename = "RE")]
    Re,
    #[serde(rename = "RB")]
    Rb,
    #[serde(rename = "S")]
    S,
}

impl TrainType {
    pub fn as_str(self) -> &'static str {
        match self {
            TrainType::Ice => "ICE",
            TrainType::Ic => "IC",
            TrainType::Re => "RE",
            TrainType::Rb => "RB",
            TrainType::S => "S",
        }
    }

    /// Classify a product code.
    ///
    /// Matching is by case-insensitive substring, checked in a fixed
    /// order: `ice`, then `ic`/`ec`, `re`, `rb`, `s`. The first hit wins,
    /// so `"ice-re"` is an ICE. Anything unrecognised is an RE.
    ///
    /// # Examples
    ///
    /// ```
    /// use bahnpulse_server::route::TrainType;
    ///
    /// assert_eq!(TrainType::classify("ice-re"), TrainType::Ice);
    /// assert_eq!(TrainType::classify("regional"), TrainType::Re);
    /// assert_eq!(TrainType::classify("xyz"), TrainType::Re);
    /// ```
    pub fn classify(product: &str) -> TrainType {
        let product = product.to_lowercase();

        if product.contains("ice") {
            TrainType::Ice
        } else if product.contains("ic") || product.contains("ec") {
            TrainType::Ic
        } else if product.contains("re") {
            TrainType::Re
        } else if product.contains("rb") {
            TrainType::Rb
        } else if product.contains('s') {
            TrainType::S
        } else {
            TrainType::Re
        }
    }
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running status of a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Cancelled,
}

impl TrainStatus {
    /// Derive the status from a leg's cancellation flag and departure delay.
    pub fn from_leg(cancelled: bool, departure_delay: u32) -> Self {
        if cancelled {
            TrainStatus::Cancelled
        } else if departure_delay > 0 {
            TrainStatus::Delayed
        } else {
            TrainStatus::OnTime
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrainStatus::OnTime => "on-time",
            TrainStatus::Delayed => "delayed",
            TrainStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A station as shown on a route card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationView {
    pub id: String,
    pub name: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

impl StationView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            city: station.city().to_string(),
            lat: station.location.latitude,
            lng: station.location.longitude,
        }
    }
}

/// One train of a route, derived from one leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    pub id: String,
    /// Line name, e.g. "ICE 523"
    pub number: String,
    #[serde(rename = "type")]
    pub train_type: TrainType,
    pub from: StationView,
    pub to: StationView,
    /// Scheduled departure, `HH:MM` local time
    pub departure: String,
    /// Scheduled arrival, `HH:MM` local time
    pub arrival: String,
    pub platform: String,
    pub delay: u32,
    pub predicted_delay: u32,
    pub status: TrainStatus,
    pub stops: Vec<StationView>,
}

/// A candidate connection, derived from one journey.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub trains: Vec<Train>,
    /// Minutes
    pub total_duration: u32,
    /// Largest predicted delay of any train, minutes
    pub total_delay: u32,
    pub transfers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_priority_order() {
        assert_eq!(TrainType::classify("ice"), TrainType::Ice);
        assert_eq!(TrainType::classify("ice-re"), TrainType::Ice);
        assert_eq!(TrainType::classify("ic"), TrainType::Ic);
        assert_eq!(TrainType::classify("ec"), TrainType::Ic);
        assert_eq!(TrainType::classify("re"), TrainType::Re);
        assert_eq!(TrainType::classify("regional"), TrainType::Re);
        assert_eq!(TrainType::classify("rb"), TrainType::Rb);
        assert_eq!(TrainType::classify("s"), TrainType::S);
        assert_eq!(TrainType::classify("sbahn"), TrainType::S);
        assert_eq!(TrainType::classify("xyz"), TrainType::Re);
        assert_eq!(TrainType::classify(""), TrainType::Re);
    }

    #[test]
    fn classify_ignores_case() {
        assert_eq!(TrainType::classify("ICE"), TrainType::Ice);
        assert_eq!(TrainType::classify("nationalExpress"), TrainType::Re);
        assert_eq!(TrainType::classify("RB"), TrainType::Rb);
    }

    #[test]
    fn classify_substring_quirks() {
        // Tags are matched anywhere in the string, not as whole words
        assert_eq!(TrainType::classify("express"), TrainType::Re);
        assert_eq!(TrainType::classify("suburban"), TrainType::Rb);
        assert_eq!(TrainType::classify("eurocity"), TrainType::Re);
        assert_eq!(TrainType::classify("bus"), TrainType::S);
    }

    #[test]
    fn status_derivation() {
        assert_eq!(TrainStatus::from_leg(true, 0), TrainStatus::Cancelled);
        assert_eq!(TrainStatus::from_leg(true, 10), TrainStatus::Cancelled);
        assert_eq!(TrainStatus::from_leg(false, 3), TrainStatus::Delayed);
        assert_eq!(TrainStatus::from_leg(false, 0), TrainStatus::OnTime);
    }

    #[test]
    fn serialization_names() {
        assert_eq!(serde_json::to_string(&TrainType::Ice).unwrap(), "\"ICE\"");
        assert_eq!(serde_json::to_string(&TrainType::S).unwrap(), "\"S\"");
        assert_eq!(
            serde_json::to_string(&TrainStatus::OnTime).unwrap(),
            "\"on-time\""
        );
        assert_eq!(TrainStatus::Cancelled.to_string(), "cancelled");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything mentioning "ice" is an ICE, whatever else it says
        #[test]
        fn ice_always_wins(prefix in "[a-z]{0,6}", suffix in "[a-z]{0,6}") {
            let product = format!("{prefix}ice{suffix}");
            prop_assert_eq!(TrainType::classify(&product), TrainType::Ice);
        }

        /// Classification is case-insensitive
        #[test]
        fn case_insensitive(product in "[a-zA-Z]{0,12}") {
            prop_assert_eq!(
                TrainType::classify(&product),
                TrainType::classify(&product.to_uppercase())
            );
        }
    }
}
