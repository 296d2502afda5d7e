//! Conversion from journeys to display routes.
//!
//! Conversion is pure: the same journey always gives the same route, and
//! nothing here can fail. Missing data is replaced with placeholders.

use tracing::debug;

use crate::domain::{Journey, Leg, format_berlin_time};

use super::model::{Route, StationView, Train, TrainStatus, TrainType};

/// Shown when a leg has no platform assigned.
pub const PLATFORM_PLACEHOLDER: &str = "TBA";

/// Convert a journey into a display route.
pub fn convert_journey(journey: &Journey) -> Route {
    let trains: Vec<Train> = journey
        .legs()
        .iter()
        .enumerate()
        .map(|(index, leg)| convert_leg(journey.id(), index, leg))
        .collect();

    let total_delay = trains.iter().map(|t| t.predicted_delay).max().unwrap_or(0);

    Route {
        id: journey.id().to_string(),
        trains,
        total_duration: journey.duration_secs() / 60,
        total_delay,
        transfers: journey.transfers(),
    }
}

/// Convert journeys in order, dropping any route without trains.
pub fn convert_journeys(journeys: &[Journey]) -> Vec<Route> {
    let routes: Vec<Route> = journeys
        .iter()
        .map(convert_journey)
        .filter(|route| !route.trains.is_empty())
        .collect();

    debug!(
        journeys = journeys.len(),
        routes = routes.len(),
        "converted journeys"
    );
    routes
}

/// Convert one leg into a display train.
fn convert_leg(journey_id: &str, index: usize, leg: &Leg) -> Train {
    let from = StationView::from_station(&leg.origin);
    let to = StationView::from_station(&leg.destination);
    let delay = leg.departure.delay_or_zero();

    Train {
        id: format!("{journey_id}-leg-{index}"),
        number: leg.line.name.clone(),
        train_type: TrainType::classify(&leg.line.product),
        departure: format_berlin_time(&leg.departure.scheduled),
        arrival: format_berlin_time(&leg.arrival.scheduled),
        platform: leg
            .departure
            .platform
            .clone()
            .unwrap_or_else(|| PLATFORM_PLACEHOLDER.to_string()),
        delay,
        predicted_delay: delay,
        status: TrainStatus::from_leg(leg.cancelled, delay),
        stops: vec![from.clone(), to.clone()],
        from,
        to,
    }
}
