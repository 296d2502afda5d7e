//! Synthetic departure boards.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{Line, StationId, TrainClass};

use super::journeys::JourneyGenerator;
use super::sample;

/// One entry on a station departure board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Departure {
    /// Identifier, unique within one board
    pub trip_id: String,
    pub line: Line,
    /// Name of the station the train is heading for
    pub direction: String,
    /// Timetabled departure
    pub planned_when: DateTime<Utc>,
    /// Expected departure (planned plus delay)
    pub when: DateTime<Utc>,
    /// Delay in minutes
    pub delay_minutes: u32,
    pub platform: String,
    pub cancelled: bool,
    /// The board's station
    pub stop_id: StationId,
    pub stop_name: String,
}

impl JourneyGenerator<'_> {
    /// Generate the departure board for a station after `reference`.
    ///
    /// Returns `departures_per_board` entries sorted by expected departure,
    /// or an empty board if the station is unknown or has nowhere to go.
    pub fn departures<R: Rng + ?Sized>(
        &self,
        station_id: &str,
        reference: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Departure> {
        let Some(station) = self.catalog.get(station_id) else {
            warn!(station = station_id, "station not found");
            return Vec::new();
        };

        let destinations = self.catalog.others(&[&station.id]);
        if destinations.is_empty() {
            warn!(station = station_id, "no destinations for departure board");
            return Vec::new();
        }

        let config = self.config;
        let mut board = Vec::with_capacity(config.departures_per_board);

        for i in 0..config.departures_per_board {
            let offset_mins = i as f64 * config.board_spacing_mins
                + sample::uniform(rng, config.board_jitter_mins);
            let planned_when = reference + sample::minutes(offset_mins);

            let class = TrainClass::ALL[rng.gen_range(0..TrainClass::ALL.len())];
            let delay_minutes = if sample::chance(rng, config.delay_probability) {
                sample::below(rng, config.max_board_delay_mins)
            } else {
                0
            };

            let direction = destinations
                .choose(rng)
                .map(|s| s.name.clone())
                .unwrap_or_default();

            board.push(Departure {
                trip_id: format!("trip-{i}-{}", station.id),
                line: sample::line(rng, class),
                direction,
                planned_when,
                when: planned_when + Duration::minutes(i64::from(delay_minutes)),
                delay_minutes,
                platform: sample::platform(rng, config.platform_count),
                cancelled: sample::chance(rng, config.cancellation_probability),
                stop_id: station.id.clone(),
                stop_name: station.name.clone(),
            });
        }

        board.sort_by_key(|d| d.when);

        info!(station = station_id, count = board.len(), "generated departures");
        board
    }
}
