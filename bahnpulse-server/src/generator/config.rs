//! Tuning parameters for the journey generator.

use std::time::Duration;

use chrono::Duration as ChronoDuration;

/// Configuration parameters for synthetic journey generation.
///
/// The defaults produce the timetable shape the planner is calibrated
/// for; tests shrink the latency window to zero.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of journeys produced per search.
    pub journeys_per_search: usize,

    /// Nominal gap between consecutive departures (minutes).
    pub departure_spacing_mins: f64,

    /// Random jitter added to each departure, drawn from `[0, jitter)` (minutes).
    pub departure_jitter_mins: f64,

    /// Random padding added to each journey duration, drawn from `[0, padding)` (seconds).
    pub duration_padding_secs: f64,

    /// Above this distance only long-distance classes run (km).
    pub long_distance_km: f64,

    /// Above this distance (and up to `long_distance_km`) IC and RE alternate (km).
    pub medium_distance_km: f64,

    /// Regional journeys longer than this are split with a transfer (km).
    pub transfer_min_distance_km: f64,

    /// Fraction of the journey completed at the transfer station.
    pub transfer_split_ratio: f64,

    /// Layover between the two legs of a transfer (minutes).
    pub layover_mins: i64,

    /// Probability that a departure is late at all.
    pub delay_probability: f64,

    /// Departure delays are drawn from `[0, max)` (minutes).
    pub max_departure_delay_mins: u32,

    /// Probability that a train loses further time en route.
    pub extra_arrival_delay_probability: f64,

    /// Extra arrival delays are drawn from `[0, max)` (minutes).
    pub max_extra_arrival_delay_mins: u32,

    /// Second-leg departure delays are drawn from `[0, max)` (minutes).
    pub max_transfer_delay_mins: u32,

    /// Probability that a direct leg is cancelled.
    pub cancellation_probability: f64,

    /// Number of entries on a departure board.
    pub departures_per_board: usize,

    /// Nominal gap between departure board entries (minutes).
    pub board_spacing_mins: f64,

    /// Random jitter added to each board entry, drawn from `[0, jitter)` (minutes).
    pub board_jitter_mins: f64,

    /// Board delays are drawn from `[0, max)` (minutes).
    pub max_board_delay_mins: u32,

    /// Platforms are numbered `1..=platform_count`.
    pub platform_count: u32,

    /// Shortest simulated response time.
    pub latency_min: Duration,

    /// Longest simulated response time.
    pub latency_max: Duration,
}

impl GeneratorConfig {
    /// Default parameters with no simulated latency.
    pub fn instant() -> Self {
        Self {
            latency_min: Duration::ZERO,
            latency_max: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Returns the layover as a chrono Duration.
    pub fn layover(&self) -> ChronoDuration {
        ChronoDuration::minutes(self.layover_mins)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            journeys_per_search: 7,
            departure_spacing_mins: 45.0,
            departure_jitter_mins: 30.0,
            duration_padding_secs: 1800.0, // 30 minutes
            long_distance_km: 300.0,
            medium_distance_km: 150.0,
            transfer_min_distance_km: 400.0,
            transfer_split_ratio: 0.6,
            layover_mins: 15,
            delay_probability: 0.3,
            max_departure_delay_mins: 15,
            extra_arrival_delay_probability: 0.2,
            max_extra_arrival_delay_mins: 5,
            max_transfer_delay_mins: 5,
            cancellation_probability: 0.02,
            departures_per_board: 20,
            board_spacing_mins: 8.0,
            board_jitter_mins: 7.0,
            max_board_delay_mins: 20,
            platform_count: 12,
            latency_min: Duration::from_millis(400),
            latency_max: Duration::from_millis(1500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GeneratorConfig::default();

        assert_eq!(config.journeys_per_search, 7);
        assert_eq!(config.departure_spacing_mins, 45.0);
        assert_eq!(config.departure_jitter_mins, 30.0);
        assert_eq!(config.transfer_min_distance_km, 400.0);
        assert_eq!(config.delay_probability, 0.3);
        assert_eq!(config.cancellation_probability, 0.02);
        assert_eq!(config.latency_min, Duration::from_millis(400));
        assert_eq!(config.latency_max, Duration::from_millis(1500));
    }

    #[test]
    fn instant_has_no_latency() {
        let config = GeneratorConfig::instant();

        assert_eq!(config.latency_min, Duration::ZERO);
        assert_eq!(config.latency_max, Duration::ZERO);
        assert_eq!(config.journeys_per_search, 7);
    }

    #[test]
    fn layover_duration() {
        assert_eq!(GeneratorConfig::default().layover(), ChronoDuration::minutes(15));
    }
}
