//! Synthetic journey data source.
//!
//! There is no live timetable behind this planner. Instead, journeys and
//! departure boards are fabricated from station coordinates:
//!
//! - Distance between stations is the great-circle distance
//! - The train class follows from distance and position in the list
//! - Durations come from class speed plus random padding
//! - Delays, platforms and cancellations are drawn at random
//!
//! All randomness comes from an explicit RNG so seeded runs reproduce.

mod config;
mod departures;
mod journeys;
mod provider;
mod sample;

pub use config::GeneratorConfig;
pub use departures::Departure;
pub use journeys::JourneyGenerator;
pub use provider::{JourneyProvider, SimulatedProvider};
