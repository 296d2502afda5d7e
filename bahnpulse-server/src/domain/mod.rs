//! Domain types for the journey planner.
//!
//! This module contains the core domain model types: stations, train
//! classes, legs and journeys. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod journey;
mod station;
mod time;
mod train;

pub use error::DomainError;
pub use journey::{Journey, Leg, Line, StopEvent};
pub use station::{Coordinates, EARTH_RADIUS_KM, InvalidStationId, Station, StationId};
pub use time::{TIME_PLACEHOLDER, delay_between, format_berlin_time, format_berlin_time_str};
pub use train::TrainClass;
