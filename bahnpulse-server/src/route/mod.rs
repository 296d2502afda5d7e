//! Display routes.
//!
//! Maps generated journeys onto the records the presentation layer renders:
//! one `Route` per journey, one `Train` per leg.

mod convert;
mod model;

pub use convert::{PLATFORM_PLACEHOLDER, convert_journey, convert_journeys};
pub use model::{Route, StationView, Train, TrainStatus, TrainType};
