//! Journey types.
//!
//! A `Journey` is a complete trip from origin to destination made of one or
//! more train legs. A journey with two legs involves one transfer.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::{DomainError, Station, StationId};

/// The service a leg runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Display name, e.g. "ICE 523"
    pub name: String,
    /// Product code, e.g. "ice" or "regional"
    pub product: String,
    /// Short product name, e.g. "ICE" or "RB"
    pub product_name: String,
}

/// Departure or arrival of a leg at one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopEvent {
    /// Timetabled time
    pub scheduled: DateTime<Utc>,
    /// Predicted or actual time, if known
    pub actual: Option<DateTime<Utc>>,
    /// Delay in minutes, if known
    pub delay_minutes: Option<u32>,
    /// Platform, if known
    pub platform: Option<String>,
}

impl StopEvent {
    /// Creates an event with no realtime information.
    pub fn scheduled(at: DateTime<Utc>) -> Self {
        Self {
            scheduled: at,
            actual: None,
            delay_minutes: None,
            platform: None,
        }
    }

    /// Creates an event running `delay_minutes` late.
    pub fn delayed(at: DateTime<Utc>, delay_minutes: u32) -> Self {
        Self {
            scheduled: at,
            actual: Some(at + Duration::minutes(i64::from(delay_minutes))),
            delay_minutes: Some(delay_minutes),
            platform: None,
        }
    }

    /// Sets the platform.
    pub fn at_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Delay in minutes, treating unknown as zero.
    pub fn delay_or_zero(&self) -> u32 {
        self.delay_minutes.unwrap_or(0)
    }

    /// Actual time if known, otherwise scheduled.
    pub fn expected(&self) -> DateTime<Utc> {
        self.actual.unwrap_or(self.scheduled)
    }
}

/// One uninterrupted vehicle segment of a journey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub origin: Station,
    pub destination: Station,
    pub departure: StopEvent,
    pub arrival: StopEvent,
    pub line: Line,
    pub cancelled: bool,
}

impl Leg {
    /// Constructs a leg, checking it doesn't arrive before it departs.
    pub fn new(
        origin: Station,
        destination: Station,
        departure: StopEvent,
        arrival: StopEvent,
        line: Line,
        cancelled: bool,
    ) -> Result<Self, DomainError> {
        if arrival.scheduled < departure.scheduled {
            return Err(DomainError::InvalidLeg(
                "scheduled arrival is before scheduled departure",
            ));
        }

        Ok(Self {
            origin,
            destination,
            departure,
            arrival,
            line,
            cancelled,
        })
    }

    /// Scheduled time on board.
    pub fn duration(&self) -> Duration {
        self.arrival.scheduled - self.departure.scheduled
    }
}

/// A complete journey from origin to destination.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of next)
/// - `transfers() == legs().len() - 1`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Journey {
    id: String,
    legs: Vec<Leg>,
    duration_secs: u32,
    transfers: usize,
}

impl Journey {
    /// Constructs a journey from its legs and total duration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Legs list is empty
    /// - Legs don't connect (destination != next origin)
    pub fn new(
        id: impl Into<String>,
        legs: Vec<Leg>,
        duration_secs: u32,
    ) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        for window in legs.windows(2) {
            let prev_dest = &window[0].destination.id;
            let next_origin = &window[1].origin.id;
            if prev_dest != next_origin {
                return Err(DomainError::LegsNotConnected(
                    prev_dest.clone(),
                    next_origin.clone(),
                ));
            }
        }

        let transfers = legs.len() - 1;

        Ok(Journey {
            id: id.into(),
            legs,
            duration_secs,
            transfers,
        })
    }

    /// Identifier, unique within one search.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The legs in travel order. Never empty.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Total duration in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Number of changes between trains.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// Returns the first leg.
    pub fn first_leg(&self) -> &Leg {
        // Invariant: journey has at least one leg
        &self.legs[0]
    }

    /// Returns the last leg.
    pub fn last_leg(&self) -> &Leg {
        // Invariant: journey has at least one leg
        &self.legs[self.legs.len() - 1]
    }

    /// Scheduled departure of the first leg.
    pub fn departure_time(&self) -> DateTime<Utc> {
        self.first_leg().departure.scheduled
    }

    /// Scheduled arrival of the last leg.
    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.last_leg().arrival.scheduled
    }

    /// Origin station ID.
    pub fn origin(&self) -> &StationId {
        &self.first_leg().origin.id
    }

    /// Destination station ID.
    pub fn destination(&self) -> &StationId {
        &self.last_leg().destination.id
    }

    /// Whether any leg is cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.legs.iter().any(|l| l.cancelled)
    }
}
