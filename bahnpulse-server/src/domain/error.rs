//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from IO and HTTP errors.

use super::StationId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Journey has no legs
    #[error("journey must have at least one leg")]
    EmptyJourney,

    /// Consecutive legs don't meet at the same station
    #[error("leg arriving at {0} is followed by a leg departing from {1}")]
    LegsNotConnected(StationId, StationId),

    /// A leg arrives before it departs
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyJourney;
        assert_eq!(err.to_string(), "journey must have at least one leg");

        let err = DomainError::InvalidLeg("arrival before departure");
        assert_eq!(err.to_string(), "invalid leg: arrival before departure");

        let a = StationId::parse("8000105").unwrap();
        let b = StationId::parse("8000261").unwrap();
        let err = DomainError::LegsNotConnected(a, b);
        assert_eq!(
            err.to_string(),
            "leg arriving at 8000105 is followed by a leg departing from 8000261"
        );
    }
}
