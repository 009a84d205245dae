//! Reservation error types.
//!
//! These are the failures an operation on the reservation system can report
//! back to its caller. None of them abort the process; the caller reports
//! the failure and carries on.

use super::{FlightId, Pnr};

/// Operation-boundary errors for the reservation system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    /// No flight with this identifier exists in the catalog
    #[error("flight {0} not found")]
    FlightNotFound(FlightId),

    /// The PNR does not name an active reservation on this flight
    #[error("PNR {pnr} not found on flight {flight}")]
    PnrNotFound { flight: FlightId, pnr: Pnr },

    /// Malformed input, e.g. a duplicate flight id or zero capacity
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Seat number outside `1..=capacity`
    #[error("seat {seat} out of range 1..={capacity}")]
    SeatOutOfRange { seat: u32, capacity: usize },

    /// An internal invariant no longer holds
    #[error("inconsistent state: {0}")]
    InconsistentState(String),
}

impl ReservationError {
    /// Whether this error means the looked-up flight or PNR does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReservationError::FlightNotFound(_) | ReservationError::PnrNotFound { .. }
        )
    }
}
