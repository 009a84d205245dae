//! Flight entity.

use serde::{Deserialize, Serialize};

use crate::domain::{FlightId, ReservationError};
use crate::inventory::{MAX_SEATS, ReservationLedger};

/// Parameters for creating a flight, as found in the catalog config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFlight {
    pub id: FlightId,
    pub origin: String,
    pub destination: String,
    /// Departure time, shown as-is (e.g. "08:00").
    pub departure: String,
    pub capacity: usize,
}

impl NewFlight {
    pub fn new(
        id: u32,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: impl Into<String>,
        capacity: usize,
    ) -> Self {
        Self {
            id: FlightId::new(id),
            origin: origin.into(),
            destination: destination.into(),
            departure: departure.into(),
            capacity,
        }
    }
}

/// A scheduled flight together with its reservations.
#[derive(Debug, Clone)]
pub struct Flight {
    id: FlightId,
    origin: String,
    destination: String,
    departure: String,
    ledger: ReservationLedger,
}

impl Flight {
    /// Create a flight with every seat free.
    ///
    /// Returns `InvalidArgument` if the capacity is zero or larger than
    /// [`MAX_SEATS`].
    pub fn new(spec: NewFlight) -> Result<Self, ReservationError> {
        if spec.capacity == 0 || spec.capacity > MAX_SEATS {
            return Err(ReservationError::InvalidArgument(format!(
                "flight {} must have between 1 and {} seats, got {}",
                spec.id, MAX_SEATS, spec.capacity
            )));
        }
        let ledger = ReservationLedger::new(spec.id, spec.capacity)?;
        Ok(Self {
            id: spec.id,
            origin: spec.origin,
            destination: spec.destination,
            departure: spec.departure,
            ledger,
        })
    }

    pub fn id(&self) -> FlightId {
        self.id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure(&self) -> &str {
        &self.departure
    }

    pub fn capacity(&self) -> usize {
        self.ledger.seats().capacity()
    }

    pub fn seats_booked(&self) -> usize {
        self.ledger.seats_booked()
    }

    pub fn seats_available(&self) -> usize {
        self.ledger.seats().available()
    }

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut ReservationLedger {
        &mut self.ledger
    }

    /// Catalog line for this flight.
    pub fn summary(&self) -> FlightSummary<'_> {
        FlightSummary {
            id: self.id,
            origin: &self.origin,
            destination: &self.destination,
            departure: &self.departure,
            booked: self.seats_booked(),
            capacity: self.capacity(),
        }
    }

    /// See [`ReservationLedger::check_invariants`].
    pub fn check_invariants(&self) -> Result<(), ReservationError> {
        self.ledger.check_invariants()
    }
}

/// What the catalog listing shows for a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightSummary<'a> {
    pub id: FlightId,
    pub origin: &'a str,
    pub destination: &'a str,
    pub departure: &'a str,
    pub booked: usize,
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_flight_is_empty() {
        let flight = Flight::new(NewFlight::new(101, "Mumbai", "Delhi", "08:00", 3)).unwrap();
        assert_eq!(flight.id(), FlightId::new(101));
        assert_eq!(flight.capacity(), 3);
        assert_eq!(flight.seats_booked(), 0);
        assert_eq!(flight.seats_available(), 3);
        assert!(flight.ledger().waitlist().is_empty());
        flight.check_invariants().unwrap();
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = Flight::new(NewFlight::new(101, "Mumbai", "Delhi", "08:00", 0)).unwrap_err();
        assert_eq!(
            err,
            ReservationError::InvalidArgument(
                "flight 101 must have between 1 and 4294967295 seats, got 0".to_string()
            )
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn capacity_too_large_for_seat_numbers_rejected() {
        let capacity = MAX_SEATS + 1;
        let err = Flight::new(NewFlight::new(101, "Mumbai", "Delhi", "08:00", capacity))
            .unwrap_err();
        assert!(matches!(err, ReservationError::InvalidArgument(_)));
        assert!(err.to_string().ends_with("got 4294967296"));
    }

    #[test]
    fn summary_fields() {
        let flight = Flight::new(NewFlight::new(102, "Chennai", "Hyderabad", "09:30", 4)).unwrap();
        let summary = flight.summary();
        assert_eq!(summary.id, FlightId::new(102));
        assert_eq!(summary.origin, "Chennai");
        assert_eq!(summary.destination, "Hyderabad");
        assert_eq!(summary.departure, "09:30");
        assert_eq!(summary.booked, 0);
        assert_eq!(summary.capacity, 4);
    }

    #[test]
    fn deserialize_new_flight() {
        let json = r#"{"id":103,"origin":"Pune","destination":"Bangalore","departure":"11:00","capacity":5}"#;
        let spec: NewFlight = serde_json::from_str(json).unwrap();
        assert_eq!(spec, NewFlight::new(103, "Pune", "Bangalore", "11:00", 5));
    }
}
