//! The reservation system: catalog, PNR counter and cancellation history.
//!
//! [`ReservationSystem`] is the one piece of process-wide state. Callers
//! resolve a flight id to a [`FlightHandle`] with
//! [`find_flight`](ReservationSystem::find_flight) and pass the handle to
//! the booking operations.

use tracing::{debug, info};

use crate::catalog::{Flight, FlightHandle, FlightIndex, FlightSummary, NewFlight};
use crate::config::SystemConfig;
use crate::domain::{FlightId, Pnr, PnrCounter, ReservationError};
use crate::history::{CancelHistory, CancellationRecord};
use crate::inventory::{BookingOutcome, Cancellation, Reservation, WaitingPassenger};

/// Flight catalog plus the global PNR counter and cancellation history.
#[derive(Debug, Clone)]
pub struct ReservationSystem {
    flights: FlightIndex,
    pnrs: PnrCounter,
    history: CancelHistory,
}

impl ReservationSystem {
    /// Build a system and load the configured flights.
    ///
    /// Fails with `InvalidArgument` on a zero history capacity, a zero flight
    /// capacity or a repeated flight id.
    pub fn new(config: SystemConfig) -> Result<Self, ReservationError> {
        if config.history_capacity == 0 {
            return Err(ReservationError::InvalidArgument(
                "history capacity must be positive".to_string(),
            ));
        }

        let mut system = Self {
            flights: FlightIndex::new(),
            pnrs: PnrCounter::new(),
            history: CancelHistory::new(config.history_capacity),
        };
        for flight in config.flights {
            system.add_flight(flight)?;
        }

        info!(
            flights = system.flights.len(),
            history_capacity = config.history_capacity,
            "Reservation system ready"
        );
        Ok(system)
    }

    /// Add a flight to the catalog.
    pub fn add_flight(&mut self, spec: NewFlight) -> Result<FlightHandle, ReservationError> {
        let flight = Flight::new(spec)?;
        self.flights.insert(flight)
    }

    /// Catalog listing in ascending flight id order.
    pub fn list_flights(&self) -> impl Iterator<Item = FlightSummary<'_>> {
        self.flights.summaries()
    }

    /// Resolve a flight id.
    pub fn find_flight(&self, id: FlightId) -> Option<FlightHandle> {
        let handle = self.flights.search(id);
        debug!(flight = %id, found = handle.is_some(), "Flight lookup");
        handle
    }

    /// Borrow a flight.
    pub fn flight(&self, handle: FlightHandle) -> Result<&Flight, ReservationError> {
        self.flights.get(handle).ok_or_else(|| stale(handle))
    }

    /// Book a passenger on a flight, waitlisting them if it is full.
    pub fn book(
        &mut self,
        handle: FlightHandle,
        name: &str,
        age: u32,
        fare_class: &str,
    ) -> Result<BookingOutcome, ReservationError> {
        let flight = self.flights.get_mut(handle).ok_or_else(|| stale(handle))?;
        Ok(flight.ledger_mut().book(&mut self.pnrs, name, age, fare_class))
    }

    /// Cancel a reservation on a flight and promote the next waiting passenger.
    ///
    /// The PNR is only looked for on this flight.
    pub fn cancel(
        &mut self,
        handle: FlightHandle,
        pnr: Pnr,
    ) -> Result<Cancellation, ReservationError> {
        let flight = self.flights.get_mut(handle).ok_or_else(|| stale(handle))?;
        flight
            .ledger_mut()
            .cancel(pnr, &mut self.pnrs, &mut self.history)
    }

    /// Active reservations on a flight, most recently booked first.
    pub fn list_passengers(
        &self,
        handle: FlightHandle,
    ) -> Result<impl Iterator<Item = &Reservation>, ReservationError> {
        Ok(self.flight(handle)?.ledger().reservations())
    }

    /// Passengers waiting for a seat on a flight, next in line first.
    pub fn waitlist(
        &self,
        handle: FlightHandle,
    ) -> Result<impl Iterator<Item = &WaitingPassenger>, ReservationError> {
        Ok(self.flight(handle)?.ledger().waitlist().iter())
    }

    /// Take the most recent cancellation off the history.
    ///
    /// This only reports the record; the reservation stays cancelled.
    pub fn undo_last_cancellation(&mut self) -> Option<CancellationRecord> {
        let record = self.history.pop();
        if let Some(r) = &record {
            info!(pnr = %r.pnr, passenger = %r.name, "Cancellation popped from history");
        }
        record
    }

    /// The cancellation history.
    pub fn history(&self) -> &CancelHistory {
        &self.history
    }

    /// The PNR the next confirmed booking will receive.
    pub fn next_pnr(&self) -> Pnr {
        self.pnrs.peek()
    }

    /// Check seat accounting on every flight.
    pub fn check_invariants(&self) -> Result<(), ReservationError> {
        self.flights.inorder().try_for_each(Flight::check_invariants)
    }
}

impl Default for ReservationSystem {
    /// An empty catalog with the default history size.
    fn default() -> Self {
        Self {
            flights: FlightIndex::new(),
            pnrs: PnrCounter::new(),
            history: CancelHistory::default(),
        }
    }
}

fn stale(handle: FlightHandle) -> ReservationError {
    ReservationError::InconsistentState(format!("unknown flight handle {:?}", handle))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Book { flight: usize, age: u32 },
        Cancel { flight: usize, pick: usize },
        CancelUnknown { flight: usize },
        Undo,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0usize..3, 0u32..90).prop_map(|(flight, age)| Op::Book { flight, age }),
            2 => (0usize..3, 0usize..8).prop_map(|(flight, pick)| Op::Cancel { flight, pick }),
            1 => (0usize..3).prop_map(|flight| Op::CancelUnknown { flight }),
            1 => Just(Op::Undo),
        ]
    }

    proptest! {
        /// Seat accounting, PNR monotonicity and unknown-PNR cancellation hold system-wide
        #[test]
        fn system_invariants(
            capacities in prop::collection::vec(1usize..4, 3),
            ops in prop::collection::vec(op(), 0..80),
        ) {
            let mut config = SystemConfig::empty(5);
            for (i, cap) in capacities.iter().enumerate() {
                config = config.with_flight(NewFlight::new(i as u32 + 1, "A", "B", "T", *cap));
            }
            let mut system = ReservationSystem::new(config).unwrap();
            let handles: Vec<FlightHandle> = (1..=3)
                .map(|id| system.find_flight(FlightId::new(id)).unwrap())
                .collect();
            let mut issued: Vec<Pnr> = Vec::new();

            for op in ops {
                match op {
                    Op::Book { flight, age } => {
                        if let BookingOutcome::Confirmed(r) =
                            system.book(handles[flight], "P", age, "Economy").unwrap()
                        {
                            issued.push(r.pnr);
                        }
                    }
                    Op::Cancel { flight, pick } => {
                        let h = handles[flight];
                        let target = system.list_passengers(h).unwrap().nth(pick).map(|r| r.pnr);
                        if let Some(pnr) = target {
                            let c = system.cancel(h, pnr).unwrap();
                            if let Some(p) = c.promoted {
                                prop_assert_eq!(p.fare_class.as_str(), "Economy");
                                issued.push(p.pnr);
                            }
                        }
                    }
                    Op::CancelUnknown { flight } => {
                        let h = handles[flight];
                        let before: Vec<Reservation> =
                            system.list_passengers(h).unwrap().cloned().collect();
                        let waiting = system.waitlist(h).unwrap().count();
                        let history = system.history().len();

                        let err = system.cancel(h, Pnr::new(1)).unwrap_err();
                        prop_assert!(err.is_not_found());

                        let after: Vec<Reservation> =
                            system.list_passengers(h).unwrap().cloned().collect();
                        prop_assert_eq!(before, after);
                        prop_assert_eq!(system.waitlist(h).unwrap().count(), waiting);
                        prop_assert_eq!(system.history().len(), history);
                    }
                    Op::Undo => {
                        let booked: usize = system.list_flights().map(|s| s.booked).sum();
                        system.undo_last_cancellation();
                        let after: usize = system.list_flights().map(|s| s.booked).sum();
                        prop_assert_eq!(booked, after);
                    }
                }

                for (summary, cap) in system.list_flights().zip(&capacities) {
                    prop_assert!(summary.booked <= *cap);
                }
                system.check_invariants().unwrap();
            }

            for pair in issued.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}
