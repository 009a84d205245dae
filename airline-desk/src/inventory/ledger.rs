//! Reservations for a single flight.
//!
//! The ledger owns the flight's seat map, its active reservations and its
//! waiting list, and keeps the three consistent across booking, cancellation
//! and waitlist promotion.

use std::collections::VecDeque;

use tracing::{error, info, warn};

use crate::domain::{FlightId, Pnr, PnrCounter, ReservationError, SeatNumber};
use crate::history::{CancelHistory, CancellationRecord, HistoryFull};

use super::seats::SeatMap;
use super::waitlist::{WaitQueue, WaitingPassenger};

/// Fare class given to passengers promoted from the waiting list.
pub const PROMOTION_FARE_CLASS: &str = "Economy";

/// An active booking on a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub pnr: Pnr,
    pub name: String,
    pub age: u32,
    /// Free-text fare class, as entered at booking time.
    pub fare_class: String,
    pub seat: SeatNumber,
}

/// Result of a booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// A seat was assigned and a PNR issued.
    Confirmed(Reservation),

    /// The flight was full; the passenger joined the waiting list.
    Waitlisted {
        /// 1-based position in the waiting list.
        position: usize,
    },
}

impl BookingOutcome {
    /// The confirmed reservation, if any.
    pub fn reservation(&self) -> Option<&Reservation> {
        match self {
            BookingOutcome::Confirmed(r) => Some(r),
            BookingOutcome::Waitlisted { .. } => None,
        }
    }
}

/// Result of a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    /// The reservation that was removed.
    pub cancelled: Reservation,

    /// The waiting passenger who took the freed seat, if anyone was waiting.
    pub promoted: Option<Reservation>,

    /// Set when the cancellation could not be recorded in the history.
    pub history_full: Option<HistoryFull>,
}

impl Cancellation {
    /// Whether the cancellation made it into the history.
    pub fn is_recorded(&self) -> bool {
        self.history_full.is_none()
    }
}

/// Seat map, reservation list and waiting list of one flight.
#[derive(Debug, Clone)]
pub struct ReservationLedger {
    flight: FlightId,
    seats: SeatMap,

    /// Active reservations, most recently booked first.
    reservations: VecDeque<Reservation>,

    waitlist: WaitQueue,
}

impl ReservationLedger {
    /// Create an empty ledger for a flight with `capacity` seats.
    pub fn new(flight: FlightId, capacity: usize) -> Result<Self, ReservationError> {
        Ok(Self {
            flight,
            seats: SeatMap::new(capacity)?,
            reservations: VecDeque::new(),
            waitlist: WaitQueue::new(),
        })
    }

    /// Book a seat, or waitlist the passenger if the flight is full.
    ///
    /// Waitlisted passengers keep only their name and age; the requested
    /// fare class is dropped.
    pub fn book(
        &mut self,
        pnrs: &mut PnrCounter,
        name: impl Into<String>,
        age: u32,
        fare_class: impl Into<String>,
    ) -> BookingOutcome {
        let name = name.into();
        match self.seats.allocate() {
            Some(seat) => {
                let reservation = self.confirm(pnrs, seat, name, age, fare_class.into());
                BookingOutcome::Confirmed(reservation)
            }
            None => {
                let position = self.waitlist.enqueue(WaitingPassenger {
                    name: name.clone(),
                    age,
                });
                info!(
                    flight = %self.flight,
                    passenger = %name,
                    position,
                    "Flight full, passenger waitlisted"
                );
                BookingOutcome::Waitlisted { position }
            }
        }
    }

    /// Cancel the reservation with the given PNR.
    ///
    /// Frees its seat, records the cancellation in `history` and, if anyone
    /// is waiting, books the head of the waiting list into the freed seat
    /// with [`PROMOTION_FARE_CLASS`].
    ///
    /// Only this flight's reservations are searched. An unknown PNR leaves
    /// every structure untouched.
    pub fn cancel(
        &mut self,
        pnr: Pnr,
        pnrs: &mut PnrCounter,
        history: &mut CancelHistory,
    ) -> Result<Cancellation, ReservationError> {
        let position = self
            .reservations
            .iter()
            .position(|r| r.pnr == pnr)
            .ok_or(ReservationError::PnrNotFound {
                flight: self.flight,
                pnr,
            })?;

        // Release before unlinking so a corrupt seat map leaves the list intact
        if let Err(e) = self.seats.release(self.reservations[position].seat) {
            error!(flight = %self.flight, %pnr, error = %e, "Seat release failed");
            return Err(e);
        }

        let cancelled = self.reservations.remove(position).ok_or_else(|| {
            ReservationError::InconsistentState(format!("reservation {} vanished", pnr))
        })?;

        info!(
            flight = %self.flight,
            %pnr,
            passenger = %cancelled.name,
            seat = %cancelled.seat,
            "Reservation cancelled"
        );

        let history_full = history
            .push(CancellationRecord {
                pnr: cancelled.pnr,
                name: cancelled.name.clone(),
            })
            .err();
        if let Some(full) = &history_full {
            warn!(%pnr, capacity = full.capacity, "Cancellation not recorded, history full");
        }

        let promoted = self.promote(pnrs);

        Ok(Cancellation {
            cancelled,
            promoted,
            history_full,
        })
    }

    /// Move the head of the waiting list into a free seat.
    ///
    /// With no free seat the passenger stays at the head of the queue and
    /// nothing is promoted; the cancellation that freed the seat has already
    /// been committed, so this is logged rather than returned.
    fn promote(&mut self, pnrs: &mut PnrCounter) -> Option<Reservation> {
        let passenger = self.waitlist.dequeue()?;

        let Some(seat) = self.seats.allocate() else {
            error!(
                flight = %self.flight,
                passenger = %passenger.name,
                "No free seat for waitlist promotion"
            );
            self.waitlist.requeue_front(passenger);
            return None;
        };

        let reservation = self.confirm(
            pnrs,
            seat,
            passenger.name,
            passenger.age,
            PROMOTION_FARE_CLASS.to_string(),
        );
        info!(
            flight = %self.flight,
            pnr = %reservation.pnr,
            passenger = %reservation.name,
            "Promoted from waiting list"
        );
        Some(reservation)
    }

    fn confirm(
        &mut self,
        pnrs: &mut PnrCounter,
        seat: SeatNumber,
        name: String,
        age: u32,
        fare_class: String,
    ) -> Reservation {
        let reservation = Reservation {
            pnr: pnrs.issue(),
            name,
            age,
            fare_class,
            seat,
        };
        info!(
            flight = %self.flight,
            pnr = %reservation.pnr,
            seat = %seat,
            passenger = %reservation.name,
            "Booking confirmed"
        );
        self.reservations.push_front(reservation.clone());
        reservation
    }

    /// Active reservations, most recently booked first.
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter()
    }

    /// Look up an active reservation by PNR.
    pub fn find(&self, pnr: Pnr) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.pnr == pnr)
    }

    pub fn waitlist(&self) -> &WaitQueue {
        &self.waitlist
    }

    pub fn seats(&self) -> &SeatMap {
        &self.seats
    }

    /// Number of active reservations.
    pub fn seats_booked(&self) -> usize {
        self.reservations.len()
    }

    /// Verify that seat map and reservation list agree.
    ///
    /// Booked count, scanned bitmap and reservation count must be equal, and
    /// each reservation must hold a distinct, occupied seat.
    pub fn check_invariants(&self) -> Result<(), ReservationError> {
        let listed = self.reservations.len();
        let counted = self.seats.booked();
        let scanned = self.seats.count_occupied();
        if listed != counted || counted != scanned {
            return Err(ReservationError::InconsistentState(format!(
                "flight {}: {} reservations, {} booked, {} occupied",
                self.flight, listed, counted, scanned
            )));
        }

        let mut seen = vec![false; self.seats.capacity()];
        for r in &self.reservations {
            let slot = seen.get_mut(r.seat.index()).ok_or(ReservationError::SeatOutOfRange {
                seat: r.seat.get(),
                capacity: self.seats.capacity(),
            })?;
            if *slot || !self.seats.is_occupied(r.seat) {
                return Err(ReservationError::InconsistentState(format!(
                    "flight {}: seat {} held by PNR {} is shared or free",
                    self.flight, r.seat, r.pnr
                )));
            }
            *slot = true;
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Book(u32),
        /// Cancel the n-th active reservation (modulo count), or an unknown PNR.
        Cancel(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..100).prop_map(Op::Book),
            (0usize..16).prop_map(Op::Cancel),
        ]
    }

    proptest! {
        /// Seat accounting stays consistent under any mix of bookings and cancellations
        #[test]
        fn invariants_hold(capacity in 1usize..6, ops in prop::collection::vec(op(), 0..60)) {
            let mut pnrs = PnrCounter::new();
            let mut history = CancelHistory::new(1000);
            let mut l = ReservationLedger::new(FlightId::new(1), capacity).unwrap();
            let mut last_pnr: Option<Pnr> = None;

            for op in ops {
                match op {
                    Op::Book(age) => {
                        if let BookingOutcome::Confirmed(r) = l.book(&mut pnrs, "P", age, "Economy") {
                            prop_assert!(last_pnr.is_none_or(|prev| r.pnr > prev));
                            last_pnr = Some(r.pnr);
                        }
                    }
                    Op::Cancel(n) => {
                        let target = l.reservations().nth(n).map(|r| r.pnr);
                        let waiting = l.waitlist().len();
                        match target {
                            Some(pnr) => {
                                let c = l.cancel(pnr, &mut pnrs, &mut history).unwrap();
                                prop_assert_eq!(c.promoted.is_some(), waiting > 0);
                                if let Some(p) = &c.promoted {
                                    prop_assert!(last_pnr.is_none_or(|prev| p.pnr > prev));
                                    last_pnr = Some(p.pnr);
                                }
                            }
                            None => {
                                prop_assert!(l.cancel(Pnr::new(1), &mut pnrs, &mut history).is_err());
                            }
                        }
                    }
                }
                prop_assert!(l.seats_booked() <= capacity);
                // Nobody waits while a seat is free
                prop_assert!(l.waitlist().is_empty() || l.seats().is_full());
                l.check_invariants().unwrap();
            }
        }
    }
}
