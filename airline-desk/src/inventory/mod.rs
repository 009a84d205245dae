//! Per-flight seat inventory.
//!
//! Each flight owns one [`ReservationLedger`], which in turn owns the
//! flight's [`SeatMap`] and [`WaitQueue`].

mod ledger;
mod seats;
mod waitlist;

pub use ledger::{BookingOutcome, Cancellation, PROMOTION_FARE_CLASS, Reservation, ReservationLedger};
pub use seats::{MAX_SEATS, SeatMap};
pub use waitlist::{WaitQueue, WaitingPassenger};
