//! Domain types for the reservation desk.
//!
//! Small value types shared by every layer, plus the error taxonomy the
//! reservation operations report.

mod error;
mod flight_id;
mod pnr;
mod seat;

pub use error::ReservationError;
pub use flight_id::FlightId;
pub use pnr::{Pnr, PnrCounter};
pub use seat::{InvalidSeatNumber, SeatNumber};
