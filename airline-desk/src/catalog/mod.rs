//! Flight catalog.

mod flight;
mod index;

pub use flight::{Flight, FlightSummary, NewFlight};
pub use index::{FlightHandle, FlightIndex, InOrder};
