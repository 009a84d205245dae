//! Human-readable rendering of reservation results.

use std::io::{self, Write};

use crate::catalog::{Flight, FlightSummary};
use crate::domain::FlightId;
use crate::history::CancellationRecord;
use crate::inventory::{BookingOutcome, Cancellation};

/// Main menu, numbered as [`MenuChoice`](super::MenuChoice) expects.
pub const MENU: &str = "\
===== AIRLINE RESERVATION DESK =====
1. View All Flights
2. Book Ticket
3. Cancel Ticket
4. View Passengers
5. Undo Last Cancel
6. Exit
";

/// One catalog line: route, departure and seats booked out of capacity.
pub fn flight_line(s: &FlightSummary<'_>) -> String {
    format!(
        "Flight {}: {} -> {} at {} | Seats: {}/{}",
        s.id, s.origin, s.destination, s.departure, s.booked, s.capacity
    )
}

/// Confirmation with PNR and seat, or the waiting-list position.
pub fn booking(
    out: &mut impl Write,
    flight: FlightId,
    outcome: &BookingOutcome,
    name: &str,
) -> io::Result<()> {
    match outcome {
        BookingOutcome::Confirmed(r) => writeln!(
            out,
            "Booked! PNR {} | Name: {} | Seat {} | Flight {}",
            r.pnr,
            r.name,
            r.seat,
            flight
        ),
        BookingOutcome::Waitlisted { position } => writeln!(
            out,
            "Flight full! Added {} to waiting list (position {})",
            name, position
        ),
    }
}

/// The cancelled PNR, a history warning if it was not recorded, and any promotion.
pub fn cancellation(out: &mut impl Write, c: &Cancellation) -> io::Result<()> {
    writeln!(out, "Cancelled: PNR {} ({})", c.cancelled.pnr, c.cancelled.name)?;
    if let Some(full) = &c.history_full {
        writeln!(out, "Warning: {}; this cancellation cannot be undone", full)?;
    }
    if let Some(p) = &c.promoted {
        writeln!(
            out,
            "Assigned seat {} to waiting passenger {} (PNR {})",
            p.seat, p.name, p.pnr
        )?;
    }
    Ok(())
}

/// Reservations newest first, followed by the waiting list if anyone is on it.
pub fn passengers(out: &mut impl Write, flight: &Flight) -> io::Result<()> {
    writeln!(
        out,
        "Passengers for Flight {} ({} -> {}):",
        flight.id(),
        flight.origin(),
        flight.destination()
    )?;
    for r in flight.ledger().reservations() {
        writeln!(
            out,
            "PNR {} | Name: {} | Seat {} | Class {}",
            r.pnr, r.name, r.seat, r.fare_class
        )?;
    }

    let waitlist = flight.ledger().waitlist();
    if !waitlist.is_empty() {
        writeln!(out, "Waiting list:")?;
        for (i, p) in waitlist.iter().enumerate() {
            writeln!(out, "  {}. {} (age {})", i + 1, p.name, p.age)?;
        }
    }
    Ok(())
}

/// The popped history record, or a note that there is nothing to undo.
pub fn undo(out: &mut impl Write, record: Option<&CancellationRecord>) -> io::Result<()> {
    match record {
        Some(r) => writeln!(out, "Undo cancellation: PNR {} ({})", r.pnr, r.name),
        None => writeln!(out, "No recent cancellations to undo."),
    }
}
