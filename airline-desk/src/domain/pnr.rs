//! Passenger name record numbers.

use std::fmt;

/// A booking reference issued for every confirmed reservation.
///
/// PNRs are globally unique within a process: they come from a single
/// [`PnrCounter`] and are never reissued, even after the reservation they
/// named has been cancelled.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pnr(u64);

impl Pnr {
    /// The first PNR a fresh counter hands out.
    pub const FIRST: Pnr = Pnr(1000);

    /// Wrap a raw PNR value, e.g. one typed in by an agent.
    pub const fn new(value: u64) -> Self {
        Pnr(value)
    }

    /// Returns the numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Pnr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pnr({})", self.0)
    }
}

impl fmt::Display for Pnr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of PNRs.
///
/// Advances only when a booking is confirmed (waitlist promotions included).
/// Waitlisting and cancelling never touch it.
#[derive(Debug, Clone)]
pub struct PnrCounter {
    next: u64,
}

impl PnrCounter {
    /// Create a counter that starts at [`Pnr::FIRST`].
    pub fn new() -> Self {
        Self::starting_at(Pnr::FIRST)
    }

    /// Create a counter whose first issued PNR is `first`.
    pub fn starting_at(first: Pnr) -> Self {
        Self { next: first.0 }
    }

    /// Issue the next PNR.
    pub fn issue(&mut self) -> Pnr {
        let pnr = Pnr(self.next);
        self.next += 1;
        pnr
    }

    /// The PNR the next call to [`issue`](Self::issue) will return.
    pub fn peek(&self) -> Pnr {
        Pnr(self.next)
    }
}

impl Default for PnrCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_thousand() {
        let mut counter = PnrCounter::new();
        assert_eq!(counter.peek(), Pnr::new(1000));
        assert_eq!(counter.issue(), Pnr::new(1000));
        assert_eq!(counter.issue(), Pnr::new(1001));
        assert_eq!(counter.peek(), Pnr::new(1002));
    }

    #[test]
    fn custom_start() {
        let mut counter = PnrCounter::starting_at(Pnr::new(5));
        assert_eq!(counter.issue(), Pnr::new(5));
    }

    #[test]
    fn display() {
        assert_eq!(Pnr::new(1042).to_string(), "1042");
        assert_eq!(format!("{:?}", Pnr::new(1042)), "Pnr(1042)");
    }
}
