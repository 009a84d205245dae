//! Seat number type.

use std::fmt;

/// Error returned when constructing a seat number of zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat number: {reason}")]
pub struct InvalidSeatNumber {
    reason: &'static str,
}

/// A 1-based seat number on a flight.
///
/// Seat numbers are what passengers see; the seat map stores them at
/// index `seat - 1`.
///
/// # Examples
///
/// ```
/// use airline_desk::domain::SeatNumber;
///
/// let seat = SeatNumber::new(1).unwrap();
/// assert_eq!(seat.index(), 0);
/// assert!(SeatNumber::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatNumber(u32);

impl SeatNumber {
    /// Create a seat number. Zero is rejected.
    pub fn new(seat: u32) -> Result<Self, InvalidSeatNumber> {
        if seat == 0 {
            return Err(InvalidSeatNumber {
                reason: "seat numbers start at 1",
            });
        }
        Ok(SeatNumber(seat))
    }

    /// Seat number for a zero-based slot index.
    ///
    /// `index` must be below [`MAX_SEATS`](crate::inventory::MAX_SEATS).
    pub(crate) fn from_index(index: usize) -> Self {
        SeatNumber(index as u32 + 1)
    }

    /// Zero-based slot index of this seat.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Returns the numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeatNumber({})", self.0)
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
