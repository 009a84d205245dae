//! Fixed-capacity seat map with first-fit allocation.

use crate::domain::{ReservationError, SeatNumber};

/// Largest seat count a flight may have; every seat number fits in a `u32`.
pub const MAX_SEATS: usize = u32::MAX as usize;

/// Occupancy of every seat on one flight.
///
/// The map is sized once, at flight creation, and never grows. Allocation
/// always hands out the lowest free seat number.
#[derive(Debug, Clone)]
pub struct SeatMap {
    /// One flag per seat; `true` means occupied.
    occupied: Vec<bool>,

    /// Number of `true` entries in `occupied`.
    booked: usize,
}

impl SeatMap {
    /// Create a map with `capacity` free seats.
    ///
    /// Returns an error if `capacity` is zero or exceeds [`MAX_SEATS`].
    pub fn new(capacity: usize) -> Result<Self, ReservationError> {
        if capacity == 0 {
            return Err(ReservationError::InvalidArgument(
                "capacity must be positive".to_string(),
            ));
        }
        if capacity > MAX_SEATS {
            return Err(ReservationError::InvalidArgument(format!(
                "capacity {} exceeds the maximum of {} seats",
                capacity, MAX_SEATS
            )));
        }
        Ok(Self {
            occupied: vec![false; capacity],
            booked: 0,
        })
    }

    /// Occupy the lowest-numbered free seat.
    ///
    /// Returns `None` when every seat is taken.
    pub fn allocate(&mut self) -> Option<SeatNumber> {
        let index = self.occupied.iter().position(|taken| !taken)?;
        self.occupied[index] = true;
        self.booked += 1;
        Some(SeatNumber::from_index(index))
    }

    /// Free a previously allocated seat.
    ///
    /// Fails with `SeatOutOfRange` if the seat is not on this flight and with
    /// `InconsistentState` if the seat is already free. The map is unchanged
    /// on failure.
    pub fn release(&mut self, seat: SeatNumber) -> Result<(), ReservationError> {
        let capacity = self.capacity();
        let slot = self
            .occupied
            .get_mut(seat.index())
            .ok_or(ReservationError::SeatOutOfRange {
                seat: seat.get(),
                capacity,
            })?;

        if !*slot {
            return Err(ReservationError::InconsistentState(format!(
                "seat {} released while already free",
                seat
            )));
        }

        *slot = false;
        self.booked -= 1;
        Ok(())
    }

    /// Whether the given seat is currently occupied.
    ///
    /// Seats outside the map are reported as free.
    pub fn is_occupied(&self, seat: SeatNumber) -> bool {
        self.occupied.get(seat.index()).copied().unwrap_or(false)
    }

    /// Total number of seats.
    pub fn capacity(&self) -> usize {
        self.occupied.len()
    }

    /// Number of occupied seats.
    pub fn booked(&self) -> usize {
        self.booked
    }

    /// Number of free seats.
    pub fn available(&self) -> usize {
        self.capacity() - self.booked
    }

    /// Whether every seat is occupied.
    pub fn is_full(&self) -> bool {
        self.booked == self.capacity()
    }

    /// Count occupied slots by scanning the map.
    ///
    /// Agrees with [`booked`](Self::booked) unless the map is corrupt.
    pub(crate) fn count_occupied(&self) -> usize {
        self.occupied.iter().filter(|taken| **taken).count()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Booked count always matches the scanned bitmap and never exceeds capacity
        #[test]
        fn booked_matches_bitmap(
            capacity in 1usize..16,
            ops in prop::collection::vec((any::<bool>(), 1u32..20), 0..64),
        ) {
            let mut map = SeatMap::new(capacity).unwrap();
            for (alloc, n) in ops {
                if alloc {
                    let _ = map.allocate();
                } else {
                    let _ = map.release(SeatNumber::new(n).unwrap());
                }
                prop_assert!(map.booked() <= capacity);
                prop_assert_eq!(map.booked(), map.count_occupied());
            }
        }
    }
}
