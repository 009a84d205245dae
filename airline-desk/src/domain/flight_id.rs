//! Flight identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a scheduled flight.
///
/// Flight identifiers are unique within a catalog and never change once the
/// flight has been created. They order numerically, which is the order the
/// catalog lists flights in.
///
/// # Examples
///
/// ```
/// use airline_desk::domain::FlightId;
///
/// let id = FlightId::new(101);
/// assert_eq!(id.get(), 101);
/// assert!(FlightId::new(101) < FlightId::new(102));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(u32);

impl FlightId {
    /// Create a flight identifier.
    pub const fn new(id: u32) -> Self {
        FlightId(id)
    }

    /// Returns the numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for FlightId {
    fn from(id: u32) -> Self {
        FlightId(id)
    }
}

impl fmt::Debug for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightId({})", self.0)
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug() {
        let id = FlightId::new(101);
        assert_eq!(format!("{}", id), "101");
        assert_eq!(format!("{:?}", id), "FlightId(101)");
    }

    #[test]
    fn ordering_is_numeric() {
        let mut ids = vec![FlightId::new(103), FlightId::new(9), FlightId::new(101)];
        ids.sort();
        assert_eq!(ids, vec![FlightId::new(9), FlightId::new(101), FlightId::new(103)]);
    }

    #[test]
    fn serde_is_transparent() {
        let id: FlightId = serde_json::from_str("102").unwrap();
        assert_eq!(id, FlightId::new(102));
        assert_eq!(serde_json::to_string(&id).unwrap(), "102");
    }
}
