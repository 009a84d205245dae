//! Binary search tree of flights keyed by identifier.
//!
//! Nodes live in an arena and refer to their children by index, so the tree
//! owns every flight outright and lookups hand out plain indices. The tree is
//! not rebalanced: inserting flights in sorted order degrades it to a list.

use tracing::debug;

use crate::domain::{FlightId, ReservationError};

use super::flight::{Flight, FlightSummary};

/// Non-owning reference to a flight in a [`FlightIndex`].
///
/// Handles stay valid for the life of the index, since flights are never
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightHandle(usize);

#[derive(Debug, Clone)]
struct Node {
    flight: Flight,
    left: Option<usize>,
    right: Option<usize>,
}

/// Flight catalog ordered by [`FlightId`].
#[derive(Debug, Clone, Default)]
pub struct FlightIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl FlightIndex {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a flight.
    ///
    /// Smaller identifiers go left, larger go right. An identifier that is
    /// already present is rejected with `InvalidArgument`.
    pub fn insert(&mut self, flight: Flight) -> Result<FlightHandle, ReservationError> {
        let id = flight.id();
        let new_index = self.nodes.len();

        let Some(mut current) = self.root else {
            self.push(flight);
            self.root = Some(new_index);
            debug!(flight = %id, "Inserted flight as catalog root");
            return Ok(FlightHandle(new_index));
        };

        let mut depth = 1;
        loop {
            let node = &self.nodes[current];
            let existing = node.flight.id();
            let next = if id < existing {
                node.left
            } else if id > existing {
                node.right
            } else {
                return Err(ReservationError::InvalidArgument(format!(
                    "flight {} already exists",
                    id
                )));
            };

            match next {
                Some(child) => {
                    current = child;
                    depth += 1;
                }
                None => {
                    self.push(flight);
                    let parent = &mut self.nodes[current];
                    if id < existing {
                        parent.left = Some(new_index);
                    } else {
                        parent.right = Some(new_index);
                    }
                    debug!(flight = %id, depth, "Inserted flight");
                    return Ok(FlightHandle(new_index));
                }
            }
        }
    }

    fn push(&mut self, flight: Flight) {
        self.nodes.push(Node {
            flight,
            left: None,
            right: None,
        });
    }

    /// Find a flight by identifier.
    pub fn search(&self, id: FlightId) -> Option<FlightHandle> {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.nodes[index];
            let existing = node.flight.id();
            current = if id < existing {
                node.left
            } else if id > existing {
                node.right
            } else {
                return Some(FlightHandle(index));
            };
        }
        None
    }

    /// Borrow the flight behind a handle.
    ///
    /// Returns `None` for a handle that did not come from this index.
    pub fn get(&self, handle: FlightHandle) -> Option<&Flight> {
        self.nodes.get(handle.0).map(|n| &n.flight)
    }

    /// Mutably borrow the flight behind a handle.
    pub fn get_mut(&mut self, handle: FlightHandle) -> Option<&mut Flight> {
        self.nodes.get_mut(handle.0).map(|n| &mut n.flight)
    }

    /// Flights in ascending identifier order.
    ///
    /// The traversal is lazy; call again to restart it.
    pub fn inorder(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            index: self,
            stack: Vec::new(),
        };
        iter.push_left(self.root);
        iter
    }

    /// Catalog lines in ascending identifier order.
    pub fn summaries(&self) -> impl Iterator<Item = FlightSummary<'_>> {
        self.inorder().map(Flight::summary)
    }

    /// Number of flights.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((index, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[index];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        max
    }
}

/// In-order iterator over a [`FlightIndex`].
pub struct InOrder<'a> {
    index: &'a FlightIndex,
    stack: Vec<usize>,
}

impl InOrder<'_> {
    fn push_left(&mut self, mut current: Option<usize>) {
        while let Some(i) = current {
            self.stack.push(i);
            current = self.index.nodes[i].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Flight;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let node = &self.index.nodes[i];
        self.push_left(node.right);
        Some(&node.flight)
    }
}
