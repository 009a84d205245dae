//! Per-flight waiting list.

use std::collections::VecDeque;

/// A passenger waiting for a seat on a full flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingPassenger {
    pub name: String,
    pub age: u32,
}

/// Strict FIFO of passengers waiting for a seat.
///
/// No deduplication and no capacity bound: the same passenger may queue
/// more than once.
#[derive(Debug, Clone, Default)]
pub struct WaitQueue {
    queue: VecDeque<WaitingPassenger>,
}

impl WaitQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a passenger at the tail. Returns their 1-based position.
    pub fn enqueue(&mut self, passenger: WaitingPassenger) -> usize {
        self.queue.push_back(passenger);
        self.queue.len()
    }

    /// Remove and return the passenger at the head.
    pub fn dequeue(&mut self) -> Option<WaitingPassenger> {
        self.queue.pop_front()
    }

    /// Put a passenger back at the head, ahead of everyone else.
    pub(crate) fn requeue_front(&mut self, passenger: WaitingPassenger) {
        self.queue.push_front(passenger);
    }

    /// The passenger who would be promoted next.
    pub fn front(&self) -> Option<&WaitingPassenger> {
        self.queue.front()
    }

    /// Waiting passengers, head first.
    pub fn iter(&self) -> impl Iterator<Item = &WaitingPassenger> {
        self.queue.iter()
    }

    /// Number of waiting passengers.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
