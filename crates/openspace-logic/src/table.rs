//! A fixed-capacity ordered group of seats.

use serde::{Deserialize, Serialize};

use crate::seat::Seat;

/// A table with a fixed number of seats, set at construction.
///
/// The table owns its seats exclusively; seats are never created or
/// destroyed independently of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    seats: Vec<Seat>,
}

impl Table {
    /// Create a table with `capacity` empty seats.
    ///
    /// # Panics
    ///
    /// Panics when `capacity` is zero — a contract violation by the caller,
    /// not a recoverable runtime condition.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "table capacity must be at least 1");
        Self {
            seats: vec![Seat::new(); capacity],
        }
    }

    /// Total number of seats.
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// The seats in fill order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Whether at least one seat is free.
    pub fn has_free_spot(&self) -> bool {
        self.seats.iter().any(Seat::is_free)
    }

    /// Place `name` in the first free seat, scanning in seat-index order.
    /// Returns `false` when the table is full.
    pub fn assign_seat(&mut self, name: &str) -> bool {
        for seat in &mut self.seats {
            if seat.set_occupant(name) {
                return true;
            }
        }
        false
    }

    /// Count of free seats.
    pub fn free_capacity(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_free()).count()
    }

    /// Count of occupied seats.
    pub fn occupied_count(&self) -> usize {
        self.seats.len() - self.free_capacity()
    }

    /// Whether every seat is free.
    pub fn is_empty(&self) -> bool {
        self.seats.iter().all(Seat::is_free)
    }

    /// The names currently seated here, in seat-index order.
    pub fn occupants(&self) -> impl Iterator<Item = &str> {
        self.seats.iter().filter_map(Seat::occupant)
    }

    /// Free the seat at `index` (0-based), returning the evicted name.
    pub fn free_seat(&mut self, index: usize) -> Option<String> {
        self.seats.get_mut(index).and_then(Seat::remove_occupant)
    }

    /// Free the first seat occupied by `name`. Returns `false` when the
    /// name is not seated here.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        for seat in &mut self.seats {
            if seat.occupant() == Some(name) {
                seat.remove_occupant();
                return true;
            }
        }
        false
    }
}
