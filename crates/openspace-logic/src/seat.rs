//! A single occupancy slot at a table.

use serde::{Deserialize, Serialize};

/// One seat: free, or holding exactly one occupant.
///
/// The option encodes the occupied/occupant invariant — a seat is occupied
/// if and only if it holds a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    occupant: Option<String>,
}

impl Seat {
    /// Create a free seat.
    pub fn new() -> Self {
        Self { occupant: None }
    }

    /// Whether the seat is currently free.
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// The current occupant, if any.
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }

    /// Seat `name` here if the seat is free. No effect when already taken.
    pub fn set_occupant(&mut self, name: &str) -> bool {
        if self.occupant.is_some() {
            return false;
        }
        self.occupant = Some(name.to_owned());
        true
    }

    /// Free the seat, returning the evicted name. `None` if already free.
    pub fn remove_occupant(&mut self) -> Option<String> {
        self.occupant.take()
    }
}
