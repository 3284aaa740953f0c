//! Read-only seating traversal for persistence and presentation adapters.

use serde::{Deserialize, Serialize};

/// One row of the exported seating plan.
///
/// Indices are 1-based, matching what the adapters show to people. A free
/// seat carries `None`; the adapter decides how to render the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// 1-based table index.
    pub table: usize,
    /// 1-based seat index within the table.
    pub seat: usize,
    /// Occupant, or `None` for a free seat.
    pub occupant: Option<String>,
}
