//! Pure seating logic for the OpenSpace organizer.
//!
//! This crate contains the room/table/seat data model and the greedy
//! seat-assignment algorithm, independent of any file format, terminal, or
//! transport. Functions take plain data and return results, making them
//! unit-testable and portable across the CLI and the HTTP adapter.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`seat`] | Single occupancy slot: free, or holding one name |
//! | [`table`] | Fixed-capacity ordered sequence of seats, first-fit assignment |
//! | [`openspace`] | The room: organize, lonely redistribution, post-hoc edits |
//! | [`plan`] | Read-only seating traversal for persistence/presentation adapters |
//!
//! # Example
//!
//! ```rust
//! use openspace_logic::Openspace;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut room = Openspace::new(2, 4);
//! let roster: Vec<String> = ["Alice", "Bob", "Carol"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! room.organize(&roster, &mut rng);
//!
//! assert_eq!(room.total_people_in_room(), 3);
//! if room.is_there_lonely_person() {
//!     room.eliminate_lonely_tables();
//! }
//! ```

pub mod openspace;
pub mod plan;
pub mod seat;
pub mod table;

pub use openspace::{LonelyMove, Openspace};
pub use plan::SeatAssignment;
pub use seat::Seat;
pub use table::Table;
