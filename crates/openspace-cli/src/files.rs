//! Roster input and seating-plan export.
//!
//! The core treats names as opaque strings and the plan as a read-only
//! traversal; this module owns the actual file formats (CSV in and out)
//! and the JSON room configuration.

use std::io;
use std::path::{Path, PathBuf};

use openspace_logic::Openspace;
use thiserror::Error;

/// Sentinel written for a free seat in the exported plan.
pub const FREE_SENTINEL: &str = "Free";

/// Adapter-side errors. Distinct from the core's boolean refusals: these
/// are real failures of the environment, not expected outcomes.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed roster or plan file: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Load a roster: the first column of each row, trimmed, with empty rows
/// skipped. The file has no header.
pub fn load_roster(path: &Path) -> Result<Vec<String>, FileError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(field) = record.get(0) {
            let name = field.trim();
            if !name.is_empty() {
                names.push(name.to_owned());
            }
        }
    }
    Ok(names)
}

/// Write the seating plan as CSV: `Table,Seat,Occupant`, 1-based indices,
/// free seats rendered as the sentinel.
pub fn store_plan(room: &Openspace, path: &Path) -> Result<(), FileError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Table", "Seat", "Occupant"])?;
    for row in room.seating_plan() {
        writer.write_record([
            row.table.to_string(),
            row.seat.to_string(),
            row.occupant.unwrap_or_else(|| FREE_SENTINEL.to_owned()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
