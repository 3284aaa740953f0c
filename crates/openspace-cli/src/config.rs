//! Room configuration loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::files::FileError;

/// How the room is built: table count and per-table seat capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub tables: usize,
    pub seats_per_table: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            tables: 6,
            seats_per_table: 4,
        }
    }
}

impl RoomConfig {
    /// Load the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FileError> {
        let raw = fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config: RoomConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Validate the configuration, returning every problem found. Both
    /// counts must be positive before a room can be built from this.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.tables == 0 {
            problems.push("table count must be at least 1".to_string());
        }
        if self.seats_per_table == 0 {
            problems.push("seats per table must be at least 1".to_string());
        }
        problems
    }

    /// Total seats the configured room will hold.
    pub fn total_seats(&self) -> usize {
        self.tables * self.seats_per_table
    }
}
