//! Track (eixo) entity model and DTOs.

use enrollment_core::assignment::{has_free_seat, is_track_full};
use enrollment_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `eixos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// A track with the head count of each of its groups, ordered by group id.
#[derive(Debug, Clone, FromRow)]
pub struct TrackOccupancyRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub group_totals: Vec<i64>,
}

/// A track plus how many of its groups still have a free seat.
#[derive(Debug, Clone, Serialize)]
pub struct TrackAvailability {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub group_count: i64,
    pub open_groups: i64,
    /// No groups at all, or every group at capacity.
    pub is_full: bool,
}

/// DTO for creating a new track.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub name: String,
    pub description: Option<String>,
}

impl TrackAvailability {
    pub fn from_occupancy(row: TrackOccupancyRow, capacity: i64) -> Self {
        let open_groups = row
            .group_totals
            .iter()
            .filter(|&&total| has_free_seat(total, capacity))
            .count() as i64;
        TrackAvailability {
            is_full: is_track_full(&row.group_totals, capacity),
            group_count: row.group_totals.len() as i64,
            open_groups,
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}
