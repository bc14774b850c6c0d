//! Group (grupo) entity model and DTOs.

use enrollment_core::assignment::GroupOccupancy;
use enrollment_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `grupos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Group {
    pub id: DbId,
    pub name: String,
    pub track_id: DbId,
}

/// A group joined with its track's name, for the reassignment selector.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupWithTrack {
    pub id: DbId,
    pub name: String,
    pub track_id: DbId,
    pub track_name: String,
    pub total: i64,
}

/// Per-group counts read inside the registration transaction.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct OccupancyRow {
    pub group_id: DbId,
    pub total: i64,
    pub same_course: i64,
}

impl From<OccupancyRow> for GroupOccupancy {
    fn from(row: OccupancyRow) -> Self {
        GroupOccupancy {
            group_id: row.group_id,
            total: row.total,
            same_course: row.same_course,
        }
    }
}
