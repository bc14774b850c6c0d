//! Team assignment policy.
//!
//! Given the groups of a track with their current occupancy, picks the group
//! that receives a new student: only groups with a free seat are eligible,
//! and among those the ones with the fewest students of the newcomer's course
//! win. Ties are broken uniformly at random.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of students per group. Global, not stored per group.
pub const GROUP_CAPACITY: i64 = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Occupancy snapshot of one group, taken right before assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOccupancy {
    pub group_id: DbId,
    /// Students currently in the group.
    pub total: i64,
    /// Students in the group who share the newcomer's course.
    pub same_course: i64,
}

/// Why no group could be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    #[error("No groups are registered for this track")]
    NoGroups,

    #[error("Every group in this track has reached its capacity")]
    TrackFull,
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Choose the group that receives a new student, using `rng` for tie-breaks.
///
/// Groups at or above `capacity` are skipped. Among the rest, the groups with
/// the minimum `same_course` count form the tie set and one of them is drawn
/// uniformly.
pub fn choose_group<R: Rng + ?Sized>(
    groups: &[GroupOccupancy],
    capacity: i64,
    rng: &mut R,
) -> Result<DbId, AssignmentError> {
    if groups.is_empty() {
        return Err(AssignmentError::NoGroups);
    }

    let candidates: Vec<&GroupOccupancy> = groups.iter().filter(|g| g.total < capacity).collect();

    let min_same_course = candidates
        .iter()
        .map(|g| g.same_course)
        .min()
        .ok_or(AssignmentError::TrackFull)?;

    let ties: Vec<DbId> = candidates
        .iter()
        .filter(|g| g.same_course == min_same_course)
        .map(|g| g.group_id)
        .collect();

    ties.choose(rng).copied().ok_or(AssignmentError::TrackFull)
}

/// [`choose_group`] with the thread-local RNG and the global capacity.
pub fn assign_group(groups: &[GroupOccupancy]) -> Result<DbId, AssignmentError> {
    choose_group(groups, GROUP_CAPACITY, &mut rand::rng())
}

/// A track is full when it has no groups or every group is at capacity.
pub fn is_track_full(group_totals: &[i64], capacity: i64) -> bool {
    group_totals.iter().all(|&total| total >= capacity)
}

/// Whether a group with `total` students can take one more.
pub fn has_free_seat(total: i64, capacity: i64) -> bool {
    total < capacity
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
