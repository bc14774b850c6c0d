//! Group naming for freshly created tracks.

use crate::error::CoreError;

/// Upper bound on how many groups a single track may be created with.
pub const MAX_GROUPS_PER_TRACK: u32 = 50;

/// Name of the `index`-th group (1-based) of a track.
pub fn group_name(index: u32, track_name: &str) -> String {
    format!("Equipe {index} - {track_name}")
}

/// Sequential names `Equipe 1 - <track>` .. `Equipe N - <track>`.
pub fn group_names(track_name: &str, count: u32) -> Vec<String> {
    (1..=count).map(|i| group_name(i, track_name)).collect()
}

/// Validate the number of groups requested for a new track.
pub fn validate_group_count(count: u32) -> Result<(), CoreError> {
    if count == 0 {
        return Err(CoreError::Validation(
            "A track needs at least one group".to_string(),
        ));
    }
    if count > MAX_GROUPS_PER_TRACK {
        return Err(CoreError::Validation(format!(
            "A track may have at most {MAX_GROUPS_PER_TRACK} groups"
        )));
    }
    Ok(())
}
