use std::collections::HashSet;

use rand::{Rng, distr::Alphanumeric};

use crate::types::SimplifiedPlaylist;

/// Length of the generated OAuth `state` value.
pub const STATE_LENGTH: usize = 16;

/// Generates a fresh anti-CSRF `state` value for one authorization request.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Removes playlists whose ID was already seen, keeping the first occurrence
/// and the original order.
pub fn remove_duplicate_playlists(playlists: &mut Vec<SimplifiedPlaylist>) {
    let mut seen_ids = HashSet::new();
    playlists.retain(|playlist| seen_ids.insert(playlist.id.clone()));
}
