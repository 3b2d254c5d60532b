//! Presence admission predicate and its scene-backed implementation.
use std::collections::HashSet;

use bevy::prelude::*;

/// Answers whether a speaker currently has a visible entity in the scene.
///
/// The scheduler consults this once per enqueue; it never reaches into the
/// scene itself, which keeps the queueing core testable without a running
/// app.
pub trait PresenceSource {
    fn is_present(&self, speaker: &str) -> bool;
}

/// Display names of the avatars currently spawned, rebuilt each frame.
#[derive(Resource, Debug, Default)]
pub struct PresenceRoster {
    names: HashSet<String>,
}

impl PresenceRoster {
    /// Replaces the roster with the current avatar set.
    pub fn replace(&mut self, names: impl IntoIterator<Item = String>) {
        self.names.clear();
        self.names.extend(names);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl PresenceSource for PresenceRoster {
    fn is_present(&self, speaker: &str) -> bool {
        self.names.contains(speaker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_replace_swaps_the_whole_set() {
        let mut roster = PresenceRoster::default();
        roster.replace(["Alice".to_string(), "Bryn".to_string()]);

        assert!(roster.is_present("Alice"));
        assert!(roster.is_present("Bryn"));
        assert!(!roster.is_present("Eve"));

        roster.replace(["Cedric".to_string()]);
        assert!(!roster.is_present("Alice"));
        assert!(roster.is_present("Cedric"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn names_match_exactly() {
        let mut roster = PresenceRoster::default();
        roster.replace(["Alice".to_string()]);

        assert!(!roster.is_present("alice"));
        assert!(!roster.is_present("Alice "));
    }
}
