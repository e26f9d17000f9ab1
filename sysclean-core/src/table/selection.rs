//! Selection - Row Identity Set
//!
//! Selected row keys in insertion order, plus the anchor used for
//! shift-click range selection.

use std::hash::Hash;

use hashlink::LinkedHashSet;

/// Insertion-ordered set of row keys
pub type KeySet<K> = LinkedHashSet<K, ahash::RandomState>;

/// Summary shown on a "select all" checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriState {
    #[default]
    None,
    All,
    Partial,
}

impl TriState {
    /// Whether the select-all box should render as checked
    pub fn is_checked(self) -> bool {
        self == TriState::All
    }

    /// Whether the select-all box should render as indeterminate
    pub fn is_indeterminate(self) -> bool {
        self == TriState::Partial
    }
}

/// Key-based selection state
#[derive(Debug, Clone)]
pub struct Selection<K: Eq + Hash> {
    keys: KeySet<K>,
    /// Index in the visible page of the last plain click
    anchor: Option<usize>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self {
            keys: KeySet::default(),
            anchor: None,
        }
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Owned copy of the selected keys, oldest first
    pub fn snapshot(&self) -> Vec<K> {
        self.keys.iter().cloned().collect()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn set_anchor(&mut self, index: Option<usize>) {
        self.anchor = index;
    }

    /// Add or remove a single key; a key already selected keeps its position
    pub fn set(&mut self, key: K, selected: bool) {
        if selected {
            if !self.keys.contains(&key) {
                self.keys.insert(key);
            }
        } else {
            self.keys.remove(&key);
        }
    }

    /// Flip a single key, returning whether it is now selected
    pub fn toggle(&mut self, key: K) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Apply one selected/deselected decision to every key
    pub fn set_many(&mut self, keys: impl IntoIterator<Item = K>, selected: bool) {
        for key in keys {
            self.set(key, selected);
        }
    }

    /// Replace the selection with the given keys
    pub fn replace(&mut self, keys: impl IntoIterator<Item = K>) {
        self.keys.clear();
        self.set_many(keys, true);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Drop every key for which `keep` is false, returning whether anything was removed
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) -> bool {
        let stale: Vec<K> = self.keys.iter().filter(|k| !keep(*k)).cloned().collect();
        for key in &stale {
            self.keys.remove(key);
        }
        !stale.is_empty()
    }

    /// Tri-state summary against a collection of `total` rows
    pub fn summary(&self, total: usize) -> TriState {
        let selected = self.keys.len();
        if selected == 0 {
            TriState::None
        } else if selected == total {
            TriState::All
        } else {
            TriState::Partial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keeps_insertion_order() {
        let mut selection = Selection::new();
        selection.set("b", true);
        selection.set("a", true);
        selection.set("c", true);
        selection.set("a", false);
        assert_eq!(selection.snapshot(), vec!["b", "c"]);
    }

    #[test]
    fn reselecting_keeps_the_original_position() {
        let mut selection = Selection::new();
        selection.set(3, true);
        selection.set(1, true);
        selection.set_many([1, 2, 3], true);
        assert_eq!(selection.snapshot(), vec![3, 1, 2]);

        selection.replace([5, 4, 5]);
        assert_eq!(selection.snapshot(), vec![5, 4]);
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut selection = Selection::new();
        assert!(selection.toggle(1));
        assert!(!selection.toggle(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn summary_tracks_counts() {
        let mut selection = Selection::new();
        assert_eq!(selection.summary(3), TriState::None);
        selection.set_many([1, 2, 3], true);
        assert_eq!(selection.summary(3), TriState::All);
        selection.set(2, false);
        assert_eq!(selection.summary(3), TriState::Partial);
    }

    #[test]
    fn retain_reports_removals() {
        let mut selection = Selection::new();
        selection.set_many(["x", "y"], true);
        assert!(!selection.retain(|_| true));
        assert!(selection.retain(|k| *k == "x"));
        assert_eq!(selection.snapshot(), vec!["x"]);
    }
}
