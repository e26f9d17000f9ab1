//! List State - Loaded Rows, Filtered Rows and Selection
//!
//! The backing store a page keeps for one table: everything the backend
//! returned, the subset the search box lets through, and the selected keys
//! reported by the table.

use crate::table::Record;

#[derive(Debug, Clone)]
pub struct ListState<R: Record> {
    data: Vec<R>,
    filtered: Vec<R>,
    selected: Vec<R::Key>,
}

impl<R: Record> Default for ListState<R> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            filtered: Vec::new(),
            selected: Vec::new(),
        }
    }
}

impl<R: Record> ListState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn selected(&self) -> &[R::Key] {
        &self.selected
    }

    /// Whether rows have been loaded; an empty result counts as not loaded
    pub fn is_loaded(&self) -> bool {
        !self.data.is_empty()
    }

    /// Replace everything with freshly loaded rows
    ///
    /// The filtered view starts out unfiltered and selected keys that are no
    /// longer present are dropped.
    pub fn set_data(&mut self, rows: Vec<R>) {
        self.filtered = rows.clone();
        self.data = rows;
        let data = &self.data;
        self.selected
            .retain(|key| data.iter().any(|row| row.key() == *key));
    }

    pub fn set_filtered(&mut self, rows: Vec<R>) {
        self.filtered = rows;
    }

    pub fn set_selection(&mut self, keys: Vec<R::Key>) {
        self.selected = keys;
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Forget the loaded rows so the next load goes to the backend
    pub fn invalidate(&mut self) {
        self.data.clear();
        self.filtered.clear();
    }

    pub fn find(&self, key: &R::Key) -> Option<&R> {
        self.data.iter().find(|row| row.key() == *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CacheFile;

    fn file(path: &str) -> CacheFile {
        CacheFile {
            path: path.to_string(),
            size: 1,
            modified: String::new(),
        }
    }

    #[test]
    fn new_data_resets_filter_and_prunes_selection() {
        let mut list = ListState::new();
        list.set_data(vec![file("/a"), file("/b")]);
        list.set_filtered(vec![file("/a")]);
        list.set_selection(vec!["/a".to_string(), "/b".to_string()]);

        list.set_data(vec![file("/b"), file("/c")]);
        assert_eq!(list.filtered().len(), 2);
        assert_eq!(list.selected(), ["/b".to_string()]);
        assert!(list.find(&"/c".to_string()).is_some());
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let mut list = ListState::new();
        list.set_data(vec![file("/a")]);
        assert!(list.is_loaded());
        list.invalidate();
        assert!(!list.is_loaded());
        assert!(list.filtered().is_empty());
    }
}
