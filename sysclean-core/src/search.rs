//! Search Filter - Client-side Row Filtering
//!
//! Keeps the last collection it was given and derives the subset whose
//! fields contain the query, case-insensitively.

use crate::table::Record;

/// Case-insensitive substring filter over a snapshot of rows
#[derive(Debug, Clone)]
pub struct SearchFilter<R: Record> {
    original: Vec<R>,
    /// Field names (dotted paths allowed); empty means every scalar field
    fields: Vec<&'static str>,
    query: String,
    visible: bool,
}

impl<R: Record> Default for SearchFilter<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Record> SearchFilter<R> {
    pub fn new(fields: Vec<&'static str>) -> Self {
        Self {
            original: Vec::new(),
            fields,
            query: String::new(),
            visible: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn original(&self) -> &[R] {
        &self.original
    }

    pub fn set_fields(&mut self, fields: Vec<&'static str>) -> Vec<R> {
        self.fields = fields;
        self.results()
    }

    /// Take a new snapshot and re-apply the current query
    pub fn set_source(&mut self, rows: Vec<R>) -> Vec<R> {
        self.original = rows;
        self.results()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Vec<R> {
        self.query = query.into();
        self.results()
    }

    /// Drop the query, returning the full snapshot
    pub fn clear(&mut self) -> Vec<R> {
        self.query.clear();
        self.original.clone()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the search box and clear its query
    pub fn hide(&mut self) -> Vec<R> {
        self.visible = false;
        self.clear()
    }

    /// Rows matching the current query, or the whole snapshot when it is blank
    pub fn results(&self) -> Vec<R> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.original.clone();
        }
        self.original
            .iter()
            .filter(|row| matches(*row, &self.fields, &needle))
            .cloned()
            .collect()
    }
}

/// Whether `row` contains the lower-cased `needle` in one of `fields`
///
/// With no field list every scalar field is scanned; nested values are skipped.
pub fn matches<R: Record>(row: &R, fields: &[&str], needle: &str) -> bool {
    let contains = |text: String| text.to_lowercase().contains(needle);
    if fields.is_empty() {
        R::FIELDS
            .iter()
            .map(|name| row.field(name))
            .filter(|value| value.is_scalar())
            .any(|value| contains(value.to_display_string()))
    } else {
        fields
            .iter()
            .any(|name| contains(row.field(name).to_display_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        name: &'static str,
        path: &'static str,
        size: u64,
        owner: Option<&'static str>,
    }

    impl Record for Entry {
        type Key = &'static str;
        const FIELDS: &'static [&'static str] = &["name", "path", "size", "owner", "meta"];

        fn key(&self) -> &'static str {
            self.path
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "name" => self.name.into(),
                "path" => self.path.into(),
                "size" => self.size.into(),
                "owner" => self.owner.into(),
                "meta" => FieldValue::Nested,
                "meta.kind" => "document".into(),
                _ => FieldValue::Missing,
            }
        }
    }

    fn rows() -> Vec<Entry> {
        vec![
            Entry { name: "Report.pdf", path: "/home/ana/Report.pdf", size: 2048, owner: Some("ana") },
            Entry { name: "notes.txt", path: "/tmp/notes.txt", size: 12, owner: None },
            Entry { name: "photo.png", path: "/home/bo/photo.png", size: 4096, owner: Some("bo") },
        ]
    }

    fn names(rows: &[Entry]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn empty_query_returns_the_original() {
        let mut filter = SearchFilter::new(vec!["path"]);
        assert_eq!(filter.set_source(rows()), rows());
        assert_eq!(filter.set_query("   "), rows());
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let mut filter = SearchFilter::new(vec!["name", "path"]);
        filter.set_source(rows());
        assert_eq!(names(&filter.set_query("  REPORT ")), vec!["Report.pdf"]);
        assert_eq!(names(&filter.set_query("/home")), vec!["Report.pdf", "photo.png"]);
    }

    #[test]
    fn no_match_then_clear_restores_everything() {
        let mut filter = SearchFilter::new(vec!["path"]);
        filter.set_source(rows());
        assert!(filter.set_query("zzz").is_empty());
        filter.set_query("home");
        assert_eq!(filter.clear(), rows());
        assert_eq!(filter.query(), "");
    }

    #[test]
    fn scan_without_fields_uses_scalars_only() {
        let mut filter = SearchFilter::new(Vec::new());
        filter.set_source(rows());
        // numbers are matched on their printed form
        assert_eq!(names(&filter.set_query("409")), vec!["photo.png"]);
        // nested values never match, and neither do nulls
        assert!(filter.set_query("object").is_empty());
        assert!(filter.set_query("null").is_empty());
    }

    #[test]
    fn explicit_fields_follow_dotted_paths_and_stringify_nulls() {
        let mut filter = SearchFilter::new(vec!["meta.kind"]);
        filter.set_source(rows());
        assert_eq!(filter.set_query("document").len(), 3);

        filter.set_fields(vec!["owner"]);
        assert_eq!(names(&filter.set_query("null")), vec!["notes.txt"]);
    }

    #[test]
    fn new_source_reapplies_the_query() {
        let mut filter = SearchFilter::new(vec!["path"]);
        filter.set_query("tmp");
        let mut next = rows();
        next.push(Entry { name: "a.log", path: "/tmp/a.log", size: 1, owner: None });
        assert_eq!(names(&filter.set_source(next)), vec!["notes.txt", "a.log"]);
    }

    #[test]
    fn hide_clears_the_query() {
        let mut filter = SearchFilter::new(vec!["path"]);
        filter.set_source(rows());
        filter.show();
        assert!(filter.is_visible());
        filter.set_query("bo");
        assert_eq!(filter.hide(), rows());
        assert!(!filter.is_visible());
        assert_eq!(filter.query(), "");
    }
}
