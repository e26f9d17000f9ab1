//! Files - Cleanable File Inventory
//!
//! Every file row is identified by its path.

use serde::{Deserialize, Serialize};

use crate::table::{FieldValue, Record};

/// A cached file that can be cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheFile {
    pub path: String,
    /// Size in bytes
    pub size: u64,
    pub modified: String,
}

/// An item in the trash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashFile {
    pub name: String,
    /// Original location before deletion
    pub path: String,
    pub size: u64,
    pub deleted_date: String,
}

/// A system log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFile {
    pub path: String,
    pub size: u64,
    pub modified: String,
}

/// A file above the large-file threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeFile {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub modified: String,
}

/// Aggregate size and count of one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub total_size: u64,
    pub file_count: usize,
}

impl ScanSummary {
    /// Summarize a list of sizes
    pub fn of(sizes: impl IntoIterator<Item = u64>) -> Self {
        sizes.into_iter().fold(Self::default(), |acc, size| Self {
            total_size: acc.total_size + size,
            file_count: acc.file_count + 1,
        })
    }
}

/// File name component of a path, or the whole path when it has none
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or(path)
}

/// Rows that carry a path and a byte size
pub trait FileRow: Record<Key = String> {
    fn path(&self) -> &str;
    fn size(&self) -> u64;

    /// Display name used for previews
    fn display_name(&self) -> &str {
        file_name(self.path())
    }
}

impl Record for CacheFile {
    type Key = String;
    const FIELDS: &'static [&'static str] = &["path", "size", "modified"];

    fn key(&self) -> String {
        self.path.clone()
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "path" => self.path.as_str().into(),
            "size" => self.size.into(),
            "modified" => self.modified.as_str().into(),
            _ => FieldValue::Missing,
        }
    }
}

impl Record for TrashFile {
    type Key = String;
    const FIELDS: &'static [&'static str] = &["name", "path", "size", "deleted_date"];

    fn key(&self) -> String {
        self.path.clone()
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => self.name.as_str().into(),
            "path" => self.path.as_str().into(),
            "size" => self.size.into(),
            "deleted_date" => self.deleted_date.as_str().into(),
            _ => FieldValue::Missing,
        }
    }
}

impl Record for LogFile {
    type Key = String;
    const FIELDS: &'static [&'static str] = &["path", "size", "modified"];

    fn key(&self) -> String {
        self.path.clone()
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "path" => self.path.as_str().into(),
            "size" => self.size.into(),
            "modified" => self.modified.as_str().into(),
            _ => FieldValue::Missing,
        }
    }
}

impl Record for LargeFile {
    type Key = String;
    const FIELDS: &'static [&'static str] = &["name", "path", "size", "modified"];

    fn key(&self) -> String {
        self.path.clone()
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => self.name.as_str().into(),
            "path" => self.path.as_str().into(),
            "size" => self.size.into(),
            "modified" => self.modified.as_str().into(),
            _ => FieldValue::Missing,
        }
    }
}

impl FileRow for CacheFile {
    fn path(&self) -> &str {
        &self.path
    }

    fn size(&self) -> u64 {
        self.size
    }
}

impl FileRow for TrashFile {
    fn path(&self) -> &str {
        &self.path
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl FileRow for LogFile {
    fn path(&self) -> &str {
        &self.path
    }

    fn size(&self) -> u64 {
        self.size
    }
}

impl FileRow for LargeFile {
    fn path(&self) -> &str {
        &self.path
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Sum of the sizes of `rows`
pub fn total_size<R: FileRow>(rows: &[R]) -> u64 {
    rows.iter().map(FileRow::size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trash_json_uses_camel_case() {
        let json = r#"{"name":"a.txt","path":"/home/u/a.txt","size":10,"deletedDate":"2025-01-02"}"#;
        let item: TrashFile = serde_json::from_str(json).unwrap();
        assert_eq!(item.deleted_date, "2025-01-02");
        assert_eq!(item.field("deleted_date"), FieldValue::Text("2025-01-02".into()));
        assert_eq!(item.display_name(), "a.txt");
    }

    #[test]
    fn summary_json_and_fold() {
        let summary = ScanSummary::of([10, 20, 30]);
        assert_eq!(summary, ScanSummary { total_size: 60, file_count: 3 });
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"totalSize":60,"fileCount":3}"#);
    }

    #[test]
    fn names_from_paths() {
        assert_eq!(file_name("/var/log/syslog"), "syslog");
        assert_eq!(file_name("/var/log/"), "log");
        assert_eq!(file_name(r"C:\temp\x.bin"), "x.bin");
        assert_eq!(file_name("plain"), "plain");
    }

    #[test]
    fn rows_are_keyed_by_path() {
        let file = CacheFile {
            path: "/c/1".into(),
            size: 5,
            modified: "2025-01-01".into(),
        };
        assert_eq!(file.key(), "/c/1");
        assert_eq!(file.field("size"), FieldValue::Number(5.0));
        assert_eq!(file.field("name"), FieldValue::Missing);
        assert_eq!(total_size(&[file.clone(), file]), 10);
    }
}
