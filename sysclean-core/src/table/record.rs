//! Record - Typed Row Access
//!
//! Rows shown in a table implement [`Record`]: a stable identity plus named
//! field lookups used by sorting and searching.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// A single field value as seen by sort and search
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The record has no such field
    Missing,
    /// The field exists but holds no value
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Object or array valued field, never matched by the free scan
    Nested,
}

impl FieldValue {
    /// Missing and null values sort last
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Missing | FieldValue::Null)
    }

    /// Whether the value takes part in a search over all fields
    ///
    /// Nested values and nulls are skipped, absent fields never appear.
    pub fn is_scalar(&self) -> bool {
        matches!(self, FieldValue::Bool(_) | FieldValue::Number(_) | FieldValue::Text(_))
    }

    /// Text form used for substring matching and as a fallback sort key
    pub fn to_display_string(&self) -> String {
        match self {
            FieldValue::Missing => "undefined".to_string(),
            FieldValue::Null => "null".to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Nested => "[object Object]".to_string(),
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            FieldValue::Missing | FieldValue::Null => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Number(_) => 2,
            FieldValue::Text(_) => 3,
            FieldValue::Nested => 4,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// A row that can be displayed, sorted, searched and selected
pub trait Record: Clone + 'static {
    /// Selection identity (the "checkbox key")
    type Key: Clone + Eq + Hash + Debug + 'static;

    /// Every field name the record exposes, in display order
    const FIELDS: &'static [&'static str];

    /// The row's identity
    fn key(&self) -> Self::Key;

    /// Look up a field by name; dotted paths are allowed where the record supports them
    fn field(&self, name: &str) -> FieldValue;

    /// All fields, in [`Record::FIELDS`] order
    fn fields(&self) -> Vec<FieldValue> {
        Self::FIELDS.iter().map(|name| self.field(name)).collect()
    }
}

/// Print a number without a trailing `.0` for integral values
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{}", n as i128)
    } else {
        n.to_string()
    }
}

/// Case-insensitive comparison with lowercase ordered before uppercase on ties
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            return match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => ca.cmp(&cb),
            };
        }
    }
    a.len().cmp(&b.len())
}

/// Ascending comparison of two non-null field values
///
/// Numbers compare numerically, booleans put `true` first, text uses
/// [`locale_compare`]. Values of different kinds are ordered by kind so the
/// result stays a total order.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => y.cmp(x),
        (FieldValue::Text(x), FieldValue::Text(y)) => locale_compare(x, y),
        _ if a.type_rank() != b.type_rank() => a.type_rank().cmp(&b.type_rank()),
        _ => locale_compare(&a.to_display_string(), &b.to_display_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_like_integers_when_integral() {
        assert_eq!(FieldValue::Number(1024.0).to_display_string(), "1024");
        assert_eq!(FieldValue::Number(1.5).to_display_string(), "1.5");
        assert_eq!(FieldValue::Null.to_display_string(), "null");
        assert_eq!(FieldValue::Missing.to_display_string(), "undefined");
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn booleans_sort_true_first() {
        let t = FieldValue::Bool(true);
        let f = FieldValue::Bool(false);
        assert_eq!(compare_values(&t, &f), Ordering::Less);
        assert_eq!(compare_values(&f, &t), Ordering::Greater);
        assert_eq!(compare_values(&t, &t), Ordering::Equal);
    }

    #[test]
    fn numbers_compare_numerically() {
        let small = FieldValue::Number(9.0);
        let big = FieldValue::Number(10.0);
        assert_eq!(compare_values(&small, &big), Ordering::Less);
    }
}
