//! Format - Formatting Utilities

use chrono::{DateTime, NaiveDate, Utc};

const KB: f64 = 1024.0;

/// Size with one decimal, as shown in table cells and totals (`1.5 MB`)
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= KB && unit < UNITS.len() - 1 {
        size /= KB;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

/// Size with up to two decimals and no trailing zeros (`1.5 GB`, `512 B`)
pub fn format_size_compact(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= KB && unit < UNITS.len() - 1 {
        value /= KB;
        unit += 1;
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Calendar date of a UTC timestamp (`2025-01-31`)
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.date_naive().format("%Y-%m-%d").to_string()
}

/// Calendar date of an RFC 3339 timestamp such as a release's `published_at`
pub fn date_of(timestamp: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(format_date(&dt.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Truncate a string to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes_use_one_decimal() {
        assert_eq!(format_size(0), "0.0 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024 * 1024), "3072.0 GB");
    }

    #[test]
    fn compact_sizes_drop_trailing_zeros() {
        assert_eq!(format_size_compact(0), "0 B");
        assert_eq!(format_size_compact(512), "512 B");
        assert_eq!(format_size_compact(1024), "1 KB");
        assert_eq!(format_size_compact(1536), "1.5 KB");
        assert_eq!(format_size_compact(1024 * 1024 * 1024 + 10 * 1024 * 1024), "1.01 GB");
        assert_eq!(format_size_compact(2 * 1024 * 1024 * 1024 * 1024), "2 TB");
    }

    #[test]
    fn release_dates() {
        assert_eq!(date_of("2025-03-14T09:26:53Z").as_deref(), Some("2025-03-14"));
        assert_eq!(date_of("2025-03-14").as_deref(), Some("2025-03-14"));
        assert_eq!(date_of("yesterday"), None);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("/var/cache/apt", 8), "/var/ca…");
    }
}
