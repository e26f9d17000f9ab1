//! Domain - Pure Data Structures
//!
//! Rows and payloads exchanged with the backend. None of these depend on GPUI.

pub mod files;
pub mod release;
pub mod service;

pub use files::{CacheFile, LargeFile, LogFile, ScanSummary, TrashFile};
pub use release::Release;
pub use service::ServiceItem;
