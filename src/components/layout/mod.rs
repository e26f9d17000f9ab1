//! Layout Components

pub mod header;
pub mod sidebar;

pub use header::PageHeader;
