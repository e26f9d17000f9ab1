//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar width in pixels
pub const SIDEBAR_WIDTH: f32 = 208.0;

/// Collapsed (icon only) sidebar width in pixels
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

/// Data table row and header heights
pub const TABLE_ROW_HEIGHT: f32 = 36.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;

/// Width of the checkbox and preview columns
pub const TABLE_CONTROL_WIDTH: f32 = 44.0;

/// File preview panel width
pub const PREVIEW_PANEL_WIDTH: f32 = 420.0;

/// Longest text preview rendered, in characters
pub const PREVIEW_MAX_CHARS: usize = 20_000;

/// Modal dialog width constraints
pub const MODAL_MIN_WIDTH: f32 = 360.0;
pub const MODAL_MAX_WIDTH: f32 = 520.0;
