//! Composite Components
//!
//! Stateful components built from primitives and gpui-component widgets.

pub mod data_table;
pub mod file_preview;
pub mod modal;
pub mod search_box;
