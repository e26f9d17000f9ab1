//! DataTable Component
//!
//! Sortable, selectable, paginated table over [`Record`] rows. All table
//! logic lives in [`DataTableState`]; this component renders it and emits
//! the resulting [`TableEvent`]s.
//!
//! [`Record`]: sysclean_core::table::Record
//! [`DataTableState`]: sysclean_core::table::DataTableState
//! [`TableEvent`]: sysclean_core::table::TableEvent

pub mod cells;
pub mod data_table;
pub mod pagination;

pub use cells::CellRenderer;
pub use data_table::DataTable;
pub use pagination::Pagination;
