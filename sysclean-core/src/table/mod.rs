//! Data table core: typed rows, sorting, selection and pagination

pub mod column;
pub mod events;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod table_state;

pub use column::{Align, Column, ColumnWidth, TableOptions};
pub use events::{SortDirection, SortIndicator, SortState, TableEvent};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageItem, Paginator, page_window, total_pages};
pub use record::{FieldValue, Record, compare_values, locale_compare};
pub use selection::{KeySet, Selection, TriState};
pub use table_state::DataTableState;
