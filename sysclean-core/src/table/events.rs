//! Table events emitted to the owning view

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

/// Header indicator for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column cannot be sorted
    None,
    /// Sortable but not the active column
    Unsorted,
    Ascending,
    Descending,
}

/// Everything a table reports back to its owner
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<K> {
    /// Full selection after a mutation (owned copy, oldest first)
    SelectionChanged(Vec<K>),
    RowClicked(K),
    RowDoubleClicked(K),
    Preview(K),
    Reload,
    /// Bulk action button pressed with the current selection
    SelectedAction(Vec<K>),
    PageChanged(usize),
    PageSizeChanged(usize),
    SortChanged(SortState),
}
