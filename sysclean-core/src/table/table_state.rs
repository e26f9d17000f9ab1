//! DataTableState - Sort, Selection and Pagination
//!
//! Window-free state behind the data table component. Every mutation returns
//! the events it produced so the rendering layer can forward them.

use std::cmp::Ordering;

use super::column::{Column, TableOptions};
use super::events::{SortDirection, SortIndicator, SortState, TableEvent};
use super::pagination::{PageItem, Paginator};
use super::record::{Record, compare_values};
use super::selection::{Selection, TriState};

type Events<R> = Vec<TableEvent<<R as Record>::Key>>;

/// State of one data table
#[derive(Debug, Clone)]
pub struct DataTableState<R: Record> {
    columns: Vec<Column>,
    rows: Vec<R>,
    options: TableOptions,
    loading: bool,
    paginator: Paginator,
    sort: Option<SortState>,
    selection: Selection<R::Key>,
    /// Selection before the last row click, restored when it turns into a double click
    before_click: Option<(R::Key, Selection<R::Key>)>,
}

impl<R: Record> DataTableState<R> {
    /// Create an empty table
    pub fn new(columns: Vec<Column>, options: TableOptions) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            options,
            loading: false,
            paginator: Paginator::default(),
            sort: None,
            selection: Selection::new(),
            before_click: None,
        }
    }

    // ==================== Getters ====================

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total_items(&self) -> usize {
        self.rows.len()
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        self.paginator.window()
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn is_selected(&self, key: &R::Key) -> bool {
        self.selection.contains(key)
    }

    /// Owned copy of the selected keys
    pub fn selected_keys(&self) -> Vec<R::Key> {
        self.selection.snapshot()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Tri-state summary for the select-all checkbox
    pub fn selection_state(&self) -> TriState {
        self.selection.summary(self.rows.len())
    }

    pub fn anchor(&self) -> Option<usize> {
        self.selection.anchor()
    }

    // ==================== Setters ====================

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    pub fn set_options(&mut self, options: TableOptions) {
        self.options = options;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the backing collection
    ///
    /// Goes back to page 1 and drops selected keys that no longer exist.
    pub fn set_rows(&mut self, rows: Vec<R>) -> Events<R> {
        self.rows = rows;
        self.paginator.total_items = self.rows.len();
        self.paginator.current = 1;
        self.selection.set_anchor(None);
        self.before_click = None;

        let live: ahash::AHashSet<R::Key> = self.rows.iter().map(Record::key).collect();
        if self.selection.retain(|k| live.contains(k)) {
            vec![self.selection_changed()]
        } else {
            Vec::new()
        }
    }

    /// Overwrite the selection from the owner, keeping only known keys
    pub fn set_selection(&mut self, keys: impl IntoIterator<Item = R::Key>) {
        self.before_click = None;
        let live: ahash::AHashSet<R::Key> = self.rows.iter().map(Record::key).collect();
        self.selection
            .replace(keys.into_iter().filter(|k| live.contains(k)));
    }

    /// Empty the selection without emitting
    pub fn clear_selection(&mut self) {
        self.before_click = None;
        self.selection.clear();
        self.selection.set_anchor(None);
    }

    // ==================== Derived rows ====================

    /// Rows in display order; the source collection is never reordered
    pub fn sorted_rows(&self) -> Vec<&R> {
        let mut sorted: Vec<&R> = self.rows.iter().collect();
        if let Some(sort) = self.sort {
            sorted.sort_by(|a, b| compare_rows(*a, *b, sort));
        }
        sorted
    }

    /// Rows on the current page
    pub fn visible_page(&self) -> Vec<&R> {
        let range = self.paginator.range();
        let mut sorted = self.sorted_rows();
        sorted.truncate(range.end);
        sorted.drain(..range.start);
        sorted
    }

    pub fn visible_keys(&self) -> Vec<R::Key> {
        self.visible_page().into_iter().map(Record::key).collect()
    }

    // ==================== Selection ====================

    /// Select every row or clear the selection
    pub fn toggle_select_all(&mut self, checked: bool) -> Events<R> {
        self.before_click = None;
        if checked {
            let keys: Vec<R::Key> = self.rows.iter().map(Record::key).collect();
            self.selection.set_many(keys, true);
        } else {
            self.selection.clear();
        }
        vec![self.selection_changed()]
    }

    fn is_row_key(&self, key: &R::Key) -> bool {
        self.rows.iter().any(|row| row.key() == *key)
    }

    /// Checkbox on a single row; keys not in the rows are ignored
    pub fn toggle_select(&mut self, key: R::Key, checked: bool) -> Events<R> {
        if !self.is_row_key(&key) {
            return Vec::new();
        }
        self.before_click = None;
        self.selection.set(key, checked);
        vec![self.selection_changed()]
    }

    /// Row click, with shift extending from the last plain click
    ///
    /// A shift-click applies the opposite of the clicked row's current state
    /// to the whole range between the anchor and the clicked row.
    pub fn click_row(&mut self, key: R::Key, shift: bool) -> Events<R> {
        let visible = self.visible_keys();
        let current = visible.iter().position(|k| *k == key);
        if current.is_none() && !self.is_row_key(&key) {
            return Vec::new();
        }
        let was_selected = self.selection.contains(&key);
        self.before_click = Some((key.clone(), self.selection.clone()));

        match (shift, self.selection.anchor(), current) {
            (true, Some(anchor), Some(current)) => {
                let anchor = anchor.min(visible.len() - 1);
                let (start, end) = (anchor.min(current), anchor.max(current));
                self.selection
                    .set_many(visible[start..=end].iter().cloned(), !was_selected);
            }
            _ => {
                self.selection.toggle(key.clone());
                if current.is_some() {
                    self.selection.set_anchor(current);
                }
            }
        }

        vec![self.selection_changed(), TableEvent::RowClicked(key)]
    }

    fn selection_changed(&self) -> TableEvent<R::Key> {
        TableEvent::SelectionChanged(self.selection.snapshot())
    }

    // ==================== Sorting ====================

    /// Header click: flip the active column, or sort a new one ascending
    pub fn sort_by(&mut self, column_key: &str) -> Events<R> {
        let Some(column) = self.columns.iter().find(|c| c.key == column_key) else {
            return Vec::new();
        };
        if !column.sortable {
            return Vec::new();
        }

        let next = match self.sort {
            Some(sort) if sort.key == column.key => SortState {
                key: sort.key,
                direction: sort.direction.flipped(),
            },
            _ => SortState {
                key: column.key,
                direction: SortDirection::Ascending,
            },
        };
        self.sort = Some(next);
        vec![TableEvent::SortChanged(next)]
    }

    pub fn sort_indicator(&self, column: &Column) -> SortIndicator {
        if !column.sortable {
            return SortIndicator::None;
        }
        match self.sort {
            Some(sort) if sort.key == column.key => match sort.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::Unsorted,
        }
    }

    // ==================== Pagination ====================

    pub fn set_page(&mut self, page: usize) -> Events<R> {
        self.paginator
            .go_to(page)
            .map(|p| vec![TableEvent::PageChanged(p)])
            .unwrap_or_default()
    }

    pub fn next_page(&mut self) -> Events<R> {
        self.paginator
            .next()
            .map(|p| vec![TableEvent::PageChanged(p)])
            .unwrap_or_default()
    }

    pub fn previous_page(&mut self) -> Events<R> {
        self.paginator
            .previous()
            .map(|p| vec![TableEvent::PageChanged(p)])
            .unwrap_or_default()
    }

    /// Change rows per page and go back to the first page
    pub fn set_page_size(&mut self, size: usize) -> Events<R> {
        if size == 0 {
            return Vec::new();
        }
        self.paginator.page_size = size;
        self.paginator.current = 1;
        self.selection.set_anchor(None);
        vec![TableEvent::PageSizeChanged(size), TableEvent::PageChanged(1)]
    }

    // ==================== Pass-through actions ====================

    pub fn reload(&self) -> Events<R> {
        vec![TableEvent::Reload]
    }

    pub fn selected_action(&self) -> Events<R> {
        vec![TableEvent::SelectedAction(self.selection.snapshot())]
    }

    pub fn preview(&self, key: R::Key) -> Events<R> {
        vec![TableEvent::Preview(key)]
    }

    /// Second click on a row: undo the selection change of the first click
    pub fn double_click(&mut self, key: R::Key) -> Events<R> {
        let mut events = Vec::new();
        match self.before_click.take() {
            Some((clicked, before)) if clicked == key => {
                self.selection = before;
                events.push(self.selection_changed());
            }
            _ => {}
        }
        events.push(TableEvent::RowDoubleClicked(key));
        events
    }
}

/// Null-last comparison of two rows under a sort state
fn compare_rows<R: Record>(a: &R, b: &R, sort: SortState) -> Ordering {
    let a_val = a.field(sort.key);
    let b_val = b.field(sort.key);
    match (a_val.is_null(), b_val.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = compare_values(&a_val, &b_val);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::record::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: String,
        size: Option<u64>,
        pinned: bool,
    }

    impl Record for Item {
        type Key = u32;
        const FIELDS: &'static [&'static str] = &["id", "name", "size", "pinned"];

        fn key(&self) -> u32 {
            self.id
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "id" => FieldValue::Number(self.id as f64),
                "name" => self.name.clone().into(),
                "size" => self.size.into(),
                "pinned" => self.pinned.into(),
                _ => FieldValue::Missing,
            }
        }
    }

    fn item(id: u32, name: &str, size: Option<u64>) -> Item {
        Item {
            id,
            name: name.to_string(),
            size,
            pinned: id % 2 == 0,
        }
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("size", "Size").sortable().align_right(),
            Column::new("pinned", "Pinned").sortable(),
            Column::new("id", "Id"),
        ]
    }

    fn table(rows: Vec<Item>) -> DataTableState<Item> {
        let mut table = DataTableState::new(columns(), TableOptions::selectable("Clear"));
        let _ = table.set_rows(rows);
        table
    }

    fn ids(rows: &[&Item]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn numbered(count: u32) -> Vec<Item> {
        (1..=count).map(|i| item(i, &format!("file-{i:03}"), Some(u64::from(i) * 10))).collect()
    }

    #[test]
    fn sort_toggles_direction_and_keeps_nulls_last() {
        let mut table = table(vec![
            item(1, "b", Some(30)),
            item(2, "a", None),
            item(3, "c", Some(10)),
            item(4, "d", Some(20)),
        ]);

        let events = table.sort_by("size");
        assert_eq!(
            events,
            vec![TableEvent::SortChanged(SortState {
                key: "size",
                direction: SortDirection::Ascending
            })]
        );
        assert_eq!(ids(&table.sorted_rows()), vec![3, 4, 1, 2]);

        table.sort_by("size");
        assert_eq!(ids(&table.sorted_rows()), vec![1, 4, 3, 2]);

        // a new column starts ascending again
        table.sort_by("name");
        assert_eq!(table.sort().map(|s| s.direction), Some(SortDirection::Ascending));
        assert_eq!(ids(&table.sorted_rows()), vec![2, 1, 3, 4]);
    }

    #[test]
    fn descending_reverses_ascending_except_ties() {
        let rows = vec![
            item(1, "x", Some(5)),
            item(2, "y", Some(1)),
            item(3, "z", Some(5)),
            item(4, "w", None),
            item(5, "v", Some(3)),
        ];
        let mut table = table(rows);
        table.sort_by("size");
        let asc = ids(&table.sorted_rows());
        table.sort_by("size");
        let desc = ids(&table.sorted_rows());

        // stable: ties keep source order in both directions, null stays last
        assert_eq!(asc, vec![2, 5, 1, 3, 4]);
        assert_eq!(desc, vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn booleans_sort_true_first_ascending() {
        let mut table = table(vec![item(1, "a", None), item(2, "b", None), item(3, "c", None)]);
        table.sort_by("pinned");
        assert_eq!(ids(&table.sorted_rows()), vec![2, 1, 3]);
    }

    #[test]
    fn unsortable_and_unknown_columns_are_ignored() {
        let mut table = table(numbered(3));
        assert!(table.sort_by("id").is_empty());
        assert!(table.sort_by("nope").is_empty());
        assert!(table.sort().is_none());
        assert_eq!(table.sort_indicator(&Column::new("id", "Id")), SortIndicator::None);
    }

    #[test]
    fn sorting_never_reorders_source() {
        let mut table = table(vec![item(1, "b", None), item(2, "a", None)]);
        table.sort_by("name");
        let _ = table.sorted_rows();
        assert_eq!(table.rows()[0].id, 1);
    }

    #[test]
    fn pages_partition_the_sorted_rows() {
        let mut table = table(numbered(23));
        table.sort_by("size");
        table.sort_by("size");
        let _ = table.set_page_size(5);

        let expected = ids(&table.sorted_rows());
        let mut seen = Vec::new();
        for page in 1..=table.paginator().total_pages() {
            table.set_page(page);
            let visible = table.visible_page();
            assert!(visible.len() <= 5);
            seen.extend(ids(&visible));
        }
        assert_eq!(seen, expected);
    }

    #[test]
    fn replacing_rows_resets_page_and_prunes_selection() {
        let mut table = table(numbered(40));
        table.set_page(3);
        table.toggle_select(1, true);
        table.toggle_select(2, true);

        let events = table.set_rows(numbered(40).into_iter().skip(1).collect());
        assert_eq!(table.current_page(), 1);
        assert_eq!(events, vec![TableEvent::SelectionChanged(vec![2])]);
        assert_eq!(table.selected_keys(), vec![2]);

        // nothing pruned, nothing emitted
        assert!(table.set_rows(numbered(40)).is_empty());
    }

    #[test]
    fn tri_state_follows_mutations() {
        let mut table = table(numbered(3));
        table.toggle_select_all(true);
        assert_eq!(table.selection_state(), TriState::All);

        table.toggle_select(2, false);
        assert_eq!(table.selection_state(), TriState::Partial);

        table.toggle_select(1, false);
        let events = table.toggle_select(3, false);
        assert_eq!(table.selection_state(), TriState::None);
        assert_eq!(events, vec![TableEvent::SelectionChanged(vec![])]);

        table.toggle_select_all(true);
        assert_eq!(table.selection_state(), TriState::All);
        table.toggle_select_all(false);
        assert_eq!(table.selection_state(), TriState::None);
    }

    #[test]
    fn plain_click_toggles_and_sets_anchor() {
        let mut table = table(numbered(5));
        let events = table.click_row(3, false);
        assert_eq!(
            events,
            vec![TableEvent::SelectionChanged(vec![3]), TableEvent::RowClicked(3)]
        );
        assert_eq!(table.anchor(), Some(2));

        table.click_row(3, false);
        assert!(!table.is_selected(&3));
    }

    #[test]
    fn select_all_keeps_earlier_picks_first() {
        let mut table = table(numbered(3));
        table.toggle_select(3, true);
        table.toggle_select(1, true);
        let events = table.toggle_select_all(true);
        assert_eq!(events, vec![TableEvent::SelectionChanged(vec![3, 1, 2])]);
        assert_eq!(table.selection_state(), TriState::All);
    }

    #[test]
    fn keys_outside_the_rows_are_never_selected() {
        let mut table = table(numbered(3));
        assert!(table.toggle_select(99, true).is_empty());
        assert!(table.click_row(99, false).is_empty());
        assert!(table.click_row(99, true).is_empty());
        assert!(table.selected_keys().is_empty());

        table.toggle_select_all(true);
        assert_eq!(table.selected_keys(), vec![1, 2, 3]);
        assert_eq!(table.selection_state(), TriState::All);
    }

    #[test]
    fn double_click_leaves_the_selection_as_it_was() {
        let mut table = table(numbered(8));
        table.toggle_select(4, true);
        table.click_row(2, false);
        assert_eq!(table.selected_keys(), vec![4, 2]);

        let events = table.double_click(2);
        assert_eq!(
            events,
            vec![
                TableEvent::SelectionChanged(vec![4]),
                TableEvent::RowDoubleClicked(2),
            ]
        );
        assert_eq!(table.selected_keys(), vec![4]);

        // without a preceding click on the same row nothing is undone
        table.click_row(5, false);
        assert_eq!(table.double_click(6), vec![TableEvent::RowDoubleClicked(6)]);
        assert_eq!(table.selected_keys(), vec![4, 5]);
    }

    #[test]
    fn shift_click_selects_the_range_in_either_direction() {
        let mut table = table(numbered(8));
        table.click_row(6, false);
        table.click_row(2, true);
        assert_eq!(table.selected_keys(), vec![6, 2, 3, 4, 5]);
        assert_eq!(table.anchor(), Some(5));
    }

    #[test]
    fn repeated_shift_click_restores_the_selection() {
        let mut table = table(numbered(8));
        table.click_row(2, false);
        table.click_row(2, false);
        assert!(table.selected_keys().is_empty());
        assert_eq!(table.anchor(), Some(1));

        table.click_row(5, true);
        assert_eq!(table.selected_keys(), vec![2, 3, 4, 5]);

        table.click_row(5, true);
        assert!(table.selected_keys().is_empty());
    }

    #[test]
    fn shift_click_deselects_when_clicked_row_was_selected() {
        let mut table = table(numbered(6));
        table.toggle_select_all(true);
        table.click_row(1, false);
        // row 1 is now deselected and is the anchor; row 4 is selected
        table.click_row(4, true);
        assert_eq!(table.selected_keys(), vec![5, 6]);
    }

    #[test]
    fn shift_click_uses_the_visible_page_after_sorting() {
        let mut table = table(numbered(6));
        table.sort_by("size");
        table.sort_by("size");
        // visible order is 6,5,4,3,2,1
        table.click_row(5, false);
        table.click_row(3, true);
        assert_eq!(table.selected_keys(), vec![5, 4, 3]);
    }

    #[test]
    fn shift_without_anchor_behaves_like_a_click() {
        let mut table = table(numbered(4));
        table.click_row(3, true);
        assert_eq!(table.selected_keys(), vec![3]);
        assert_eq!(table.anchor(), Some(2));
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut table = table(numbered(50));
        table.set_page(3);
        let events = table.set_page_size(25);
        assert_eq!(
            events,
            vec![TableEvent::PageSizeChanged(25), TableEvent::PageChanged(1)]
        );
        assert_eq!(table.visible_page().len(), 25);
    }

    #[test]
    fn selected_action_reports_a_copy() {
        let mut table = table(numbered(3));
        table.toggle_select(2, true);
        let events = table.selected_action();
        table.toggle_select(3, true);
        assert_eq!(events, vec![TableEvent::SelectedAction(vec![2])]);
    }
}
