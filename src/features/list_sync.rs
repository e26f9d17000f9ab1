//! List Sync
//!
//! Pushes a [`ListState`] into its search box and table. The search box owns
//! the query, so its matches replace the list's filtered rows whenever the
//! two disagree.

use gpui::{App, AppContext, Entity};
use sysclean_core::table::Record;
use sysclean_core::views::ListState;

use crate::components::composite::data_table::DataTable;
use crate::components::composite::search_box::SearchBox;

/// Sync one list; returns the search matches when the list's filtered rows are stale
pub fn sync_list<R>(
    list: &ListState<R>,
    loading: bool,
    search: &Entity<SearchBox<R>>,
    table: &Entity<DataTable<R>>,
    cx: &mut App,
) -> Option<Vec<R>>
where
    R: Record + PartialEq,
{
    let data = list.data().to_vec();
    search.update(cx, |search, _| search.set_source(data));
    let results = search.read(cx).results();
    if results != list.filtered() {
        return Some(results);
    }

    let selected = list.selected().to_vec();
    table.update(cx, |table, cx| {
        table.sync_rows(results, cx);
        table.set_selection(selected, cx);
        table.set_loading(loading, cx);
    });
    None
}
