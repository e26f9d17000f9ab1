//! Cleaner Page
//!
//! Cache, trash and log files in three tabs. Each tab has its own table and
//! search box; only the active one is shown.

use gpui::{
    AnyElement, AnyView, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window, div, prelude::*,
};
use gpui_component::{
    ActiveTheme, Selectable, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};
use sysclean_core::domain::{CacheFile, LogFile, TrashFile};
use sysclean_core::format::format_size;
use sysclean_core::table::{Record, TableEvent};
use sysclean_core::views::cleaner::{ClearFiles, TabRows};
use sysclean_core::views::{CleanerView, Confirmation, Tab};

use crate::app::store::{AppStore, update_app_state_and_save};
use crate::assets::CustomIconName;
use crate::components::composite::data_table::{DataTable, cells::file_cell};
use crate::components::composite::file_preview::{FilePreviewPanel, PreviewEvent};
use crate::components::composite::modal::Modal;
use crate::components::composite::search_box::{SearchBox, SearchResults};
use crate::components::layout::PageHeader;
use crate::features::cleaner::controller::CleanerController;
use crate::features::list_sync::sync_list;
use crate::features::preview::PreviewHost;

/// Cleaner page component
pub struct CleanerPage {
    view: Entity<CleanerView>,
    controller: CleanerController,
    cache_table: Entity<DataTable<CacheFile>>,
    trash_table: Entity<DataTable<TrashFile>>,
    log_table: Entity<DataTable<LogFile>>,
    cache_search: Entity<SearchBox<CacheFile>>,
    trash_search: Entity<SearchBox<TrashFile>>,
    log_search: Entity<SearchBox<LogFile>>,
    preview: Entity<FilePreviewPanel>,
    pending: Option<Confirmation<ClearFiles>>,
    _subscriptions: Vec<Subscription>,
}

fn new_table<R: Record>(tab: Tab, page_size: usize, cx: &mut Context<CleanerPage>) -> Entity<DataTable<R>> {
    cx.new(|_| {
        DataTable::new(format!("cleaner-{}", tab.key()), tab.columns(), tab.options())
            .cell_renderer(file_cell())
            .page_size(page_size)
            .empty_message(format!("No {} files found", tab.key()))
    })
}

fn new_search<R: Record + PartialEq>(
    tab: Tab,
    window: &mut Window,
    cx: &mut Context<CleanerPage>,
) -> Entity<SearchBox<R>> {
    cx.new(|cx| {
        SearchBox::new(
            tab.search_fields(),
            format!("Search {}...", tab.key()),
            window,
            cx,
        )
    })
}

impl CleanerPage {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AppStore>().clone();
        let page_size = store.read(cx).settings().page_size;

        let view = cx.new(|_| CleanerView::new());
        let controller = CleanerController::new(view.clone(), store.services().clone());

        let cache_table = new_table::<CacheFile>(Tab::Cache, page_size, cx);
        let trash_table = new_table::<TrashFile>(Tab::Trash, page_size, cx);
        let log_table = new_table::<LogFile>(Tab::Logs, page_size, cx);
        let cache_search = new_search::<CacheFile>(Tab::Cache, window, cx);
        let trash_search = new_search::<TrashFile>(Tab::Trash, window, cx);
        let log_search = new_search::<LogFile>(Tab::Logs, window, cx);
        let preview = cx.new(|cx| FilePreviewPanel::new(window, cx));

        let subscriptions = vec![
            cx.observe(&view, |this, _, cx| this.sync(cx)),
            cx.subscribe(&cache_table, |this, _, event: &TableEvent<String>, cx| {
                this.on_table_event(Tab::Cache, event, cx);
            }),
            cx.subscribe(&trash_table, |this, _, event: &TableEvent<String>, cx| {
                this.on_table_event(Tab::Trash, event, cx);
            }),
            cx.subscribe(&log_table, |this, _, event: &TableEvent<String>, cx| {
                this.on_table_event(Tab::Logs, event, cx);
            }),
            cx.subscribe(&cache_search, |this, _, results: &SearchResults<CacheFile>, cx| {
                this.controller
                    .set_filtered(TabRows::Cache(results.0.clone()), cx);
            }),
            cx.subscribe(&trash_search, |this, _, results: &SearchResults<TrashFile>, cx| {
                this.controller
                    .set_filtered(TabRows::Trash(results.0.clone()), cx);
            }),
            cx.subscribe(&log_search, |this, _, results: &SearchResults<LogFile>, cx| {
                this.controller
                    .set_filtered(TabRows::Logs(results.0.clone()), cx);
            }),
            cx.subscribe(&preview, |this, _, event: &PreviewEvent, cx| {
                this.controller.handle_preview(event, cx);
            }),
        ];

        controller.select_tab(Tab::Cache, cx);

        Self {
            view,
            controller,
            cache_table,
            trash_table,
            log_table,
            cache_search,
            trash_search,
            log_search,
            preview,
            pending: None,
            _subscriptions: subscriptions,
        }
    }

    /// Push the view state into every tab and the preview panel
    fn sync(&mut self, cx: &mut Context<Self>) {
        let view = self.view.read(cx);
        let active = view.active_tab();
        let loading = view.is_loading();
        let cache = view.cache().clone();
        let trash = view.trash().clone();
        let logs = view.logs().clone();
        let panel = view.session().panel().cloned();

        let mut stale = Vec::new();
        let busy = |tab: Tab| loading && active == tab;
        if let Some(rows) = sync_list(&cache, busy(Tab::Cache), &self.cache_search, &self.cache_table, cx) {
            stale.push(TabRows::Cache(rows));
        }
        if let Some(rows) = sync_list(&trash, busy(Tab::Trash), &self.trash_search, &self.trash_table, cx) {
            stale.push(TabRows::Trash(rows));
        }
        if let Some(rows) = sync_list(&logs, busy(Tab::Logs), &self.log_search, &self.log_table, cx) {
            stale.push(TabRows::Logs(rows));
        }
        for rows in stale {
            self.controller.set_filtered(rows, cx);
        }

        self.preview.update(cx, |preview, cx| preview.set_panel(panel, cx));
        cx.notify();
    }

    fn on_table_event(&mut self, tab: Tab, event: &TableEvent<String>, cx: &mut Context<Self>) {
        match event {
            TableEvent::SelectionChanged(keys) => {
                self.controller.set_selection(tab, keys.clone(), cx);
            }
            TableEvent::Reload => self.controller.load(tab, true, cx),
            TableEvent::SelectedAction(_) => {
                self.pending = self.controller.request_clear(cx);
                cx.notify();
            }
            TableEvent::Preview(path) | TableEvent::RowDoubleClicked(path) => {
                self.controller.preview(path.clone(), cx);
            }
            TableEvent::PageSizeChanged(size) => {
                let size = *size;
                update_app_state_and_save(cx, "set_page_size", move |state, _| {
                    state.set_page_size(size)
                });
            }
            _ => {}
        }
    }

    fn switch_tab(&mut self, tab: Tab, cx: &mut Context<Self>) {
        if self.view.read(cx).active_tab() == tab {
            return;
        }
        self.controller.handle_preview(&PreviewEvent::Close, cx);
        self.controller.select_tab(tab, cx);
    }

    fn confirm_pending(&mut self, cx: &mut Context<Self>) {
        if let Some(confirmation) = self.pending.take() {
            self.controller.clear(confirmation, cx);
        }
        cx.notify();
    }

    fn render_tabs(&self, cx: &Context<Self>) -> impl IntoElement {
        let view = self.view.read(cx);
        let active = view.active_tab();
        let sizes = [view.cache_size(), view.trash_size(), view.log_size()];

        let tabs: Vec<_> = Tab::ALL
            .iter()
            .zip(sizes)
            .enumerate()
            .map(|(ix, (&tab, size))| {
                Button::new(("cleaner-tab", ix))
                    .ghost()
                    .small()
                    .label(format!("{} ({})", tab.label(), format_size(size)))
                    .selected(tab == active)
                    .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.switch_tab(tab, cx);
                    }))
            })
            .collect();

        h_flex()
            .gap_1()
            .pb_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .children(tabs)
    }

    fn render_dialog(&self, cx: &Context<Self>) -> Option<AnyElement> {
        let page = cx.entity().downgrade();
        if let Some(confirmation) = &self.pending {
            let cancel = page.clone();
            return Some(
                Modal::confirm(
                    "Clear Files",
                    confirmation.message.clone(),
                    "Clear",
                    move |_, cx| {
                        page.update(cx, |this, cx| this.confirm_pending(cx)).ok();
                    },
                    move |_, cx| {
                        cancel
                            .update(cx, |this, cx| {
                                this.pending = None;
                                cx.notify();
                            })
                            .ok();
                    },
                )
                .into_any_element(),
            );
        }

        let message = self.view.read(cx).alert()?.to_string();
        let controller = self.controller.clone();
        Some(
            Modal::alert("Cleaner", message, move |_, cx| controller.dismiss_alert(cx))
                .into_any_element(),
        )
    }
}

impl Render for CleanerPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.view.read(cx);
        let active = view.active_tab();
        let description = format!("{} of junk files found", format_size(view.total_junk()));
        let loading = view.is_loading();
        let preview_open = view.session().is_open();

        let (search, table): (AnyView, AnyView) = match active {
            Tab::Cache => (self.cache_search.clone().into(), self.cache_table.clone().into()),
            Tab::Trash => (self.trash_search.clone().into(), self.trash_table.clone().into()),
            Tab::Logs => (self.log_search.clone().into(), self.log_table.clone().into()),
        };
        let tabs = self.render_tabs(cx);
        let dialog = self.render_dialog(cx);

        v_flex()
            .size_full()
            .relative()
            .p_6()
            .gap_4()
            .child(
                PageHeader::new("System Cleaner")
                    .description(description)
                    .action(search)
                    .action(
                        Button::new("cleaner-refresh")
                            .ghost()
                            .small()
                            .icon(CustomIconName::Refresh)
                            .label("Refresh")
                            .loading(loading)
                            .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                                this.controller.load(active, true, cx);
                            })),
                    ),
            )
            .child(tabs)
            .child(
                h_flex()
                    .flex_1()
                    .min_h_0()
                    .gap_4()
                    .child(div().flex_1().min_w_0().h_full().child(table))
                    .when(preview_open, |this| this.child(self.preview.clone())),
            )
            .children(dialog)
    }
}
