//! Large Files Page
//!
//! Table of files above the size threshold with search, bulk delete and a
//! preview panel on the right.

use gpui::{
    AnyElement, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window, div, prelude::*,
};
use gpui_component::{
    Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};
use sysclean_core::domain::LargeFile;
use sysclean_core::format::format_size;
use sysclean_core::table::TableEvent;
use sysclean_core::views::large_files::{self, DeleteFiles};
use sysclean_core::views::{Confirmation, LargeFilesView};

use crate::app::store::{AppStore, update_app_state_and_save};
use crate::assets::CustomIconName;
use crate::components::composite::data_table::{DataTable, cells::file_cell};
use crate::components::composite::file_preview::{FilePreviewPanel, PreviewEvent};
use crate::components::composite::modal::Modal;
use crate::components::composite::search_box::{SearchBox, SearchResults};
use crate::components::layout::PageHeader;
use crate::features::large_files::controller::LargeFilesController;
use crate::features::list_sync::sync_list;
use crate::features::preview::PreviewHost;

/// Large files page component
pub struct LargeFilesPage {
    view: Entity<LargeFilesView>,
    controller: LargeFilesController,
    table: Entity<DataTable<LargeFile>>,
    search: Entity<SearchBox<LargeFile>>,
    preview: Entity<FilePreviewPanel>,
    pending: Option<Confirmation<DeleteFiles>>,
    _subscriptions: Vec<Subscription>,
}

impl LargeFilesPage {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AppStore>().clone();
        let page_size = store.read(cx).settings().page_size;

        let view = cx.new(|_| LargeFilesView::new());
        let controller = LargeFilesController::new(view.clone(), store.services().clone());

        let table = cx.new(|_| {
            DataTable::new("large-files", large_files::columns(), large_files::options())
                .cell_renderer(file_cell())
                .page_size(page_size)
                .empty_message("No large files found")
        });
        let search = cx.new(|cx| {
            SearchBox::new(
                large_files::SEARCH_FIELDS.to_vec(),
                "Search by name or path...",
                window,
                cx,
            )
        });
        let preview = cx.new(|cx| FilePreviewPanel::new(window, cx));

        let subscriptions = vec![
            cx.observe(&view, |this, _, cx| this.sync(cx)),
            cx.subscribe(&table, |this, _, event: &TableEvent<String>, cx| {
                this.on_table_event(event, cx);
            }),
            cx.subscribe(&search, |this, _, results: &SearchResults<LargeFile>, cx| {
                this.controller.set_filtered(results.0.clone(), cx);
            }),
            cx.subscribe(&preview, |this, _, event: &PreviewEvent, cx| {
                this.controller.handle_preview(event, cx);
            }),
        ];

        controller.load(cx);

        Self {
            view,
            controller,
            table,
            search,
            preview,
            pending: None,
            _subscriptions: subscriptions,
        }
    }

    /// Push the view state into the table, search box and preview panel
    fn sync(&mut self, cx: &mut Context<Self>) {
        let view = self.view.read(cx);
        let files = view.files().clone();
        let loading = view.is_loading();
        let panel = view.session().panel().cloned();

        if let Some(results) = sync_list(&files, loading, &self.search, &self.table, cx) {
            // the follow-up notification syncs the table
            self.controller.set_filtered(results, cx);
            return;
        }
        self.preview.update(cx, |preview, cx| preview.set_panel(panel, cx));
        cx.notify();
    }

    fn on_table_event(&mut self, event: &TableEvent<String>, cx: &mut Context<Self>) {
        match event {
            TableEvent::SelectionChanged(keys) => self.controller.set_selection(keys.clone(), cx),
            TableEvent::Reload => self.controller.load(cx),
            TableEvent::SelectedAction(_) => {
                self.pending = self.controller.request_delete(cx);
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

    fn confirm_pending(&mut self, cx: &mut Context<Self>) {
        if let Some(confirmation) = self.pending.take() {
            self.controller.delete(confirmation, cx);
        }
        cx.notify();
    }

    fn render_dialog(&self, cx: &Context<Self>) -> Option<AnyElement> {
        let page = cx.entity().downgrade();
        if let Some(confirmation) = &self.pending {
            let cancel = page.clone();
            return Some(
                Modal::confirm(
                    "Delete Large Files",
                    confirmation.message.clone(),
                    "Delete",
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
            Modal::alert("Large Files", message, move |_, cx| controller.dismiss_alert(cx))
                .into_any_element(),
        )
    }
}

impl Render for LargeFilesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.view.read(cx);
        let description = format!(
            "{} files, {} in total",
            view.files().data().len(),
            format_size(view.total_size())
        );
        let loading = view.is_loading();
        let preview_open = view.session().is_open();
        let dialog = self.render_dialog(cx);

        v_flex()
            .size_full()
            .relative()
            .p_6()
            .gap_4()
            .child(
                PageHeader::new("Large Files")
                    .description(description)
                    .action(self.search.clone())
                    .action(
                        Button::new("large-files-refresh")
                            .ghost()
                            .small()
                            .icon(CustomIconName::Refresh)
                            .label("Refresh")
                            .loading(loading)
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.controller.load(cx);
                            })),
                    ),
            )
            .child(
                h_flex()
                    .flex_1()
                    .min_h_0()
                    .gap_4()
                    .child(div().flex_1().min_w_0().h_full().child(self.table.clone()))
                    .when(preview_open, |this| this.child(self.preview.clone())),
            )
            .children(dialog)
    }
}
