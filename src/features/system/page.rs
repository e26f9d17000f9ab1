//! System Page
//!
//! Running and stopped services in one table. The mode toggle decides which
//! half is listed and whether the bulk action stops or starts.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window, div, prelude::*,
};
use gpui_component::{
    Selectable, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use sysclean_core::domain::ServiceItem;
use sysclean_core::table::{Column, Record, TableEvent};
use sysclean_core::views::system::{self, SEARCH_FIELDS};
use sysclean_core::views::{Confirmation, SystemAction, SystemView};

use crate::app::store::{AppStore, update_app_state_and_save};
use crate::assets::CustomIconName;
use crate::components::composite::data_table::{DataTable, cells::CellRenderer};
use crate::components::composite::modal::Modal;
use crate::components::composite::search_box::{SearchBox, SearchResults};
use crate::components::layout::PageHeader;
use crate::features::system::controller::SystemController;
use crate::theme::colors::SysColors;

/// Which services the table lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceMode {
    Running,
    Stopped,
}

impl ServiceMode {
    fn label(self) -> &'static str {
        match self {
            ServiceMode::Running => "Running",
            ServiceMode::Stopped => "Stopped",
        }
    }

    fn icon(self) -> CustomIconName {
        match self {
            ServiceMode::Running => CustomIconName::Play,
            ServiceMode::Stopped => CustomIconName::Stop,
        }
    }

    fn includes(self, service: &ServiceItem) -> bool {
        service.is_running == (self == ServiceMode::Running)
    }
}

/// Status column coloured by run state
fn service_cell() -> CellRenderer<ServiceItem> {
    Rc::new(|row: &ServiceItem, column: &Column, cx: &App| {
        let label = Label::new(row.field(column.key).to_display_string())
            .text_sm()
            .text_ellipsis();
        match column.key {
            "status" => label
                .text_color(SysColors::service_state(row.is_running, cx))
                .into_any_element(),
            _ => label.into_any_element(),
        }
    })
}

/// System page component
pub struct SystemPage {
    view: Entity<SystemView>,
    controller: SystemController,
    table: Entity<DataTable<ServiceItem>>,
    search: Entity<SearchBox<ServiceItem>>,
    mode: ServiceMode,
    pending: Option<Confirmation<SystemAction>>,
    _subscriptions: Vec<Subscription>,
}

impl SystemPage {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AppStore>().clone();
        let page_size = store.read(cx).settings().page_size;

        let view = cx.new(|_| SystemView::new());
        let controller = SystemController::new(view.clone(), store.services().clone());

        let table = cx.new(|_| {
            DataTable::new("services", system::columns(), system::stop_options())
                .cell_renderer(service_cell())
                .page_size(page_size)
                .empty_message("No services found")
        });
        let search = cx.new(|cx| {
            SearchBox::new(SEARCH_FIELDS.to_vec(), "Search services...", window, cx)
        });

        let subscriptions = vec![
            cx.observe(&view, |this, _, cx| this.sync(cx)),
            cx.subscribe(&table, |this, _, event: &TableEvent<String>, cx| {
                this.on_table_event(event, cx);
            }),
            cx.subscribe(&search, |this, _, results: &SearchResults<ServiceItem>, cx| {
                this.controller.set_filtered(results.0.clone(), cx);
            }),
        ];

        controller.load(cx);

        Self {
            view,
            controller,
            table,
            search,
            mode: ServiceMode::Running,
            pending: None,
            _subscriptions: subscriptions,
        }
    }

    /// Push the services of the current mode into the table
    fn sync(&mut self, cx: &mut Context<Self>) {
        let view = self.view.read(cx);
        let list = view.services().clone();
        let loading = view.is_loading();

        let data = list.data().to_vec();
        self.search.update(cx, |search, _| search.set_source(data));
        let results = self.search.read(cx).results();
        if results != list.filtered() {
            self.controller.set_filtered(results, cx);
            return;
        }

        let mode = self.mode;
        let rows: Vec<ServiceItem> = results.into_iter().filter(|s| mode.includes(s)).collect();
        let selected = list.selected().to_vec();
        self.table.update(cx, |table, cx| {
            table.sync_rows(rows, cx);
            table.set_selection(selected, cx);
            table.set_loading(loading, cx);
        });
        cx.notify();
    }

    fn set_mode(&mut self, mode: ServiceMode, cx: &mut Context<Self>) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        let options = match mode {
            ServiceMode::Running => system::stop_options(),
            ServiceMode::Stopped => system::start_options(),
        };
        self.table.update(cx, |table, cx| table.set_options(options, cx));
        // clearing notifies the view, which re-syncs the rows
        self.controller.clear_selection(cx);
    }

    fn on_table_event(&mut self, event: &TableEvent<String>, cx: &mut Context<Self>) {
        match event {
            TableEvent::SelectionChanged(keys) => self.controller.set_selection(keys.clone(), cx),
            TableEvent::Reload => self.controller.load(cx),
            TableEvent::SelectedAction(_) => {
                self.pending = match self.mode {
                    ServiceMode::Running => self.controller.request_stop(cx),
                    ServiceMode::Stopped => self.controller.request_start_selected(cx),
                };
                cx.notify();
            }
            TableEvent::RowDoubleClicked(name) if self.mode == ServiceMode::Stopped => {
                self.pending = Some(self.controller.request_start(name, cx));
                cx.notify();
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
            self.controller.run(confirmation, cx);
        }
        cx.notify();
    }

    fn render_dialog(&self, cx: &Context<Self>) -> Option<AnyElement> {
        let page = cx.entity().downgrade();
        if let Some(confirmation) = &self.pending {
            let (title, label) = match confirmation.action {
                SystemAction::Stop(_) => ("Stop Services", "Stop"),
                SystemAction::Enable(_) | SystemAction::Start(_) => ("Start Services", "Start"),
            };
            let cancel = page.clone();
            return Some(
                Modal::confirm(
                    title,
                    confirmation.message.clone(),
                    label,
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
            Modal::alert("Services", message, move |_, cx| controller.dismiss_alert(cx))
                .into_any_element(),
        )
    }
}

impl Render for SystemPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.view.read(cx);
        let description = format!(
            "{} services, {} running, {} stopped",
            view.total(),
            view.running(),
            view.stopped()
        );
        let loading = view.is_loading();
        let mode = self.mode;
        let dialog = self.render_dialog(cx);

        let modes = h_flex()
            .gap_1()
            .children([ServiceMode::Running, ServiceMode::Stopped].into_iter().enumerate().map(
                |(ix, item)| {
                    Button::new(("service-mode", ix))
                        .ghost()
                        .small()
                        .icon(item.icon())
                        .label(item.label())
                        .selected(mode == item)
                        .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                            this.set_mode(item, cx);
                        }))
                },
            ));

        v_flex()
            .size_full()
            .relative()
            .p_6()
            .gap_4()
            .child(
                PageHeader::new("Services")
                    .description(description)
                    .action(modes)
                    .action(self.search.clone())
                    .action(
                        Button::new("services-refresh")
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
            .child(div().flex_1().min_h_0().child(self.table.clone()))
            .children(dialog)
    }
}
