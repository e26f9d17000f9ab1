//! DataTable Component
//!
//! Renders a [`DataTableState`] and forwards every event it produces to the
//! owning page through `cx.emit`.

use gpui::{
    ClickEvent, Context, Div, EventEmitter, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Disableable, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use sysclean_core::table::{
    Align, Column, ColumnWidth, DataTableState, Record, SortIndicator, TableEvent, TableOptions,
};

use super::cells::{CellRenderer, text_cell};
use super::pagination::Pagination;
use crate::assets::CustomIconName;
use crate::components::primitives::Checkbox;
use crate::constants::{TABLE_CONTROL_WIDTH, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::theme::colors::SysColors;

/// DataTable component
pub struct DataTable<R: Record> {
    id: SharedString,
    state: DataTableState<R>,
    render_cell: CellRenderer<R>,
    empty_message: SharedString,
}

impl<R: Record> EventEmitter<TableEvent<R::Key>> for DataTable<R> {}

impl<R: Record> DataTable<R> {
    pub fn new(id: impl Into<SharedString>, columns: Vec<Column>, options: TableOptions) -> Self {
        Self {
            id: id.into(),
            state: DataTableState::new(columns, options),
            render_cell: text_cell(),
            empty_message: "No data".into(),
        }
    }

    pub fn cell_renderer(mut self, renderer: CellRenderer<R>) -> Self {
        self.render_cell = renderer;
        self
    }

    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Initial rows per page; nothing is emitted
    pub fn page_size(mut self, size: usize) -> Self {
        self.state.set_page_size(size);
        self
    }

    pub fn state(&self) -> &DataTableState<R> {
        &self.state
    }

    // ==================== Owner updates ====================

    pub fn set_rows(&mut self, rows: Vec<R>, cx: &mut Context<Self>) {
        let events = self.state.set_rows(rows);
        self.forward(events, cx);
    }

    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        if self.state.is_loading() != loading {
            self.state.set_loading(loading);
            cx.notify();
        }
    }

    /// Overwrite the selection, e.g. after the owner cleared it
    pub fn set_selection(&mut self, keys: Vec<R::Key>, cx: &mut Context<Self>) {
        if self.state.selected_keys() != keys {
            self.state.set_selection(keys);
            cx.notify();
        }
    }

    pub fn set_options(&mut self, options: TableOptions, cx: &mut Context<Self>) {
        self.state.set_options(options);
        cx.notify();
    }

    fn forward(&mut self, events: Vec<TableEvent<R::Key>>, cx: &mut Context<Self>) {
        for event in events {
            cx.emit(event);
        }
        cx.notify();
    }

    /// Replace the rows unless they are unchanged, keeping page and sort
    pub fn sync_rows(&mut self, rows: Vec<R>, cx: &mut Context<Self>)
    where
        R: PartialEq,
    {
        if self.state.rows() != rows.as_slice() {
            self.set_rows(rows, cx);
        }
    }

    // ==================== Rendering ====================

    fn render_toolbar(&self, options: &TableOptions, cx: &Context<Self>) -> impl IntoElement {
        let selected = self.state.selected_count();
        let summary = if selected > 0 {
            format!("{selected} of {} selected", self.state.total_items())
        } else {
            format!("{} items", self.state.total_items())
        };

        h_flex()
            .w_full()
            .px_3()
            .py_2()
            .gap_2()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                Label::new(summary)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .when(options.show_reload_button, |this| {
                        this.child(
                            Button::new("table-reload")
                                .ghost()
                                .small()
                                .icon(CustomIconName::Refresh)
                                .tooltip("Reload")
                                .loading(self.state.is_loading())
                                .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                    let events = this.state.reload();
                                    this.forward(events, cx);
                                })),
                        )
                    })
                    .when(options.show_selected_actions, |this| {
                        this.child(
                            Button::new("table-selected-action")
                                .primary()
                                .small()
                                .label(options.selected_action_text.clone())
                                .disabled(selected == 0)
                                .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                    let events = this.state.selected_action();
                                    this.forward(events, cx);
                                })),
                        )
                    }),
            )
    }

    fn render_header(&self, options: &TableOptions, cx: &Context<Self>) -> impl IntoElement {
        let entity = cx.entity().downgrade();
        let select_all = options.show_checkbox.then(|| {
            control_cell().child(
                Checkbox::new("select-all")
                    .tri_state(self.state.selection_state())
                    .disabled(self.state.total_items() == 0)
                    .on_change(move |checked, _, cx| {
                        entity
                            .update(cx, |this, cx| {
                                let events = this.state.toggle_select_all(checked);
                                this.forward(events, cx);
                            })
                            .ok();
                    }),
            )
        });

        let muted = cx.theme().muted_foreground;
        let headers: Vec<_> = self
            .state
            .columns()
            .iter()
            .enumerate()
            .map(|(ix, column)| {
                let key = column.key;
                let sort_icon = match self.state.sort_indicator(column) {
                    SortIndicator::None => None,
                    SortIndicator::Unsorted => Some(IconName::ChevronsUpDown),
                    SortIndicator::Ascending => Some(IconName::SortAscending),
                    SortIndicator::Descending => Some(IconName::SortDescending),
                };
                column_cell(column)
                    .id(("column", ix))
                    .gap_1()
                    .child(
                        Label::new(column.label)
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM),
                    )
                    .when_some(sort_icon, |this, icon| {
                        this.child(Icon::new(icon).xsmall().text_color(muted))
                    })
                    .when(column.sortable, |this| {
                        this.cursor_pointer()
                            .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                                let events = this.state.sort_by(key);
                                this.forward(events, cx);
                            }))
                    })
            })
            .collect();

        h_flex()
            .w_full()
            .h(px(TABLE_HEADER_HEIGHT))
            .flex_none()
            .items_center()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(cx.theme().border)
            .children(select_all)
            .children(headers)
            .when(options.show_preview_button, |this| this.child(control_cell()))
    }

    fn render_row(&self, ix: usize, row: &R, options: &TableOptions, cx: &Context<Self>) -> impl IntoElement {
        let key = row.key();
        let selected = self.state.is_selected(&key);
        let bg = if selected {
            cx.theme().list_active
        } else {
            SysColors::row_stripe(ix, cx)
        };
        let hover = cx.theme().accent.opacity(0.5);

        let checkbox = options.show_checkbox.then(|| {
            let entity = cx.entity().downgrade();
            let key = key.clone();
            control_cell().child(
                Checkbox::new(("row-select", ix))
                    .checked(selected)
                    .on_change(move |checked, _, cx| {
                        let key = key.clone();
                        entity
                            .update(cx, |this, cx| {
                                let events = this.state.toggle_select(key, checked);
                                this.forward(events, cx);
                            })
                            .ok();
                    }),
            )
        });

        let cells: Vec<_> = self
            .state
            .columns()
            .iter()
            .map(|column| column_cell(column).child((self.render_cell)(row, column, cx)))
            .collect();

        let preview = options.show_preview_button.then(|| {
            let key = key.clone();
            control_cell().child(
                Button::new(("row-preview", ix))
                    .ghost()
                    .xsmall()
                    .icon(CustomIconName::Preview)
                    .tooltip("Preview")
                    .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                        cx.stop_propagation();
                        let events = this.state.preview(key.clone());
                        this.forward(events, cx);
                    })),
            )
        });

        h_flex()
            .id(("row", ix))
            .w_full()
            .h(px(TABLE_ROW_HEIGHT))
            .flex_none()
            .items_center()
            .bg(bg)
            .border_b_1()
            .border_color(cx.theme().border)
            .when(options.hoverable, |this| this.hover(move |s| s.bg(hover)))
            .on_click(cx.listener(move |this, event: &ClickEvent, _, cx| {
                let events = if event.click_count() > 1 {
                    this.state.double_click(key.clone())
                } else {
                    this.state.click_row(key.clone(), event.modifiers().shift)
                };
                this.forward(events, cx);
            }))
            .children(checkbox)
            .children(cells)
            .children(preview)
    }

    fn render_body(&self, options: &TableOptions, cx: &Context<Self>) -> impl IntoElement {
        if self.state.total_items() == 0 {
            let message = if self.state.is_loading() {
                SharedString::from("Loading...")
            } else {
                self.empty_message.clone()
            };
            return div()
                .flex_1()
                .flex()
                .items_center()
                .justify_center()
                .child(
                    Label::new(message)
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
                .into_any_element();
        }

        let page: Vec<R> = self.state.visible_page().into_iter().cloned().collect();
        let rows: Vec<_> = page
            .iter()
            .enumerate()
            .map(|(ix, row)| self.render_row(ix, row, options, cx))
            .collect();

        div()
            .id("table-rows")
            .flex_1()
            .overflow_y_scroll()
            .children(rows)
            .into_any_element()
    }
}

impl<R: Record> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let options = self.state.options().clone();
        let toolbar = (options.show_reload_button || options.show_selected_actions)
            .then(|| self.render_toolbar(&options, cx));
        let header = options
            .show_header
            .then(|| self.render_header(&options, cx));
        let body = self.render_body(&options, cx);

        let entity = cx.entity().downgrade();
        let size_entity = entity.clone();
        let pagination = Pagination::new(*self.state.paginator())
            .on_page_change(move |page, _, cx| {
                entity
                    .update(cx, |this, cx| {
                        let events = this.state.set_page(page);
                        this.forward(events, cx);
                    })
                    .ok();
            })
            .on_page_size_change(move |size, _, cx| {
                size_entity
                    .update(cx, |this, cx| {
                        let events = this.state.set_page_size(size);
                        this.forward(events, cx);
                    })
                    .ok();
            });

        v_flex()
            .id(self.id.clone())
            .size_full()
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .overflow_hidden()
            .children(toolbar)
            .children(header)
            .child(body)
            .child(pagination)
    }
}

/// Cell sized and aligned for `column`
fn column_cell(column: &Column) -> Div {
    let cell = h_flex().h_full().px_3().items_center().overflow_hidden();
    let cell = match column.width {
        ColumnWidth::Fixed(width) => cell.w(px(width)).flex_none(),
        ColumnWidth::Flex => cell.flex_1().min_w_0(),
    };
    match column.align {
        Align::Left => cell,
        Align::Center => cell.justify_center(),
        Align::Right => cell.justify_end(),
    }
}

/// Narrow cell for the checkbox and preview controls
fn control_cell() -> Div {
    h_flex()
        .w(px(TABLE_CONTROL_WIDTH))
        .h_full()
        .flex_none()
        .items_center()
        .justify_center()
}
