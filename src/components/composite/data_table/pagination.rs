//! Pagination Component
//!
//! Page strip for the DataTable: previous/next, numbered pages with collapsed
//! gaps, and the rows-per-page choice.

use std::rc::Rc;

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Selectable, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
};
use sysclean_core::table::{PAGE_SIZE_OPTIONS, PageItem, Paginator};

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    paginator: Paginator,
    window: Vec<PageItem>,
    on_page_change: Option<PageHandler>,
    on_page_size_change: Option<PageHandler>,
}

impl Pagination {
    pub fn new(paginator: Paginator) -> Self {
        Self {
            window: paginator.window(),
            paginator,
            on_page_change: None,
            on_page_size_change: None,
        }
    }

    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    pub fn on_page_size_change(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_page_size_change = Some(Rc::new(handler));
        self
    }

    fn page_button(
        id: impl Into<SharedString>,
        target: usize,
        handler: &Option<PageHandler>,
    ) -> Button {
        let button = Button::new(id.into()).ghost().xsmall();
        match handler.clone() {
            Some(handler) => button.on_click(move |_, window, cx| handler(target, window, cx)),
            None => button,
        }
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let paginator = self.paginator;
        let current = paginator.current;
        let range = paginator.range();
        let summary = if paginator.total_items == 0 {
            "No items".to_string()
        } else {
            format!("{}-{} of {}", range.start + 1, range.end, paginator.total_items)
        };

        let pages: Vec<_> = self
            .window
            .iter()
            .map(|item| match *item {
                PageItem::Page(page) => {
                    Self::page_button(format!("page-{page}"), page, &self.on_page_change)
                        .label(page.to_string())
                        .selected(page == current)
                        .into_any_element()
                }
                PageItem::Ellipsis => Label::new("…")
                    .text_sm()
                    .px_1()
                    .text_color(cx.theme().muted_foreground)
                    .into_any_element(),
            })
            .collect();

        let sizes: Vec<_> = PAGE_SIZE_OPTIONS
            .iter()
            .map(|&size| {
                Self::page_button(format!("page-size-{size}"), size, &self.on_page_size_change)
                    .label(size.to_string())
                    .selected(size == paginator.page_size)
            })
            .collect();

        h_flex()
            .w_full()
            .px_3()
            .py_2()
            .gap_4()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .gap_1()
                    .items_center()
                    .child(
                        Label::new("Rows per page")
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .children(sizes),
            )
            .child(
                h_flex()
                    .gap_1()
                    .items_center()
                    .child(
                        Label::new(summary)
                            .text_sm()
                            .mr_2()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Self::page_button("page-prev", current.saturating_sub(1), &self.on_page_change)
                            .icon(IconName::ChevronLeft)
                            .disabled(!paginator.can_previous()),
                    )
                    .children(pages)
                    .child(
                        Self::page_button("page-next", current + 1, &self.on_page_change)
                            .icon(IconName::ChevronRight)
                            .disabled(!paginator.can_next()),
                    ),
            )
    }
}
