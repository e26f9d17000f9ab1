//! Search Box Component
//!
//! Toggleable search input over a snapshot of rows. Every change of the
//! query emits the matching rows as [`SearchResults`].

use gpui::{
    ClickEvent, Context, Entity, EventEmitter, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window, prelude::*, px,
};
use gpui_component::{
    IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
};
use sysclean_core::search::SearchFilter;
use sysclean_core::table::Record;

const SEARCH_INPUT_WIDTH: f32 = 260.0;

/// Rows matching the current query
pub struct SearchResults<R>(pub Vec<R>);

/// Search box component
pub struct SearchBox<R: Record> {
    input: Entity<InputState>,
    filter: SearchFilter<R>,
    _subscriptions: Vec<Subscription>,
}

impl<R: Record> EventEmitter<SearchResults<R>> for SearchBox<R> {}

impl<R: Record + PartialEq> SearchBox<R> {
    pub fn new(
        fields: Vec<&'static str>,
        placeholder: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let placeholder = placeholder.into();
        let input = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });

        let subscriptions = vec![cx.subscribe(&input, |this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let query = state.read(cx).value().to_string();
                if query != this.filter.query() {
                    let rows = this.filter.set_query(query);
                    cx.emit(SearchResults(rows));
                }
            }
        })];

        Self {
            input,
            filter: SearchFilter::new(fields),
            _subscriptions: subscriptions,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.filter.is_visible()
    }

    /// Take a new snapshot; the owner reads the matches through [`SearchBox::results`]
    pub fn set_source(&mut self, rows: Vec<R>) {
        if self.filter.original() != rows.as_slice() {
            self.filter.set_source(rows);
        }
    }

    pub fn results(&self) -> Vec<R> {
        self.filter.results()
    }

    pub fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.filter.is_visible() {
            let rows = self.filter.hide();
            self.input.update(cx, |input, cx| {
                input.set_value("", window, cx);
            });
            cx.emit(SearchResults(rows));
        } else {
            self.filter.show();
            self.input.update(cx, |input, cx| {
                input.focus(window, cx);
            });
        }
        cx.notify();
    }
}

impl<R: Record + PartialEq> Render for SearchBox<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let visible = self.filter.is_visible();

        h_flex()
            .gap_2()
            .items_center()
            .when(visible, |this| {
                this.child(
                    h_flex()
                        .w(px(SEARCH_INPUT_WIDTH))
                        .child(Input::new(&self.input).w_full().small().cleanable(true)),
                )
            })
            .child(
                Button::new("search-toggle")
                    .ghost()
                    .small()
                    .icon(if visible { IconName::Close } else { IconName::Search })
                    .tooltip(if visible { "Close search" } else { "Search" })
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        this.toggle(window, cx);
                    })),
            )
    }
}
