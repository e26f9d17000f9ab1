//! Page Header Component
//!
//! Title row at the top of every page with an optional description and the
//! page's actions on the right.

use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, prelude::*,
};
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

#[derive(IntoElement)]
pub struct PageHeader {
    title: SharedString,
    description: Option<SharedString>,
    actions: Vec<AnyElement>,
}

impl PageHeader {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: None,
            actions: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.actions.push(action.into_any_element());
        self
    }
}

impl RenderOnce for PageHeader {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_4()
            .items_center()
            .justify_between()
            .child(
                v_flex()
                    .gap_1()
                    .child(
                        Label::new(self.title)
                            .text_xl()
                            .font_weight(FontWeight::SEMIBOLD),
                    )
                    .when_some(self.description, |this, description| {
                        this.child(
                            Label::new(description)
                                .text_sm()
                                .text_color(cx.theme().muted_foreground),
                        )
                    }),
            )
            .child(h_flex().gap_2().items_center().children(self.actions))
    }
}
