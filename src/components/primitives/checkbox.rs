//! Checkbox Component
//!
//! Checkbox with an optional indeterminate state, used for table row and
//! select-all boxes.

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{ActiveTheme, Icon, IconName, Sizable, h_flex};
use sysclean_core::table::TriState;

type ChangeHandler = Box<dyn Fn(bool, &mut Window, &mut App) + 'static>;

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    state: TriState,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            state: TriState::None,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.state = if checked { TriState::All } else { TriState::None };
        self
    }

    /// Show the select-all summary: checked, partial or empty
    pub fn tri_state(mut self, state: TriState) -> Self {
        self.state = state;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the new checked value; a partial box becomes checked
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = self.state;
        let filled = state != TriState::None;
        let theme = cx.theme();

        let (bg, border) = if filled {
            (theme.primary, theme.primary)
        } else {
            (theme.background, theme.input)
        };
        let mark = match state {
            TriState::All => Some(IconName::Check),
            TriState::Partial => Some(IconName::Minus),
            TriState::None => None,
        };

        let mut checkbox = h_flex()
            .id(self.id)
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(16.0))
                    .flex_none()
                    .rounded_sm()
                    .border_1()
                    .border_color(border)
                    .bg(bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .when_some(mark, |this, mark| {
                        this.child(
                            Icon::new(mark)
                                .xsmall()
                                .text_color(theme.primary_foreground),
                        )
                    }),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(div().text_sm().child(label));
        }

        if self.disabled {
            return checkbox.opacity(0.5);
        }

        let checkbox = checkbox.cursor_pointer();
        match self.on_change {
            Some(handler) => checkbox.on_click(move |_event, window, cx| {
                cx.stop_propagation();
                handler(state != TriState::All, window, cx);
            }),
            None => checkbox,
        }
    }
}
