//! Modal Component
//!
//! Overlay dialog drawn above the page. Pages keep the pending confirmation or
//! alert themselves and render a `Modal` while it is set.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use crate::constants::{MODAL_MAX_WIDTH, MODAL_MIN_WIDTH};
use crate::theme::colors::SysColors;

type ModalHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_close: Option<ModalHandler>,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
        }
    }

    /// Two-button dialog; the confirm button is styled as destructive
    pub fn confirm(
        title: impl Into<SharedString>,
        message: impl Into<SharedString>,
        confirm_label: impl Into<SharedString>,
        on_confirm: impl Fn(&mut Window, &mut App) + 'static,
        on_cancel: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        let on_cancel: ModalHandler = Rc::new(on_cancel);
        let cancel = on_cancel.clone();
        Self::new(title)
            .child(message_text(message.into()))
            .footer_button(
                Button::new("modal-cancel")
                    .ghost()
                    .label("Cancel")
                    .on_click(move |_: &ClickEvent, window, cx| cancel(window, cx)),
            )
            .footer_button(
                Button::new("modal-confirm")
                    .danger()
                    .label(confirm_label.into())
                    .on_click(move |_: &ClickEvent, window, cx| on_confirm(window, cx)),
            )
            .with_close_handler(on_cancel)
    }

    /// Single-button notice
    pub fn alert(
        title: impl Into<SharedString>,
        message: impl Into<SharedString>,
        on_dismiss: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        let on_dismiss: ModalHandler = Rc::new(on_dismiss);
        let dismiss = on_dismiss.clone();
        Self::new(title)
            .child(message_text(message.into()))
            .footer_button(
                Button::new("modal-ok")
                    .primary()
                    .label("OK")
                    .on_click(move |_: &ClickEvent, window, cx| dismiss(window, cx)),
            )
            .with_close_handler(on_dismiss)
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn footer_button(mut self, button: impl IntoElement) -> Self {
        self.footer.push(button.into_any_element());
        self
    }

    pub fn on_close(self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.with_close_handler(Rc::new(handler))
    }

    fn with_close_handler(mut self, handler: ModalHandler) -> Self {
        self.on_close = Some(handler);
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(SysColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .bg(theme.background)
                    .border_1()
                    .border_color(theme.border)
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(MODAL_MIN_WIDTH))
                    .max_w(px(MODAL_MAX_WIDTH))
                    .child(
                        h_flex()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(theme.border)
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_base()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(theme.foreground)
                                    .child(self.title),
                            )
                            .when_some(self.on_close, |this, handler| {
                                this.child(
                                    Button::new("modal-close")
                                        .ghost()
                                        .xsmall()
                                        .icon(IconName::Close)
                                        .on_click(move |_: &ClickEvent, window, cx| {
                                            handler(window, cx)
                                        }),
                                )
                            }),
                    )
                    .child(v_flex().px_6().py_4().gap_4().children(self.children))
                    .when(!self.footer.is_empty(), |this| {
                        this.child(
                            h_flex()
                                .px_6()
                                .py_3()
                                .gap_2()
                                .justify_end()
                                .border_t_1()
                                .border_color(theme.border)
                                .children(self.footer),
                        )
                    }),
            )
    }
}

fn message_text(message: SharedString) -> impl IntoElement {
    div().text_sm().whitespace_normal().child(message)
}
