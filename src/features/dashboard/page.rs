//! Dashboard Page
//!
//! Junk size per category, overall health and the scan / clean all actions.

use gpui::{
    ClickEvent, Context, Entity, Hsla, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window, div, prelude::*, px, relative,
};
use gpui_component::{
    ActiveTheme, Disableable, Icon, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use sysclean_core::format::format_size;
use sysclean_core::views::DashboardView;

use crate::app::store::AppStore;
use crate::assets::{CustomIconName, named_icon};
use crate::components::layout::PageHeader;
use crate::features::dashboard::controller::DashboardController;
use crate::theme::colors::SysColors;

/// Dashboard page component
pub struct DashboardPage {
    view: Entity<DashboardView>,
    controller: DashboardController,
    _subscriptions: Vec<Subscription>,
}

impl DashboardPage {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AppStore>().clone();
        let view = cx.new(|_| DashboardView::new());
        let controller = DashboardController::new(view.clone(), store.services().clone());

        let subscriptions = vec![cx.observe(&view, |_, _, cx| cx.notify())];

        controller.refresh(cx);

        Self {
            view,
            controller,
            _subscriptions: subscriptions,
        }
    }

    fn render_card(
        &self,
        icon: impl Into<Icon>,
        title: &'static str,
        size: u64,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let icon: Icon = icon.into();
        v_flex()
            .flex_1()
            .min_w(px(160.))
            .gap_2()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(
                h_flex()
                    .gap_2()
                    .text_color(cx.theme().muted_foreground)
                    .child(icon.small())
                    .child(Label::new(title).text_sm()),
            )
            .child(div().text_2xl().font_semibold().child(format_size(size)))
    }

    fn render_status(&self, cx: &Context<Self>) -> impl IntoElement {
        let view = self.view.read(cx);
        let status = view.status();
        let color = SysColors::status(status, cx);

        h_flex()
            .gap_4()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                v_flex()
                    .flex_1()
                    .gap_1()
                    .child(
                        Label::new("Total junk")
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        div()
                            .text_3xl()
                            .font_semibold()
                            .child(format_size(view.total_junk())),
                    ),
            )
            .child(
                v_flex()
                    .items_end()
                    .gap_1()
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_full()
                            .bg(SysColors::status_bg(status, cx))
                            .text_color(color)
                            .text_sm()
                            .child(status.label()),
                    )
                    .child(
                        Label::new(format!("Health score {}", view.health_score()))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
    }

    fn render_progress(&self, cx: &Context<Self>) -> impl IntoElement {
        let progress = self.view.read(cx).scan_progress();
        let fill: Hsla = cx.theme().primary;

        v_flex()
            .gap_1()
            .child(
                h_flex()
                    .justify_between()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Scanning...")
                    .child(SharedString::from(format!("{progress:.0}%"))),
            )
            .child(
                div()
                    .h(px(6.))
                    .w_full()
                    .rounded_full()
                    .bg(cx.theme().secondary)
                    .child(
                        div()
                            .h_full()
                            .rounded_full()
                            .bg(fill)
                            .w(relative(progress / 100.0)),
                    ),
            )
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.view.read(cx);
        let scanning = view.is_scanning();
        let cleaning = view.is_cleaning();
        let refreshing = view.is_refreshing();
        let nothing_to_clean = view.total_junk() == 0;
        let (cache, trash, logs, large) = (
            view.cache_size(),
            view.trash_size(),
            view.log_size(),
            view.large_file_size(),
        );

        v_flex()
            .size_full()
            .relative()
            .p_6()
            .gap_4()
            .child(
                PageHeader::new("Dashboard")
                    .description("Overview of reclaimable disk space")
                    .action(
                        Button::new("dashboard-scan")
                            .ghost()
                            .small()
                            .icon(CustomIconName::Scan)
                            .label("Scan")
                            .loading(scanning)
                            .disabled(scanning || cleaning)
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.controller.scan(cx);
                            })),
                    )
                    .action(
                        Button::new("dashboard-clean-all")
                            .primary()
                            .small()
                            .icon(CustomIconName::Sparkles)
                            .label("Clean All")
                            .loading(cleaning)
                            .disabled(cleaning || scanning || refreshing || nothing_to_clean)
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.controller.clean_all(cx);
                            })),
                    ),
            )
            .child(self.render_status(cx))
            .when(scanning, |this| this.child(self.render_progress(cx)))
            .child(
                h_flex()
                    .flex_wrap()
                    .gap_4()
                    .child(self.render_card(named_icon("brush-cleaning"), "Cache", cache, cx))
                    .child(self.render_card(CustomIconName::Trash, "Trash", trash, cx))
                    .child(self.render_card(named_icon("file-text"), "Logs", logs, cx))
                    .child(self.render_card(named_icon("hard-drive"), "Large Files", large, cx)),
            )
    }
}
