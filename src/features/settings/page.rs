//! Settings Page

use gpui::{
    AnyElement, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Disableable, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use sysclean_core::views::SettingsView;
use sysclean_core::views::settings::{COMPANY_NAME, PRODUCT_NAME, YEAR_CREATED};

use crate::app::actions::ThemeAction;
use crate::app::store::AppStore;
use crate::components::composite::modal::Modal;
use crate::components::layout::PageHeader;
use crate::components::primitives::Checkbox;
use crate::features::settings::controller::SettingsController;

/// Settings page component
pub struct SettingsPage {
    view: Entity<SettingsView>,
    controller: SettingsController,
    dark_mode: bool,
    _subscriptions: Vec<Subscription>,
}

impl SettingsPage {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AppStore>().clone();
        let settings = store.read(cx).settings().clone();
        let dark_mode = settings.dark_mode;

        let view = cx.new(|_| SettingsView::new(settings));
        let controller = SettingsController::new(view.clone(), store.services().clone());

        let subscriptions = vec![
            cx.observe(&view, |_, _, cx| cx.notify()),
            cx.observe(&store.app_state(), |this, state, cx| {
                this.dark_mode = state.read(cx).settings().dark_mode;
                cx.notify();
            }),
        ];

        controller.fetch_release_date(cx);

        Self {
            view,
            controller,
            dark_mode,
            _subscriptions: subscriptions,
        }
    }

    fn render_section(
        &self,
        title: &'static str,
        rows: Vec<AnyElement>,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_3()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(Label::new(title).font_semibold())
            .children(rows)
    }

    fn info_row(
        label: &'static str,
        value: impl Into<SharedString>,
        cx: &Context<Self>,
    ) -> AnyElement {
        h_flex()
            .justify_between()
            .text_sm()
            .child(div().text_color(cx.theme().muted_foreground).child(label))
            .child(value.into())
            .into_any_element()
    }

    fn render_preferences(&self, cx: &Context<Self>) -> impl IntoElement {
        let view = self.view.read(cx);
        let deep_scan = view.deep_scan();
        let auto_clean = view.auto_clean();
        let dark_mode = self.dark_mode;
        let deep_scan_controller = self.controller.clone();
        let auto_clean_controller = self.controller.clone();

        let rows = vec![
            Checkbox::new("setting-deep-scan")
                .label("Deep scan")
                .checked(deep_scan)
                .on_change(move |_, _, cx| deep_scan_controller.toggle_deep_scan(cx))
                .into_any_element(),
            Checkbox::new("setting-auto-clean")
                .label("Clean automatically after a scan")
                .checked(auto_clean)
                .on_change(move |_, _, cx| auto_clean_controller.toggle_auto_clean(cx))
                .into_any_element(),
            Checkbox::new("setting-dark-mode")
                .label("Dark mode")
                .checked(dark_mode)
                .on_change(|checked, window, cx| {
                    let action = if checked {
                        ThemeAction::Dark
                    } else {
                        ThemeAction::Light
                    };
                    window.dispatch_action(Box::new(action), cx);
                })
                .into_any_element(),
        ];
        self.render_section("Preferences", rows, cx)
    }

    fn render_about(&self, cx: &Context<Self>) -> impl IntoElement {
        let view = self.view.read(cx);
        let checking = view.is_checking();
        let mut rows = vec![
            Self::info_row("Product", PRODUCT_NAME, cx),
            Self::info_row("Version", view.version(), cx),
            Self::info_row("Released", view.date_version().to_string(), cx),
            Self::info_row("Last checked", view.date_check().to_string(), cx),
            Self::info_row("Copyright", format!("© {YEAR_CREATED} {COMPANY_NAME}"), cx),
        ];
        if let Some(latest) = view.latest_version().filter(|_| view.is_update_available()) {
            rows.push(Self::info_row("Latest version", latest.to_string(), cx));
        }
        rows.push(
            h_flex()
                .justify_end()
                .child(
                    Button::new("check-update")
                        .primary()
                        .small()
                        .label("Check for updates")
                        .loading(checking)
                        .disabled(checking)
                        .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                            this.controller.check_update(cx);
                        })),
                )
                .into_any_element(),
        );
        self.render_section("About", rows, cx)
    }

    fn render_dialog(&self, cx: &Context<Self>) -> Option<AnyElement> {
        let message = self.view.read(cx).alert()?.to_string();
        let controller = self.controller.clone();
        Some(
            Modal::alert("Updates", message, move |_, cx| controller.dismiss_alert(cx))
                .into_any_element(),
        )
    }
}

impl Render for SettingsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let preferences = self.render_preferences(cx);
        let about = self.render_about(cx);
        let dialog = self.render_dialog(cx);

        v_flex()
            .size_full()
            .relative()
            .p_6()
            .gap_4()
            .child(PageHeader::new("Settings").description("Preferences and application info"))
            .child(v_flex().max_w(px(640.)).gap_4().child(preferences).child(about))
            .children(dialog)
    }
}
