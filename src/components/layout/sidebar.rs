//! Sidebar Navigation Component
//!
//! One button per route, a theme switch and the collapse toggle. Collapsed,
//! only the icons remain and labels move into tooltips.

use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    tooltip::Tooltip,
    v_flex,
};
use sysclean_core::navigation::Route;
use sysclean_core::views::settings::PRODUCT_NAME;

use crate::app::actions::{ThemeAction, ToggleSidebar};
use crate::app::store::{AppState, AppStore};
use crate::assets::named_icon;
use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH};

const NAV_ITEM_HEIGHT: f32 = 40.0;

/// Sidebar navigation component
pub struct Sidebar {
    current_route: Route,
    collapsed: bool,
    app_state: Entity<AppState>,
    _subscriptions: Vec<Subscription>,
}

impl Sidebar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AppStore>();
        let app_state = store.app_state();
        let current_route = store.read(cx).route();
        let collapsed = store.read(cx).is_sidebar_collapsed();

        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            let state = model.read(cx);
            let (route, collapsed) = (state.route(), state.is_sidebar_collapsed());
            if this.current_route != route || this.collapsed != collapsed {
                this.current_route = route;
                this.collapsed = collapsed;
                cx.notify();
            }
        })];

        Self {
            current_route,
            collapsed,
            app_state,
            _subscriptions: subscriptions,
        }
    }

    fn render_nav_item(&self, ix: usize, route: Route, cx: &Context<Self>) -> impl IntoElement {
        let is_active = self.current_route == route;
        let collapsed = self.collapsed;
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;
        let app_state = self.app_state.clone();

        let btn = Button::new(("nav", ix))
            .ghost()
            .w_full()
            .h(px(NAV_ITEM_HEIGHT))
            .child(
                h_flex()
                    .w_full()
                    .gap_3()
                    .items_center()
                    .when(collapsed, |this| this.justify_center())
                    .child(named_icon(route.icon()))
                    .when(!collapsed, |this| this.child(Label::new(route.label()).text_sm())),
            )
            .on_click(move |_, _, cx| {
                app_state.update(cx, |state, cx| state.go_to(route, cx));
            });

        div()
            .id(("nav-item", ix))
            .when(collapsed, |this| {
                this.tooltip(move |window, cx| Tooltip::new(route.label()).build(window, cx))
            })
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }

    fn render_footer(&self, cx: &Context<Self>) -> impl IntoElement {
        let is_dark = cx.theme().is_dark();
        let collapsed = self.collapsed;

        let theme_toggle = Button::new("theme-toggle")
            .ghost()
            .small()
            .icon(if is_dark { IconName::Sun } else { IconName::Moon })
            .tooltip(if is_dark { "Light mode" } else { "Dark mode" })
            .on_click(move |_, window, cx| {
                let action = if is_dark {
                    ThemeAction::Light
                } else {
                    ThemeAction::Dark
                };
                window.dispatch_action(Box::new(action), cx);
            });

        let collapse_toggle = Button::new("sidebar-toggle")
            .ghost()
            .small()
            .icon(if collapsed {
                IconName::PanelLeftOpen
            } else {
                IconName::PanelLeftClose
            })
            .tooltip(if collapsed { "Expand sidebar" } else { "Collapse sidebar" })
            .on_click(|_, window, cx| {
                window.dispatch_action(Box::new(ToggleSidebar), cx);
            });

        let footer = if collapsed { v_flex() } else { h_flex() };
        footer
            .w_full()
            .p_2()
            .gap_1()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(cx.theme().border)
            .child(theme_toggle)
            .child(collapse_toggle)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let width = if self.collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };

        let items: Vec<_> = Route::ALL
            .iter()
            .enumerate()
            .map(|(ix, route)| self.render_nav_item(ix, *route, cx))
            .collect();

        v_flex()
            .id("sidebar")
            .w(px(width))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().sidebar)
            .child(
                h_flex()
                    .h(px(56.0))
                    .px_4()
                    .items_center()
                    .when(self.collapsed, |this| this.justify_center())
                    .child(named_icon("sparkles").text_color(cx.theme().primary))
                    .when(!self.collapsed, |this| {
                        this.child(
                            Label::new(PRODUCT_NAME)
                                .ml_2()
                                .text_lg()
                                .font_weight(gpui::FontWeight::SEMIBOLD),
                        )
                    }),
            )
            .child(v_flex().flex_1().pt_2().gap_1().children(items))
            .child(self.render_footer(cx))
    }
}
