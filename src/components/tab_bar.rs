//! Bottom Tab Bar Component
//!
//! Phone-style tab bar. The active tab is derived from the current route
//! alone; tapping a tab pulses haptics and navigates.

use dioxus::prelude::*;
use esim_core::{Router, TabBar, TabIcon};
use esim_ui::use_haptics;

use crate::app::Route;

/// Adapts the Dioxus router to the tab bar's `Router` trait
struct AppRouter {
    current: Route,
    navigator: Navigator,
}

impl Router for AppRouter {
    fn current_route(&self) -> String {
        self.current.to_string()
    }

    fn navigate(&mut self, route: &str) {
        match route.parse::<Route>() {
            Ok(target) => {
                self.navigator.push(target.clone());
                self.current = target;
            }
            Err(e) => {
                tracing::warn!(route, error = %e, "Tab route is not routable");
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab-item active"
    } else {
        "tab-item"
    }
}

/// Bottom tab bar
///
/// Shows: Shop | My eSIMs | Profile
#[component]
pub fn BottomTabs() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let haptics = use_haptics();
    let bar = use_hook(TabBar::default);

    let current = route.to_string();

    rsx! {
        nav { class: "tab-bar", role: "tablist",
            for tab in bar.tabs().iter().copied() {
                {
                    let active = bar.is_active(tab.id, &current);
                    let bar = bar.clone();
                    let route = route.clone();
                    rsx! {
                        button {
                            key: "{tab.id}",
                            r#type: "button",
                            role: "tab",
                            class: tab_class(active),
                            "aria-selected": "{active}",
                            onclick: move |_| {
                                let mut router = AppRouter {
                                    current: route.clone(),
                                    navigator,
                                };
                                if let Err(e) = bar.activate(tab.id, &mut router, &haptics) {
                                    tracing::warn!(error = %e, "Tab activation failed");
                                }
                            },

                            span { class: "tab-icon",
                                {render_tab_icon(tab.icon)}
                            }
                            span { class: "tab-label", "{tab.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Render Lucide icon for a tab
fn render_tab_icon(icon: TabIcon) -> Element {
    match icon {
        TabIcon::Globe => rsx! {
            // Lucide globe icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
                path { d: "M2 12h20" }
            }
        },
        TabIcon::Sim => rsx! {
            // Lucide smartphone icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { width: "14", height: "20", x: "5", y: "2", rx: "2", ry: "2" }
                path { d: "M12 18h.01" }
            }
        },
        TabIcon::User => rsx! {
            // Lucide user icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "8", r: "5" }
                path { d: "M20 21a8 8 0 0 0-16 0" }
            }
        },
    }
}
