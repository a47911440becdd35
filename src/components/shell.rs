//! Shell Layout
//!
//! Wraps every page: offline banner on top, page content, tab bar below.

use dioxus::prelude::*;
use esim_ui::OfflineBanner;

use crate::app::Route;
use crate::components::BottomTabs;
use crate::context::use_settings;

#[component]
pub fn Shell() -> Element {
    let settings = use_settings();

    rsx! {
        div { class: "app-shell",
            OfflineBanner { hide_delay: settings.config.hide_delay() }

            main { class: "app-content",
                Outlet::<Route> {}
            }

            BottomTabs {}
        }
    }
}
