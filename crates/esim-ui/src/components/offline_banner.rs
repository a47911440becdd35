//! Offline Banner Component
//!
//! Slides in when the platform reports no connectivity and slides out,
//! with the same exit delay as the swipe indicator, once it comes back.

use std::time::Duration;

use dioxus::prelude::*;
use esim_core::DEFAULT_HIDE_DELAY;

use crate::hooks::{use_online_status, use_presence};

#[component]
pub fn OfflineBanner(
    #[props(default = DEFAULT_HIDE_DELAY)]
    hide_delay: Duration,
) -> Element {
    let status = use_online_status();
    let presence = use_presence(move || !status().is_online(), hide_delay);

    if !presence.is_present() {
        return rsx! {};
    }

    let offline = !status().is_online();

    rsx! {
        div {
            class: if offline { "offline-banner" } else { "offline-banner leaving" },
            role: "alert",
            span { class: "offline-dot" }
            if offline {
                "You're offline"
            } else {
                "Back online"
            }
        }
    }
}
