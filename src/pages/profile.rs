//! Profile page - connectivity and preferences.

use dioxus::prelude::*;
use esim_ui::{use_haptics, use_online_status};

use crate::context::{use_owned_esims, use_settings};

#[component]
pub fn Profile() -> Element {
    let settings = use_settings();
    let status = use_online_status();
    let mut haptics = use_haptics();
    let owned = use_owned_esims();

    let online = status().is_online();
    let haptics_on = haptics.enabled();

    rsx! {
        section { class: "page profile-page",
            header { class: "page-header",
                h1 { class: "page-title", "Profile" }
            }

            dl { class: "settings-list",
                div { class: "settings-row",
                    dt { "Connection" }
                    dd { class: if online { "status online" } else { "status offline" },
                        "{status}"
                    }
                }
                div { class: "settings-row",
                    dt { "eSIMs bought" }
                    dd { "{owned.read().len()}" }
                }
                div { class: "settings-row",
                    dt { "Hint fade-out" }
                    dd { "{settings.config.hide_delay_ms} ms" }
                }
                div { class: "settings-row",
                    dt { "Haptic feedback" }
                    dd {
                        button {
                            r#type: "button",
                            class: if haptics_on { "toggle on" } else { "toggle" },
                            role: "switch",
                            "aria-checked": "{haptics_on}",
                            onclick: move |_| haptics.set_enabled(!haptics_on),
                            if haptics_on { "On" } else { "Off" }
                        }
                    }
                }
            }
        }
    }
}
