//! Trailing slot shared by the selection cards

use dioxus::prelude::*;
use esim_core::PriceSlot;

/// Price text, or a chevron when there is nothing to show
#[component]
pub fn CardTrailing(slot: PriceSlot) -> Element {
    match slot {
        PriceSlot::Price(text) => rsx! {
            span { class: "card-price", "{text}" }
        },
        PriceSlot::Affordance => rsx! {
            span { class: "card-chevron", "aria-hidden": "true",
                // Lucide chevron-right icon
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "m9 18 6-6-6-6" }
                }
            }
        },
    }
}
