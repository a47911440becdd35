//! Country Card Component
//!
//! One destination in the shop list: flag, name, region and either the
//! starting price or a chevron.

use dioxus::prelude::*;
use esim_core::{Country, PriceSlot};

use super::{select_entity, CardTrailing};

/// Country Card
///
/// The whole card is the hit target. Each activation calls `on_select`
/// once with the country it was given.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CountryCard {
///         country: japan.clone(),
///         show_price: true,
///         on_select: move |country: Country| navigate_to(country.code),
///     }
/// }
/// ```
#[component]
pub fn CountryCard(
    country: Country,
    /// Show "From $x" instead of the chevron
    #[props(default = false)]
    show_price: bool,
    /// Index for staggered animation
    #[props(default = 0)]
    index: usize,
    on_select: EventHandler<Country>,
) -> Element {
    let slot = PriceSlot::starting_from(show_price, country.starting_price.as_ref());
    let selected = country.clone();

    rsx! {
        button {
            r#type: "button",
            class: "country-card",
            style: "--index: {index}",
            "aria-label": "{country.name}",
            onclick: move |_| select_entity(&selected, |entity| on_select.call(entity)),

            span { class: "country-flag", "{country.flag}" }

            div { class: "country-info",
                span { class: "country-name", "{country.name}" }
                span { class: "country-region", "{country.region}" }
            }

            CardTrailing { slot }
        }
    }
}
