//! Package Card Component
//!
//! A data package: allowance, feature list, popular badge and price.

use dioxus::prelude::*;
use esim_core::{Package, PriceSlot};

use super::{select_entity, CardTrailing};

/// CSS classes for a package card
pub fn package_card_class(popular: bool, owned: bool) -> String {
    let mut class = String::from("package-card");
    if popular {
        class.push_str(" popular");
    }
    if owned {
        class.push_str(" owned");
    }
    class
}

/// Package Card
///
/// Pure view of a [`Package`]. Clicking anywhere on the card calls
/// `on_select` once with the package.
#[component]
pub fn PackageCard(
    package: Package,
    #[props(default = true)]
    show_price: bool,
    /// Already bought in this session
    #[props(default = false)]
    owned: bool,
    #[props(default = 0)]
    index: usize,
    on_select: EventHandler<Package>,
) -> Element {
    let slot = PriceSlot::resolve(show_price, Some(&package.price));
    let class = package_card_class(package.popular, owned);
    let selected = package.clone();

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            style: "--index: {index}",
            "aria-label": "{package.name}",
            onclick: move |_| select_entity(&selected, |entity| on_select.call(entity)),

            div { class: "package-header",
                span { class: "package-name", "{package.name}" }
                if package.popular {
                    span { class: "package-badge", "Popular" }
                }
            }

            span { class: "package-allowance", "{package.allowance()}" }

            if !package.features.is_empty() {
                ul { class: "package-features",
                    for feature in package.features.iter() {
                        li { key: "{feature}", "{feature}" }
                    }
                }
            }

            CardTrailing { slot }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_classes() {
        assert_eq!(package_card_class(false, false), "package-card");
        assert_eq!(package_card_class(true, false), "package-card popular");
        assert_eq!(package_card_class(true, true), "package-card popular owned");
    }
}
