//! Country packages page - pick a data package for one destination.

use dioxus::prelude::*;
use esim_core::{HapticPattern, Haptics, Package};
use esim_ui::{use_haptics, PackageCard, SwipeIndicator};

use crate::app::Route;
use crate::context::{use_owned_esims, use_settings};

#[component]
pub fn CountryPackages(code: String) -> Element {
    let settings = use_settings();
    let haptics = use_haptics();
    let mut owned = use_owned_esims();
    let mut dragging = use_signal(|| false);
    let mut last_added: Signal<Option<String>> = use_signal(|| None);

    let country = settings.catalog.country(&code).ok().cloned();
    let packages: Vec<Package> = settings
        .catalog
        .packages_for(&code)
        .map(|packages| packages.into_iter().cloned().collect())
        .unwrap_or_default();

    let Some(country) = country else {
        tracing::warn!(code = %code, "Unknown destination");
        return rsx! {
            section { class: "page",
                div { class: "empty-state",
                    p { "We don't sell eSIMs for \"{code}\" yet." }
                    Link { to: Route::Shop {}, class: "back-link", "Back to all destinations" }
                }
            }
        };
    };

    let on_select = move |package: Package| {
        if owned.peek().iter().any(|p| p.id == package.id) {
            haptics.pulse(HapticPattern::Error);
            return;
        }
        haptics.pulse(HapticPattern::Success);
        tracing::info!(package = %package.id, price = %package.price, "Package added");
        last_added.set(Some(package.name.clone()));
        owned.write().push(package);
    };

    rsx! {
        section { class: "page packages-page",
            header { class: "page-header",
                Link { to: Route::Shop {}, class: "back-link", "‹ All destinations" }
                h1 { class: "page-title",
                    span { class: "country-flag", "{country.flag}" }
                    " {country.name}"
                }
                p { class: "page-subtitle", "{packages.len()} packages" }
            }

            if let Some(name) = last_added() {
                div { class: "added-notice", role: "status",
                    "{name} added to My eSIMs"
                }
            }

            div {
                class: "card-list",
                onpointerdown: move |_| dragging.set(true),
                onpointerup: move |_| dragging.set(false),
                onpointercancel: move |_| dragging.set(false),
                onpointerleave: move |_| dragging.set(false),

                for (index, package) in packages.into_iter().enumerate() {
                    {
                        let is_owned = owned.read().iter().any(|p| p.id == package.id);
                        rsx! {
                            PackageCard {
                                key: "{package.id}",
                                package: package.clone(),
                                owned: is_owned,
                                index,
                                on_select,
                            }
                        }
                    }
                }
            }

            SwipeIndicator {
                visible: dragging(),
                hide_delay: settings.config.hide_delay(),
            }
        }
    }
}
