//! My eSIMs page - packages bought in this session.

use dioxus::prelude::*;
use esim_core::Package;
use esim_ui::PackageCard;

use crate::app::Route;
use crate::context::use_owned_esims;

#[component]
pub fn MyEsims() -> Element {
    let navigator = use_navigator();
    let owned = use_owned_esims();
    let packages: Vec<Package> = owned();

    let on_select = move |package: Package| {
        navigator.push(Route::CountryPackages {
            code: package.country_code,
        });
    };

    rsx! {
        section { class: "page esims-page",
            header { class: "page-header",
                h1 { class: "page-title", "My eSIMs" }
            }

            if packages.is_empty() {
                div { class: "empty-state",
                    p { "No eSIMs yet." }
                    Link { to: Route::Shop {}, class: "back-link", "Browse destinations" }
                }
            } else {
                div { class: "card-list",
                    for (index, package) in packages.into_iter().enumerate() {
                        PackageCard {
                            key: "{package.id}",
                            package: package.clone(),
                            show_price: false,
                            owned: true,
                            index,
                            on_select,
                        }
                    }
                }
            }
        }
    }
}
