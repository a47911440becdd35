//! Shop page - destination list with search.

use dioxus::prelude::*;
use esim_core::Country;
use esim_ui::CountryCard;

use crate::app::Route;
use crate::context::use_settings;

#[component]
pub fn Shop() -> Element {
    let navigator = use_navigator();
    let settings = use_settings();
    let mut query = use_signal(String::new);

    let countries: Vec<Country> = settings
        .catalog
        .search(&query())
        .into_iter()
        .cloned()
        .collect();

    let on_select = move |country: Country| {
        tracing::debug!(code = %country.code, "Country selected");
        navigator.push(Route::CountryPackages { code: country.code });
    };

    rsx! {
        section { class: "page shop-page",
            header { class: "page-header",
                h1 { class: "page-title", "Where are you going?" }
                p { class: "page-subtitle", "Data packages for {settings.catalog.countries().len()} destinations" }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search country or code",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }

            if countries.is_empty() {
                div { class: "empty-state",
                    "No destination matches \"{query}\""
                }
            } else {
                div { class: "card-list",
                    for (index, country) in countries.into_iter().enumerate() {
                        CountryCard {
                            key: "{country.code}",
                            country: country.clone(),
                            show_price: true,
                            index,
                            on_select,
                        }
                    }
                }
            }
        }
    }
}
