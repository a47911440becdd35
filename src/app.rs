use std::sync::Arc;

use dioxus::prelude::*;
use esim_core::ManualConnectivity;
use esim_ui::{use_webview_connectivity, ConnectivityContext, HapticsContext, WebviewConnectivity};

use crate::components::Shell;
use crate::context::{get_settings, OwnedEsims};
use crate::pages::{CountryPackages, MyEsims, Profile, Shop};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Destination list with search
/// - `/country/:code` - Packages for one destination
/// - `/esims` - eSIMs bought in this session
/// - `/profile` - Connectivity and preferences
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Shop {},
        #[route("/country/:code")]
        CountryPackages { code: String },
        #[route("/esims")]
        MyEsims {},
        #[route("/profile")]
        Profile {},
}

/// Root application component.
///
/// Provides global styles, capability contexts, and routing.
#[component]
pub fn App() -> Element {
    let settings = use_hook(get_settings);

    // The webview bridge always runs; in offline demo mode its reports are
    // simply not observed.
    let webview = use_hook(|| Arc::new(WebviewConnectivity::new()));
    use_webview_connectivity(webview.clone());

    let start_offline = settings.start_offline;
    use_context_provider(move || {
        if start_offline {
            tracing::info!("Connectivity pinned offline");
            ConnectivityContext::new(Arc::new(ManualConnectivity::new(false)))
        } else {
            ConnectivityContext::new(webview)
        }
    });

    let haptics_enabled = use_signal(|| settings.config.haptics);
    use_context_provider(|| HapticsContext::new(haptics_enabled));

    let owned = use_signal(Vec::new);
    use_context_provider(|| OwnedEsims(owned));

    use_context_provider(|| settings.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
