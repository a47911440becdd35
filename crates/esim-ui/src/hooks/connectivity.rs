//! Online status hook

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use esim_core::{ConnectivityObserver, ConnectivitySource, ConnectivityState};

/// Connectivity source shared through context
#[derive(Clone)]
pub struct ConnectivityContext(pub Arc<dyn ConnectivitySource>);

impl ConnectivityContext {
    pub fn new(source: Arc<dyn ConnectivitySource>) -> Self {
        Self(source)
    }
}

/// Current connectivity of the platform.
///
/// Spawns an observer on the source from [`ConnectivityContext`]; the
/// observer and its subscription are released when the component unmounts.
///
/// # Example
///
/// ```rust,ignore
/// let status = use_online_status();
/// rsx! {
///     if !status().is_online() {
///         span { "You are offline" }
///     }
/// }
/// ```
pub fn use_online_status() -> Signal<ConnectivityState> {
    let ConnectivityContext(source) = use_context::<ConnectivityContext>();
    let handle = use_hook(move || Rc::new(ConnectivityObserver::spawn(source)));

    let initial = handle.state();
    let mut state = use_signal(move || initial);

    use_future(move || {
        let mut rx = handle.watch();
        async move {
            while rx.changed().await.is_ok() {
                let next = *rx.borrow_and_update();
                state.set(next);
            }
        }
    });

    state
}
