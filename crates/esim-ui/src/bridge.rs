//! Webview capability bridges
//!
//! The desktop app renders inside a webview, so the platform signals are the
//! browser ones: `navigator.onLine`, the `online`/`offline` window events,
//! `visibilitychange`, and `navigator.vibrate`. These are reached through
//! `document::eval` and adapted to the `esim-core` capability traits.

use std::sync::Arc;

use dioxus::document;
use dioxus::prelude::*;
use esim_core::{ConnectivitySource, EnvironmentEvent, HapticPattern, Haptics};
use parking_lot::RwLock;
use serde::Deserialize;
use tokio::sync::broadcast;

/// Capacity of the bridge event channel
const BRIDGE_CHANNEL_CAPACITY: usize = 32;

/// Installs the browser listeners and forwards every change to Rust.
/// The returned promise never resolves so the channel stays open.
const CONNECTIVITY_SCRIPT: &str = r#"
const report = (kind) => dioxus.send({ kind: kind, online: navigator.onLine });
report("initial");
window.addEventListener("online", () => report("restored"));
window.addEventListener("offline", () => report("lost"));
document.addEventListener("visibilitychange", () => {
    if (document.visibilityState === "visible") {
        report("foreground");
    }
});
await new Promise(() => {});
"#;

/// Message posted by [`CONNECTIVITY_SCRIPT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BridgeReport {
    pub kind: BridgeKind,
    pub online: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeKind {
    Initial,
    Restored,
    Lost,
    Foreground,
}

impl BridgeKind {
    fn event(&self) -> EnvironmentEvent {
        match self {
            BridgeKind::Restored => EnvironmentEvent::ConnectivityRestored,
            BridgeKind::Lost => EnvironmentEvent::ConnectivityLost,
            // The first reading is treated as a re-check of the signal.
            BridgeKind::Initial | BridgeKind::Foreground => EnvironmentEvent::ForegroundRegained,
        }
    }
}

/// Connectivity source fed by the webview.
///
/// Until the script has reported, the signal is unavailable and observers
/// fail open.
pub struct WebviewConnectivity {
    online: RwLock<Option<bool>>,
    events: broadcast::Sender<EnvironmentEvent>,
}

impl Default for WebviewConnectivity {
    fn default() -> Self {
        let (events, _) = broadcast::channel(BRIDGE_CHANNEL_CAPACITY);
        Self {
            online: RwLock::new(None),
            events,
        }
    }
}

impl WebviewConnectivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a report from the webview and publish the matching event
    pub fn report(&self, report: BridgeReport) {
        *self.online.write() = Some(report.online);
        tracing::debug!(?report, "Webview connectivity report");
        let _ = self.events.send(report.kind.event());
    }
}

impl ConnectivitySource for WebviewConnectivity {
    fn is_online(&self) -> Option<bool> {
        *self.online.read()
    }

    fn subscribe(&self) -> broadcast::Receiver<EnvironmentEvent> {
        self.events.subscribe()
    }
}

/// Run the connectivity script for the lifetime of the calling component.
pub fn use_webview_connectivity(source: Arc<WebviewConnectivity>) {
    use_future(move || {
        let source = source.clone();
        async move {
            let mut eval = document::eval(CONNECTIVITY_SCRIPT);
            loop {
                match eval.recv::<BridgeReport>().await {
                    Ok(report) => source.report(report),
                    Err(e) => {
                        // No signal from the webview: observers keep failing open.
                        tracing::debug!(error = ?e, "Connectivity bridge closed");
                        break;
                    }
                }
            }
        }
    });
}

/// Vibration through `navigator.vibrate`, silently skipped when the
/// webview has no such API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewHaptics;

impl WebviewHaptics {
    fn script(pattern: HapticPattern) -> String {
        format!(
            "try {{ if (navigator.vibrate) {{ navigator.vibrate({}); }} }} catch (_) {{}}",
            pattern.to_js_array()
        )
    }
}

impl Haptics for WebviewHaptics {
    fn pulse(&self, pattern: HapticPattern) {
        // Fire-and-forget: the eval handle is dropped without awaiting.
        let _ = document::eval(&Self::script(pattern));
    }
}
