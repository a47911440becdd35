//! Connectivity observation
//!
//! Tracks whether the host platform reports network connectivity. The
//! platform is modelled as a [`ConnectivitySource`]: a readable boolean plus
//! a broadcast stream of [`EnvironmentEvent`]s.
//!
//! ```text
//! ConnectivitySource ──broadcast──▶ ConnectivityObserver ──watch──▶ consumers
//!   is_online()                      Restored  -> Online
//!   subscribe()                      Lost      -> Offline
//!                                    Regained  -> re-query is_online()
//! ```
//!
//! The observer never polls and never touches the network. When the source
//! cannot say anything (`is_online() == None`) the observer fails open and
//! reports [`ConnectivityState::Online`].

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Capacity of the in-process event channel
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Whether the platform currently reports connectivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityState {
    #[default]
    Online,
    Offline,
}

impl ConnectivityState {
    /// Map a platform boolean, failing open when the signal is unavailable
    pub fn from_signal(online: Option<bool>) -> Self {
        match online {
            Some(false) => ConnectivityState::Offline,
            Some(true) | None => ConnectivityState::Online,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, ConnectivityState::Online)
    }
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityState::Online => write!(f, "Online"),
            ConnectivityState::Offline => write!(f, "Offline"),
        }
    }
}

/// Ambient events published by a connectivity source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentEvent {
    /// The platform regained connectivity
    ConnectivityRestored,
    /// The platform lost connectivity
    ConnectivityLost,
    /// The app came back to the foreground; restore/lost events may have
    /// been missed in the meantime
    ForegroundRegained,
}

/// A platform-provided connectivity signal.
///
/// Sources are shared process-wide: every observer subscribes on its own and
/// receives the same events.
pub trait ConnectivitySource: Send + Sync + 'static {
    /// Current platform value, `None` when the platform exposes no signal
    fn is_online(&self) -> Option<bool>;

    /// Subscribe to connectivity events
    fn subscribe(&self) -> broadcast::Receiver<EnvironmentEvent>;
}

/// In-process connectivity source driven by explicit calls.
///
/// Used as a deterministic stand-in for the platform signal and to start
/// the app in a simulated offline mode.
pub struct ManualConnectivity {
    online: RwLock<Option<bool>>,
    events: broadcast::Sender<EnvironmentEvent>,
}

impl ManualConnectivity {
    pub fn new(online: bool) -> Self {
        Self::with_signal(Some(online))
    }

    /// A source whose platform value is unavailable
    pub fn unavailable() -> Self {
        Self::with_signal(None)
    }

    fn with_signal(online: Option<bool>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            online: RwLock::new(online),
            events,
        }
    }

    /// Mark online and publish `ConnectivityRestored`
    pub fn go_online(&self) {
        *self.online.write() = Some(true);
        self.emit(EnvironmentEvent::ConnectivityRestored);
    }

    /// Mark offline and publish `ConnectivityLost`
    pub fn go_offline(&self) {
        *self.online.write() = Some(false);
        self.emit(EnvironmentEvent::ConnectivityLost);
    }

    /// Change the platform value without publishing anything, as happens
    /// while the app is backgrounded
    pub fn set_silently(&self, online: Option<bool>) {
        *self.online.write() = online;
    }

    /// Publish `ForegroundRegained`
    pub fn regain_foreground(&self) {
        self.emit(EnvironmentEvent::ForegroundRegained);
    }

    /// Publish an arbitrary event
    pub fn emit(&self, event: EnvironmentEvent) {
        // No receivers is fine: nobody is observing yet.
        let _ = self.events.send(event);
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }
}

impl ConnectivitySource for ManualConnectivity {
    fn is_online(&self) -> Option<bool> {
        *self.online.read()
    }

    fn subscribe(&self) -> broadcast::Receiver<EnvironmentEvent> {
        self.events.subscribe()
    }
}

/// Observes a [`ConnectivitySource`] and holds the current state.
pub struct ConnectivityObserver {
    source: Arc<dyn ConnectivitySource>,
    state: watch::Sender<ConnectivityState>,
}

impl ConnectivityObserver {
    /// Create an observer, reading the current ambient value synchronously
    pub fn new(source: Arc<dyn ConnectivitySource>) -> Self {
        let initial = ConnectivityState::from_signal(source.is_online());
        tracing::debug!(state = %initial, "Connectivity observer created");
        let (state, _) = watch::channel(initial);
        Self { source, state }
    }

    /// Create an observer and start listening for events on the current
    /// tokio runtime
    pub fn spawn(source: Arc<dyn ConnectivitySource>) -> ObserverHandle {
        // Subscribe before reading so no event slips between the two.
        let events = source.subscribe();
        let observer = Arc::new(Self::new(source));
        let task = tokio::spawn(observer.clone().listen(events));
        ObserverHandle {
            observer,
            task: Some(task),
        }
    }

    /// Current state
    pub fn state(&self) -> ConnectivityState {
        *self.state.borrow()
    }

    /// Receiver that is notified whenever the state changes
    pub fn watch(&self) -> watch::Receiver<ConnectivityState> {
        self.state.subscribe()
    }

    /// Apply a single event. Returns true if the state changed.
    pub fn apply(&self, event: EnvironmentEvent) -> bool {
        let next = match event {
            EnvironmentEvent::ConnectivityRestored => ConnectivityState::Online,
            EnvironmentEvent::ConnectivityLost => ConnectivityState::Offline,
            EnvironmentEvent::ForegroundRegained => self.requery(),
        };
        self.set(next, event)
    }

    fn requery(&self) -> ConnectivityState {
        ConnectivityState::from_signal(self.source.is_online())
    }

    fn set(&self, next: ConnectivityState, cause: EnvironmentEvent) -> bool {
        let changed = self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if changed {
            tracing::info!(state = %next, ?cause, "Connectivity changed");
        }
        changed
    }

    async fn listen(self: Arc<Self>, mut events: broadcast::Receiver<EnvironmentEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => {
                    self.apply(event);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Connectivity events lagged, re-reading signal");
                    self.set(self.requery(), EnvironmentEvent::ForegroundRegained);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("Connectivity source closed");
                    break;
                }
            }
        }
    }
}

/// A running observer. Dropping the handle releases the subscription.
pub struct ObserverHandle {
    observer: Arc<ConnectivityObserver>,
    task: Option<JoinHandle<()>>,
}

impl ObserverHandle {
    pub fn state(&self) -> ConnectivityState {
        self.observer.state()
    }

    pub fn watch(&self) -> watch::Receiver<ConnectivityState> {
        self.observer.watch()
    }

    /// Stop listening and wait for the listener task to finish
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer_for(source: &Arc<ManualConnectivity>) -> ConnectivityObserver {
        ConnectivityObserver::new(source.clone())
    }

    #[test]
    fn initial_state_reads_signal() {
        let online = Arc::new(ManualConnectivity::new(true));
        assert_eq!(observer_for(&online).state(), ConnectivityState::Online);

        let offline = Arc::new(ManualConnectivity::new(false));
        assert_eq!(observer_for(&offline).state(), ConnectivityState::Offline);
    }

    #[test]
    fn unavailable_signal_fails_open() {
        let source = Arc::new(ManualConnectivity::unavailable());
        assert_eq!(observer_for(&source).state(), ConnectivityState::Online);
    }

    #[test]
    fn restored_and_lost_events() {
        let source = Arc::new(ManualConnectivity::new(true));
        let observer = observer_for(&source);

        assert!(observer.apply(EnvironmentEvent::ConnectivityLost));
        assert_eq!(observer.state(), ConnectivityState::Offline);

        assert!(observer.apply(EnvironmentEvent::ConnectivityRestored));
        assert_eq!(observer.state(), ConnectivityState::Online);
    }

    #[test]
    fn foreground_regained_requeries_signal() {
        let source = Arc::new(ManualConnectivity::new(true));
        let observer = observer_for(&source);

        source.set_silently(Some(false));
        assert_eq!(observer.state(), ConnectivityState::Online);

        assert!(observer.apply(EnvironmentEvent::ForegroundRegained));
        assert_eq!(observer.state(), ConnectivityState::Offline);
    }

    #[test]
    fn unchanged_recheck_is_noop() {
        let source = Arc::new(ManualConnectivity::new(true));
        let observer = observer_for(&source);
        let rx = observer.watch();

        assert!(!observer.apply(EnvironmentEvent::ForegroundRegained));
        assert!(!observer.apply(EnvironmentEvent::ConnectivityRestored));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn from_signal_mapping() {
        assert_eq!(ConnectivityState::from_signal(Some(true)), ConnectivityState::Online);
        assert_eq!(ConnectivityState::from_signal(Some(false)), ConnectivityState::Offline);
        assert_eq!(ConnectivityState::from_signal(None), ConnectivityState::Online);
        assert_eq!(ConnectivityState::Offline.to_string(), "Offline");
    }
}
