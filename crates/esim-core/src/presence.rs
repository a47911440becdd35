//! Render presence for transient elements
//!
//! Separates *visibility intent* (what the caller wants) from *render
//! presence* (whether the element is mounted). Presence follows intent
//! immediately on the way up and lags it by a fixed delay on the way down,
//! which leaves room for an exit animation.
//!
//! ```text
//!            intent=true                  intent=false
//!   Hidden ─────────────▶ Shown ───────────────────────▶ Disappearing
//!     ▲                     ▲                                 │
//!     │                     └────── intent=true (cancel) ─────┤
//!     └──────────────────── countdown expired ────────────────┘
//! ```
//!
//! [`PresenceController`] is the pure state machine; it never sleeps and
//! tells its driver what to do through [`PresenceCommand`]s.
//! [`PresenceTimer`] drives it on tokio with exactly one cancellable
//! countdown handle.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Default delay between intent turning false and the element unmounting
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(300);

/// Identifies one hide countdown. Expiries carrying an outdated id are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountdownId(u64);

/// Where the element is in its show/hide cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresencePhase {
    /// Not rendered
    #[default]
    Hidden,
    /// Rendered and intended to be visible
    Shown,
    /// Still rendered while the exit countdown runs
    Disappearing,
}

impl PresencePhase {
    pub fn is_present(&self) -> bool {
        !matches!(self, PresencePhase::Hidden)
    }
}

/// Work the driver has to perform after an intent change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceCommand {
    None,
    /// Start a countdown and call [`PresenceController::expire`] with `id`
    /// once `after` has elapsed
    Schedule { id: CountdownId, after: Duration },
    /// Drop the countdown with `id` without firing it
    Cancel(CountdownId),
}

#[derive(Debug, Clone, Copy)]
struct Countdown {
    id: CountdownId,
    started: Instant,
    delay: Duration,
}

/// Pure presence state machine
#[derive(Debug, Clone)]
pub struct PresenceController {
    phase: PresencePhase,
    delay: Duration,
    countdown: Option<Countdown>,
    next_id: u64,
}

impl Default for PresenceController {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_DELAY)
    }
}

impl PresenceController {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: PresencePhase::Hidden,
            delay,
            countdown: None,
            next_id: 0,
        }
    }

    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the hide delay. A countdown already running keeps the delay
    /// it was scheduled with.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn is_present(&self) -> bool {
        self.phase.is_present()
    }

    /// The countdown currently running, if any
    pub fn pending(&self) -> Option<CountdownId> {
        self.countdown.map(|c| c.id)
    }

    /// Feed the latest visibility intent
    pub fn set_intent(&mut self, intent: bool, now: Instant) -> PresenceCommand {
        match (self.phase, intent) {
            (PresencePhase::Hidden, true) => {
                self.phase = PresencePhase::Shown;
                PresenceCommand::None
            }
            (PresencePhase::Disappearing, true) => {
                self.phase = PresencePhase::Shown;
                match self.countdown.take() {
                    Some(countdown) => PresenceCommand::Cancel(countdown.id),
                    None => PresenceCommand::None,
                }
            }
            (PresencePhase::Shown, false) => {
                let id = CountdownId(self.next_id);
                self.next_id += 1;
                self.countdown = Some(Countdown {
                    id,
                    started: now,
                    delay: self.delay,
                });
                self.phase = PresencePhase::Disappearing;
                PresenceCommand::Schedule {
                    id,
                    after: self.delay,
                }
            }
            (PresencePhase::Shown, true)
            | (PresencePhase::Hidden, false)
            | (PresencePhase::Disappearing, false) => PresenceCommand::None,
        }
    }

    /// A countdown elapsed. Returns true if the element is now hidden.
    pub fn expire(&mut self, id: CountdownId) -> bool {
        match self.countdown {
            Some(countdown)
                if countdown.id == id && self.phase == PresencePhase::Disappearing =>
            {
                self.countdown = None;
                self.phase = PresencePhase::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Animation progress: 1.0 fully shown, 0.0 fully hidden, decaying
    /// linearly over the delay while disappearing
    pub fn progress(&self, now: Instant) -> f32 {
        match (self.phase, self.countdown) {
            (PresencePhase::Shown, _) => 1.0,
            (PresencePhase::Hidden, _) => 0.0,
            (PresencePhase::Disappearing, Some(countdown)) => {
                if countdown.delay.is_zero() {
                    return 0.0;
                }
                let elapsed = now.saturating_duration_since(countdown.started);
                let fraction = elapsed.as_secs_f32() / countdown.delay.as_secs_f32();
                (1.0 - fraction).clamp(0.0, 1.0)
            }
            (PresencePhase::Disappearing, None) => 0.0,
        }
    }
}

struct TimerState {
    controller: PresenceController,
    pending: Option<(CountdownId, JoinHandle<()>)>,
}

struct TimerShared {
    state: Mutex<TimerState>,
    presence: watch::Sender<bool>,
}

/// Drives a [`PresenceController`] on the tokio runtime.
///
/// Holds at most one countdown task; cancelling aborts it. Presence changes
/// are published on a watch channel.
pub struct PresenceTimer {
    shared: Arc<TimerShared>,
}

impl Default for PresenceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_DELAY)
    }
}

impl PresenceTimer {
    pub fn new(delay: Duration) -> Self {
        let (presence, _) = watch::channel(false);
        Self {
            shared: Arc::new(TimerShared {
                state: Mutex::new(TimerState {
                    controller: PresenceController::new(delay),
                    pending: None,
                }),
                presence,
            }),
        }
    }

    /// Feed the latest visibility intent. Must be called from within a
    /// tokio runtime.
    pub fn set_intent(&self, intent: bool) {
        let mut state = self.shared.state.lock();
        let now = Instant::now();
        let command = state.controller.set_intent(intent, now);
        match command {
            PresenceCommand::None => {}
            PresenceCommand::Schedule { id, after } => {
                if let Some((stale, handle)) = state.pending.take() {
                    tracing::warn!(?stale, "Replacing countdown that was never cancelled");
                    handle.abort();
                }
                // Anchored at the intent change, not at the task's first poll.
                let deadline = now + after;
                let shared = self.shared.clone();
                let handle = tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    shared.expire(id);
                });
                state.pending = Some((id, handle));
                tracing::debug!(?id, ?after, "Hide countdown started");
            }
            PresenceCommand::Cancel(id) => {
                if let Some((pending, handle)) = state.pending.take() {
                    debug_assert_eq!(pending, id);
                    handle.abort();
                }
                tracing::debug!(?id, "Hide countdown cancelled");
            }
        }
        let present = state.controller.is_present();
        drop(state);
        self.shared.publish(present);
    }

    pub fn is_present(&self) -> bool {
        self.shared.state.lock().controller.is_present()
    }

    pub fn delay(&self) -> Duration {
        self.shared.state.lock().controller.delay()
    }

    /// Use `delay` for countdowns started from now on
    pub fn set_delay(&self, delay: Duration) {
        self.shared.state.lock().controller.set_delay(delay);
    }

    pub fn phase(&self) -> PresencePhase {
        self.shared.state.lock().controller.phase()
    }

    pub fn progress(&self) -> f32 {
        self.shared.state.lock().controller.progress(Instant::now())
    }

    /// Number of countdown tasks currently held (zero or one)
    pub fn pending_countdowns(&self) -> usize {
        usize::from(self.shared.state.lock().pending.is_some())
    }

    /// Receiver notified whenever render presence flips
    pub fn watch(&self) -> watch::Receiver<bool> {
        self.shared.presence.subscribe()
    }
}

impl TimerShared {
    fn expire(&self, id: CountdownId) {
        let mut state = self.state.lock();
        if !state.controller.expire(id) {
            return;
        }
        if matches!(state.pending, Some((pending, _)) if pending == id) {
            state.pending = None;
        }
        drop(state);
        tracing::debug!(?id, "Hide countdown elapsed");
        self.publish(false);
    }

    fn publish(&self, present: bool) {
        self.presence.send_if_modified(|current| {
            if *current == present {
                false
            } else {
                *current = present;
                true
            }
        });
    }
}

impl Drop for PresenceTimer {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.shared.state.lock().pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn starts_hidden() {
        let controller = PresenceController::default();
        assert_eq!(controller.phase(), PresencePhase::Hidden);
        assert!(!controller.is_present());
        assert_eq!(controller.delay(), DEFAULT_HIDE_DELAY);
    }

    #[test]
    fn shows_immediately() {
        let mut controller = PresenceController::new(DELAY);
        let command = controller.set_intent(true, Instant::now());
        assert_eq!(command, PresenceCommand::None);
        assert_eq!(controller.phase(), PresencePhase::Shown);
        assert!(controller.is_present());
    }

    #[test]
    fn hide_schedules_countdown() {
        let mut controller = PresenceController::new(DELAY);
        let now = Instant::now();
        controller.set_intent(true, now);

        let command = controller.set_intent(false, now);
        let PresenceCommand::Schedule { id, after } = command else {
            panic!("expected a countdown, got {command:?}");
        };
        assert_eq!(after, DELAY);
        assert_eq!(controller.phase(), PresencePhase::Disappearing);
        assert!(controller.is_present());

        assert!(controller.expire(id));
        assert_eq!(controller.phase(), PresencePhase::Hidden);
        assert_eq!(controller.pending(), None);
    }

    #[test]
    fn reshow_cancels_countdown() {
        let mut controller = PresenceController::new(DELAY);
        let now = Instant::now();
        controller.set_intent(true, now);
        let PresenceCommand::Schedule { id, .. } = controller.set_intent(false, now) else {
            panic!("expected a countdown");
        };

        assert_eq!(controller.set_intent(true, now), PresenceCommand::Cancel(id));
        assert_eq!(controller.phase(), PresencePhase::Shown);

        // The cancelled countdown can no longer hide the element.
        assert!(!controller.expire(id));
        assert!(controller.is_present());
    }

    #[test]
    fn repeated_intent_is_noop() {
        let mut controller = PresenceController::new(DELAY);
        let now = Instant::now();
        assert_eq!(controller.set_intent(false, now), PresenceCommand::None);
        controller.set_intent(true, now);
        assert_eq!(controller.set_intent(true, now), PresenceCommand::None);

        let first = controller.set_intent(false, now);
        assert!(matches!(first, PresenceCommand::Schedule { .. }));
        assert_eq!(controller.set_intent(false, now), PresenceCommand::None);
    }

    #[test]
    fn countdown_ids_are_fresh() {
        let mut controller = PresenceController::new(DELAY);
        let now = Instant::now();
        controller.set_intent(true, now);
        let PresenceCommand::Schedule { id: first, .. } = controller.set_intent(false, now) else {
            panic!("expected a countdown");
        };
        controller.set_intent(true, now);
        let PresenceCommand::Schedule { id: second, .. } = controller.set_intent(false, now) else {
            panic!("expected a countdown");
        };
        assert_ne!(first, second);
        assert!(!controller.expire(first));
        assert!(controller.expire(second));
    }

    #[test]
    fn progress_decays_while_disappearing() {
        let mut controller = PresenceController::new(DELAY);
        let start = Instant::now();
        assert_eq!(controller.progress(start), 0.0);

        controller.set_intent(true, start);
        assert_eq!(controller.progress(start), 1.0);

        controller.set_intent(false, start);
        let halfway = controller.progress(start + Duration::from_millis(150));
        assert!((halfway - 0.5).abs() < 0.01, "got {halfway}");
        assert_eq!(controller.progress(start + Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn delay_change_spares_running_countdown() {
        let mut controller = PresenceController::new(DELAY);
        let start = Instant::now();
        controller.set_intent(true, start);
        controller.set_intent(false, start);

        controller.set_delay(Duration::from_millis(600));
        let halfway = controller.progress(start + Duration::from_millis(150));
        assert!((halfway - 0.5).abs() < 0.01, "got {halfway}");

        controller.set_intent(true, start);
        let command = controller.set_intent(false, start);
        assert!(matches!(
            command,
            PresenceCommand::Schedule { after, .. } if after == Duration::from_millis(600)
        ));
    }

    #[test]
    fn zero_delay_progress() {
        let mut controller = PresenceController::new(Duration::ZERO);
        let now = Instant::now();
        controller.set_intent(true, now);
        controller.set_intent(false, now);
        assert_eq!(controller.progress(now), 0.0);
        assert!(controller.is_present());
    }
}
