//! Render presence hook

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use esim_core::{PresencePhase, PresenceTimer};

/// How often the exit progress is refreshed while an element disappears
const PROGRESS_FRAME: Duration = Duration::from_millis(16);

/// Render presence of a transient element and its exit progress
#[derive(Clone, Copy, PartialEq)]
pub struct Presence {
    present: Signal<bool>,
    progress: Signal<f32>,
}

impl Presence {
    /// Whether the element should be mounted
    pub fn is_present(&self) -> bool {
        *self.present.read()
    }

    /// 1.0 while shown, falling linearly to 0.0 over the hide delay
    pub fn progress(&self) -> f32 {
        *self.progress.read()
    }
}

/// Whether a transient element should currently be mounted.
///
/// `intent` is re-read whenever the signals it touches change. Presence
/// turns on with the intent and turns off `hide_delay` after the intent
/// turns off, unless the intent comes back first. The first render already
/// reflects the initial intent. Changing `hide_delay` applies to the next
/// countdown.
///
/// # Example
///
/// ```rust,ignore
/// let mut dragging = use_signal(|| false);
/// let presence = use_presence(move || dragging(), DEFAULT_HIDE_DELAY);
/// rsx! {
///     if presence.is_present() {
///         div { class: "hint", style: "opacity: {presence.progress()}" }
///     }
/// }
/// ```
pub fn use_presence(
    mut intent: impl FnMut() -> bool + 'static,
    hide_delay: Duration,
) -> Presence {
    let (timer, initial) = use_hook(|| {
        let timer = Rc::new(PresenceTimer::new(hide_delay));
        // Leaving Hidden never schedules a countdown, so no runtime is needed yet.
        timer.set_intent(intent());
        let initial = timer.phase();
        (timer, initial)
    });
    if timer.delay() != hide_delay {
        timer.set_delay(hide_delay);
    }

    let present = use_signal(|| initial.is_present());
    let mut progress = use_signal(|| if initial.is_present() { 1.0 } else { 0.0 });
    let phase = use_signal(|| initial);

    let effect_timer = timer.clone();
    use_effect(move || {
        effect_timer.set_intent(intent());
        mirror(&effect_timer, present, phase);
    });

    let watch_timer = timer.clone();
    use_future(move || {
        let timer = watch_timer.clone();
        let mut rx = timer.watch();
        async move {
            while rx.changed().await.is_ok() {
                rx.borrow_and_update();
                mirror(&timer, present, phase);
            }
        }
    });

    // Restarted on every phase change; only ticks while disappearing.
    use_resource(move || {
        let timer = timer.clone();
        let current = phase();
        async move {
            match current {
                PresencePhase::Shown => progress.set(1.0),
                PresencePhase::Hidden => progress.set(0.0),
                PresencePhase::Disappearing => {
                    let mut frames = tokio::time::interval(PROGRESS_FRAME);
                    loop {
                        frames.tick().await;
                        let value = timer.progress();
                        progress.set(value);
                        if value <= 0.0 {
                            break;
                        }
                    }
                }
            }
        }
    });

    Presence { present, progress }
}

/// Copy the timer's state into the signals, writing only what changed
fn mirror(timer: &PresenceTimer, mut present: Signal<bool>, mut phase: Signal<PresencePhase>) {
    let next_phase = timer.phase();
    if *phase.peek() != next_phase {
        phase.set(next_phase);
    }
    let next_present = next_phase.is_present();
    if *present.peek() != next_present {
        present.set(next_present);
    }
}
