//! Haptic feedback hook

use dioxus::prelude::*;
use esim_core::{HapticPattern, Haptics, NoHaptics};

use crate::bridge::WebviewHaptics;

/// Haptics switch shared through context
#[derive(Clone, Copy)]
pub struct HapticsContext {
    enabled: Signal<bool>,
}

impl HapticsContext {
    pub fn new(enabled: Signal<bool>) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        (self.enabled)()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        tracing::info!(enabled, "Haptics toggled");
        self.enabled.set(enabled);
    }
}

impl Haptics for HapticsContext {
    fn pulse(&self, pattern: HapticPattern) {
        if *self.enabled.peek() {
            WebviewHaptics.pulse(pattern);
        } else {
            NoHaptics.pulse(pattern);
        }
    }
}

/// Haptics handle from context
pub fn use_haptics() -> HapticsContext {
    use_context::<HapticsContext>()
}
