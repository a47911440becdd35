//! Haptic feedback
//!
//! Haptics are a best-effort capability: a platform may not have a
//! vibration motor at all. Implementations of [`Haptics`] must return
//! immediately and swallow every failure.

/// Named vibration patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    Light,
    Medium,
    Heavy,
    /// Tab switches and list selections
    Selection,
    Success,
    Error,
}

impl HapticPattern {
    /// Alternating vibrate/pause durations in milliseconds
    pub fn vibration_pattern(&self) -> &'static [u32] {
        match self {
            HapticPattern::Light => &[10],
            HapticPattern::Medium => &[20],
            HapticPattern::Heavy => &[30],
            HapticPattern::Selection => &[5],
            HapticPattern::Success => &[10, 50, 10],
            HapticPattern::Error => &[20, 40, 20, 40, 20],
        }
    }

    /// Pattern as a JavaScript array literal for `navigator.vibrate`
    pub fn to_js_array(&self) -> String {
        let parts: Vec<String> = self
            .vibration_pattern()
            .iter()
            .map(|ms| ms.to_string())
            .collect();
        format!("[{}]", parts.join(","))
    }
}

/// A vibration emitter. Fire-and-forget: never blocks, never fails.
pub trait Haptics {
    fn pulse(&self, pattern: HapticPattern);
}

/// Haptics for platforms without a motor, or when disabled by config
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, pattern: HapticPattern) {
        tracing::trace!(?pattern, "Haptics disabled, pulse dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_durations() {
        assert_eq!(HapticPattern::Light.vibration_pattern(), &[10]);
        assert_eq!(HapticPattern::Selection.vibration_pattern(), &[5]);
        assert_eq!(HapticPattern::Success.vibration_pattern(), &[10, 50, 10]);
    }

    #[test]
    fn js_array_literal() {
        assert_eq!(HapticPattern::Heavy.to_js_array(), "[30]");
        assert_eq!(HapticPattern::Error.to_js_array(), "[20,40,20,40,20]");
    }

    #[test]
    fn no_haptics_is_silent() {
        NoHaptics.pulse(HapticPattern::Success);
    }
}
