//! Swipe Indicator Component
//!
//! A small hint shown while the user drags a list. It fades out over the
//! hide delay after the drag ends instead of vanishing at once, following
//! the exit progress of its presence.

use std::time::Duration;

use dioxus::prelude::*;
use esim_core::DEFAULT_HIDE_DELAY;

use crate::hooks::use_presence;

/// CSS classes for the indicator, `leaving` while the exit animation runs
pub fn indicator_class(visible: bool) -> &'static str {
    if visible {
        "swipe-indicator"
    } else {
        "swipe-indicator leaving"
    }
}

/// Inline style for an exit progress: fully opaque at 1.0, faded and
/// dropped by a few pixels at 0.0
pub fn indicator_style(progress: f32) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let offset = (1.0 - progress) * 8.0;
    format!("opacity: {progress:.2}; transform: translate(-50%, {offset:.1}px)")
}

#[component]
pub fn SwipeIndicator(
    /// Whether the hint should be visible right now
    visible: ReadOnlySignal<bool>,
    #[props(default = DEFAULT_HIDE_DELAY)]
    hide_delay: Duration,
    #[props(default = "Swipe to browse".to_string())]
    label: String,
) -> Element {
    let presence = use_presence(move || visible(), hide_delay);

    if !presence.is_present() {
        return rsx! {};
    }

    let class = indicator_class(visible());
    let style = indicator_style(presence.progress());

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            role: "status",
            "aria-hidden": "{!visible()}",
            div { class: "swipe-track",
                span { class: "swipe-thumb" }
            }
            span { class: "swipe-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_class_when_hidden() {
        assert_eq!(indicator_class(true), "swipe-indicator");
        assert_eq!(indicator_class(false), "swipe-indicator leaving");
    }

    #[test]
    fn style_follows_progress() {
        assert_eq!(indicator_style(1.0), "opacity: 1.00; transform: translate(-50%, 0.0px)");
        assert_eq!(indicator_style(0.5), "opacity: 0.50; transform: translate(-50%, 4.0px)");
        assert_eq!(indicator_style(0.0), "opacity: 0.00; transform: translate(-50%, 8.0px)");
    }

    #[test]
    fn style_clamps_progress() {
        assert_eq!(indicator_style(1.7), indicator_style(1.0));
        assert_eq!(indicator_style(-0.3), indicator_style(0.0));
    }
}
