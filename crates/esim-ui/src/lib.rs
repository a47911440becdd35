//! eSIM Shop UI Components
//!
//! Dioxus components and hooks for the shop front-end.
//!
//! ## Layout
//!
//! - **components**: selection cards, swipe indicator, offline banner
//! - **hooks**: `use_online_status`, `use_presence`, `use_haptics`
//! - **bridge**: webview implementations of the ambient capabilities
//!   (`navigator.onLine`, `navigator.vibrate`)
//!
//! The hooks are thin adapters over the headless controllers in
//! `esim-core`; all timing and state rules live there.

pub mod bridge;
pub mod components;
pub mod hooks;

pub use bridge::*;
pub use components::*;
pub use hooks::*;
