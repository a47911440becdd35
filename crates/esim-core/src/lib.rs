//! eSIM Shop Core Library
//!
//! Headless building blocks for the eSIM shop front-end: the catalog of
//! countries and data packages, and the small state machines that keep the
//! view in sync with its environment.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  connectivity: ConnectivityObserver  (ambient online/offline)   │
//! │  presence:     PresenceController    (intent vs. render lag)    │
//! │  tabs:         TabBar                (route -> active tab)      │
//! │  haptics:      Haptics               (best-effort pulses)       │
//! │  catalog:      Catalog, Country, Package, Price                 │
//! │  card:         PriceSlot             (card secondary data)      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every ambient capability (connectivity signal, vibration motor, router)
//! sits behind a trait so it can be swapped for a deterministic fake.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use esim_core::connectivity::{ConnectivityObserver, ManualConnectivity};
//!
//! let source = Arc::new(ManualConnectivity::new(true));
//! let observer = ConnectivityObserver::spawn(source.clone());
//! source.go_offline();
//! ```

pub mod card;
pub mod catalog;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod haptics;
pub mod presence;
pub mod tabs;

// Re-exports
pub use card::PriceSlot;
pub use catalog::{Catalog, Country, Package, Price};
pub use config::ShopConfig;
pub use connectivity::{
    ConnectivityObserver, ConnectivitySource, ConnectivityState, EnvironmentEvent,
    ManualConnectivity, ObserverHandle,
};
pub use error::{ShopError, ShopResult};
pub use haptics::{HapticPattern, Haptics, NoHaptics};
pub use presence::{
    CountdownId, PresenceCommand, PresenceController, PresencePhase, PresenceTimer,
    DEFAULT_HIDE_DELAY,
};
pub use tabs::{Router, TabBar, TabDescriptor, TabIcon, DEFAULT_TABS};
