//! Shared application context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let settings = use_settings();
//! let mut owned = use_owned_esims();
//! ```

use dioxus::prelude::*;
use esim_core::Package;

pub use crate::Settings;

/// Get the startup settings resolved in `main`.
pub fn get_settings() -> Settings {
    crate::get_settings()
}

/// eSIMs bought during this session, in purchase order.
#[derive(Clone, Copy)]
pub struct OwnedEsims(pub Signal<Vec<Package>>);

/// Hook to access the startup settings from context.
pub fn use_settings() -> Settings {
    use_context::<Settings>()
}

/// Hook to access the owned eSIM list.
pub fn use_owned_esims() -> Signal<Vec<Package>> {
    use_context::<OwnedEsims>().0
}
