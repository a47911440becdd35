//! Reusable shop components
//!
//! Cards are pure functions of their props; the indicator and banner own
//! their presence through `use_presence`.

mod card_trailing;
mod country_card;
mod offline_banner;
mod package_card;
mod selection;
mod swipe_indicator;

pub use card_trailing::*;
pub use country_card::*;
pub use offline_banner::*;
pub use package_card::*;
pub use selection::*;
pub use swipe_indicator::*;
