//! Visual theme for the eSIM shop.

mod styles;

pub use styles::GLOBAL_STYLES;
