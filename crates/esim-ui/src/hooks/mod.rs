//! View-state hooks
//!
//! Each hook owns one headless controller from `esim-core` for the lifetime
//! of the calling component and mirrors its state into a signal.

mod connectivity;
mod haptics;
mod presence;

pub use connectivity::*;
pub use haptics::*;
pub use presence::*;
