//! App chrome for the eSIM shop.

mod shell;
mod tab_bar;

pub use shell::Shell;
pub use tab_bar::BottomTabs;
