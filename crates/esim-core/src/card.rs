//! Secondary data shown on selection cards

use crate::catalog::Price;

/// What the trailing slot of a card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceSlot {
    /// Formatted price text
    Price(String),
    /// Neutral chevron, shown when prices are off or unknown
    Affordance,
}

impl PriceSlot {
    /// Show the price only when enabled and present
    pub fn resolve(show_price: bool, price: Option<&Price>) -> Self {
        match (show_price, price) {
            (true, Some(price)) => PriceSlot::Price(price.to_string()),
            _ => PriceSlot::Affordance,
        }
    }

    /// "From $4.50" style label for list cards
    pub fn starting_from(show_price: bool, price: Option<&Price>) -> Self {
        match Self::resolve(show_price, price) {
            PriceSlot::Price(text) => PriceSlot::Price(format!("From {}", text)),
            PriceSlot::Affordance => PriceSlot::Affordance,
        }
    }
}
