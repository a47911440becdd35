//! Card activation
//!
//! Both selection cards route their click through [`select_entity`], so
//! the "one activation, one callback, same entity" rule lives in one place.

/// Hand a copy of the card's entity to its selection callback.
///
/// `on_select` is `FnOnce`: an activation can reach it at most once.
pub fn select_entity<T: Clone>(entity: &T, on_select: impl FnOnce(T)) {
    on_select(entity.clone());
}
