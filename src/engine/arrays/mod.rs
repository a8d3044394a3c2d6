//! Parallel Arrays - Columnar component state.
//!
//! All component state lives in these parallel arrays.
//! Each array index corresponds to one component.
//!
//! Slots hold either a plain value or a getter. Getters are evaluated on
//! every read, which keeps derived state (selection flags, hidden markers)
//! current without any push machinery: the single-threaded event model
//! guarantees reads never observe a partial update.
//!
//! # Array Categories
//!
//! - **core**: Component type, parent, visibility
//! - **attrs**: Accessibility and data attributes (role, aria-*, data-*, id)
//! - **interaction**: Focusable flag, tab index

pub mod attrs;
pub mod core;
pub mod interaction;

use std::rc::Rc;

/// A slot holding a plain value or a getter evaluated on read.
#[derive(Clone)]
pub enum Slot<T: Clone> {
    Value(T),
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> T {
        match self {
            Slot::Value(v) => v.clone(),
            Slot::Getter(f) => f(),
        }
    }
}

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core::ensure_capacity(index);
    attrs::ensure_capacity(index);
    interaction::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core::clear_at_index(index);
    attrs::clear_at_index(index);
    interaction::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when all components are destroyed.
pub fn reset_all_arrays() {
    core::reset();
    attrs::reset();
    interaction::reset();
}
