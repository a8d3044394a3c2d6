//! Interaction Arrays
//!
//! User interaction state:
//! - focusable: Can receive focus (getter-capable - disabled triggers derive it)
//! - tabIndex: Tab order

use std::cell::RefCell;
use std::rc::Rc;

use super::Slot;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Is component focusable.
    static FOCUSABLE: RefCell<Vec<Slot<bool>>> = RefCell::new(Vec::new());

    /// Tab index for focus navigation (higher = later in order).
    static TAB_INDEX: RefCell<Vec<i32>> = RefCell::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    FOCUSABLE.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(Slot::Value(false));
        }
    });
    TAB_INDEX.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(0);
        }
    });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    FOCUSABLE.with(|arr| {
        let mut arr = arr.borrow_mut();
        if index < arr.len() {
            arr[index] = Slot::Value(false);
        }
    });
    TAB_INDEX.with(|arr| {
        let mut arr = arr.borrow_mut();
        if index < arr.len() {
            arr[index] = 0;
        }
    });
}

/// Reset all arrays.
pub fn reset() {
    FOCUSABLE.with(|arr| arr.borrow_mut().clear());
    TAB_INDEX.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Focusable
// =============================================================================

/// Get focusable at index.
pub fn get_focusable(index: usize) -> bool {
    let slot = FOCUSABLE.with(|arr| arr.borrow().get(index).cloned());
    slot.map(|s| s.get()).unwrap_or(false)
}

/// Set focusable at index.
pub fn set_focusable(index: usize, focusable: bool) {
    ensure_capacity(index);
    FOCUSABLE.with(|arr| {
        arr.borrow_mut()[index] = Slot::Value(focusable);
    });
}

/// Set focusable from a getter function.
pub fn set_focusable_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    ensure_capacity(index);
    FOCUSABLE.with(|arr| {
        arr.borrow_mut()[index] = Slot::Getter(Rc::new(getter));
    });
}

// =============================================================================
// Tab Index
// =============================================================================

/// Get tab index at index.
pub fn get_tab_index(index: usize) -> i32 {
    TAB_INDEX.with(|arr| arr.borrow().get(index).copied().unwrap_or(0))
}

/// Set tab index at index.
pub fn set_tab_index(index: usize, tab_index: i32) {
    ensure_capacity(index);
    TAB_INDEX.with(|arr| {
        arr.borrow_mut()[index] = tab_index;
    });
}
