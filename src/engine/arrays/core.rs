//! Core Arrays
//!
//! The most fundamental component arrays:
//! - componentType: What kind of component (root, list, trigger, content)
//! - parentIndex: Parent in hierarchy
//! - visible: Is component rendered (getter-capable for derived visibility)

use std::cell::RefCell;
use std::rc::Rc;

use super::Slot;
use crate::types::ComponentType;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Component type - stores values directly (not reactive).
    static COMPONENT_TYPE: RefCell<Vec<ComponentType>> = RefCell::new(Vec::new());

    /// Parent component index (None for root).
    static PARENT_INDEX: RefCell<Vec<Option<usize>>> = RefCell::new(Vec::new());

    /// Is component visible (false = hidden). Getter slots let visibility
    /// derive from selection state.
    static VISIBLE: RefCell<Vec<Slot<bool>>> = RefCell::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(ComponentType::None);
        }
    });
    PARENT_INDEX.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(None);
        }
    });
    VISIBLE.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(Slot::Value(true));
        }
    });
}

/// Clear values at index (called when releasing).
pub fn clear_at_index(index: usize) {
    COMPONENT_TYPE.with(|arr| {
        let mut arr = arr.borrow_mut();
        if index < arr.len() {
            arr[index] = ComponentType::None;
        }
    });
    PARENT_INDEX.with(|arr| {
        let mut arr = arr.borrow_mut();
        if index < arr.len() {
            arr[index] = None;
        }
    });
    VISIBLE.with(|arr| {
        let mut arr = arr.borrow_mut();
        if index < arr.len() {
            arr[index] = Slot::Value(true);
        }
    });
}

/// Reset all arrays.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.borrow_mut().clear());
    PARENT_INDEX.with(|arr| arr.borrow_mut().clear());
    VISIBLE.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Component Type
// =============================================================================

/// Get component type at index.
pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.borrow().get(index).copied().unwrap_or(ComponentType::None))
}

/// Set component type at index.
pub fn set_component_type(index: usize, value: ComponentType) {
    ensure_capacity(index);
    COMPONENT_TYPE.with(|arr| {
        arr.borrow_mut()[index] = value;
    });
}

// =============================================================================
// Parent Index
// =============================================================================

/// Get parent index at index.
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.borrow().get(index).copied().flatten())
}

/// Set parent index at index.
pub fn set_parent_index(index: usize, parent: Option<usize>) {
    ensure_capacity(index);
    PARENT_INDEX.with(|arr| {
        arr.borrow_mut()[index] = parent;
    });
}

// =============================================================================
// Visible
// =============================================================================

/// Get visibility at index.
pub fn get_visible(index: usize) -> bool {
    let slot = VISIBLE.with(|arr| arr.borrow().get(index).cloned());
    slot.map(|s| s.get()).unwrap_or(true)
}

/// Set visibility at index.
pub fn set_visible(index: usize, visible: bool) {
    ensure_capacity(index);
    VISIBLE.with(|arr| {
        arr.borrow_mut()[index] = Slot::Value(visible);
    });
}

/// Set visibility from a getter function.
pub fn set_visible_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    ensure_capacity(index);
    VISIBLE.with(|arr| {
        arr.borrow_mut()[index] = Slot::Getter(Rc::new(getter));
    });
}
