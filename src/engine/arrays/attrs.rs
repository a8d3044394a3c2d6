//! Attribute Arrays
//!
//! Accessibility and data attributes emitted on rendered elements:
//! role, id, aria-selected, aria-controls, aria-labelledby, aria-disabled,
//! data-state, data-orientation, data-disabled, hidden.
//!
//! These are a compatibility contract: downstream styling and automated
//! tests key off the exact names and values, so hosts read them through
//! [`get`] and [`snapshot`].
//!
//! A getter slot returning `None` means "attribute absent" - that is how
//! presence markers like `hidden` and `data-disabled` toggle with state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Slot;

thread_local! {
    /// Per-index attribute maps.
    static ATTRS: RefCell<Vec<HashMap<&'static str, Slot<Option<String>>>>> =
        RefCell::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure the array has capacity for the given index.
pub fn ensure_capacity(index: usize) {
    ATTRS.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(HashMap::new());
        }
    });
}

/// Clear values at index (called when releasing).
pub fn clear_at_index(index: usize) {
    ATTRS.with(|arr| {
        let mut arr = arr.borrow_mut();
        if index < arr.len() {
            arr[index].clear();
        }
    });
}

/// Reset the array.
pub fn reset() {
    ATTRS.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Attribute Access
// =============================================================================

/// Set a static attribute value.
pub fn set(index: usize, name: &'static str, value: impl Into<String>) {
    ensure_capacity(index);
    ATTRS.with(|arr| {
        arr.borrow_mut()[index].insert(name, Slot::Value(Some(value.into())));
    });
}

/// Set an attribute from a getter. Returning `None` omits the attribute.
pub fn set_getter<F>(index: usize, name: &'static str, getter: F)
where
    F: Fn() -> Option<String> + 'static,
{
    ensure_capacity(index);
    ATTRS.with(|arr| {
        arr.borrow_mut()[index].insert(name, Slot::Getter(Rc::new(getter)));
    });
}

/// Remove an attribute.
pub fn remove(index: usize, name: &str) {
    ATTRS.with(|arr| {
        let mut arr = arr.borrow_mut();
        if index < arr.len() {
            arr[index].remove(name);
        }
    });
}

/// Get the current value of an attribute. `None` = absent.
pub fn get(index: usize, name: &str) -> Option<String> {
    let slot = ATTRS.with(|arr| {
        arr.borrow().get(index).and_then(|map| map.get(name).cloned())
    });
    slot.and_then(|s| s.get())
}

/// Whether the attribute is currently present.
pub fn has(index: usize, name: &str) -> bool {
    get(index, name).is_some()
}

/// Evaluate all attributes at an index, sorted by name.
///
/// Presence markers (empty string values) are included with `""`.
pub fn snapshot(index: usize) -> Vec<(String, String)> {
    let mut result: Vec<(String, String)> = ATTRS.with(|arr| {
        arr.borrow()
            .get(index)
            .map(|map| {
                map.iter()
                    .filter_map(|(name, slot)| slot.get().map(|v| (name.to_string(), v)))
                    .collect()
            })
            .unwrap_or_default()
    });
    result.sort();
    result
}
