//! Focus System - Focus state and navigation
//!
//! Manages focus state:
//! - `focused_index` signal (currently focused component)
//! - Focus cycling (Tab/Shift+Tab)
//! - Focus callbacks (onFocus/onBlur)
//!
//! Triggers hook automatic activation into their onFocus callback; the
//! roving module moves focus here when handling arrow keys.
//!
//! # Example
//!
//! ```ignore
//! use tabstrip::state::focus;
//!
//! // Focus specific component
//! focus::focus(component_index);
//!
//! // Register callbacks
//! let cleanup = focus::register_callbacks(index, FocusCallbacks {
//!     on_focus: Some(Box::new(|| println!("Focused!"))),
//!     on_blur: Some(Box::new(|| println!("Blurred!"))),
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{signal, Signal};

use crate::engine::arrays::{core, interaction};
use crate::engine::get_allocated_indices;

// =============================================================================
// FOCUSED INDEX SIGNAL
// =============================================================================

thread_local! {
    static FOCUSED_INDEX: Signal<i32> = signal(-1);
}

/// Get the currently focused component index (-1 if none)
pub fn get_focused_index() -> i32 {
    FOCUSED_INDEX.with(|s| s.get())
}

/// Check if any component is focused
pub fn has_focus() -> bool {
    get_focused_index() >= 0
}

/// Check if specific component is focused
pub fn is_focused(index: usize) -> bool {
    get_focused_index() == index as i32
}

// =============================================================================
// FOCUS CALLBACKS
// =============================================================================

/// Callbacks fired when focus changes
#[derive(Default)]
pub struct FocusCallbacks {
    pub on_focus: Option<Box<dyn Fn()>>,
    pub on_blur: Option<Box<dyn Fn()>>,
}

thread_local! {
    // Multiple callbacks per index supported (roving bookkeeping + user callback)
    static FOCUS_CALLBACK_REGISTRY: RefCell<HashMap<usize, Vec<FocusCallbacks>>> = RefCell::new(HashMap::new());
}

/// Register focus callbacks for a component.
/// Returns cleanup function to unregister.
pub fn register_callbacks(index: usize, callbacks: FocusCallbacks) -> impl FnOnce() {
    let callback_id = FOCUS_CALLBACK_REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let list = reg.entry(index).or_default();
        let id = list.len();
        list.push(callbacks);
        id
    });

    move || {
        FOCUS_CALLBACK_REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(list) = reg.get_mut(&index) {
                if callback_id < list.len() {
                    // Mark as removed (can't remove from Vec while preserving IDs)
                    list[callback_id].on_focus = None;
                    list[callback_id].on_blur = None;
                }
                if list.iter().all(|cb| cb.on_focus.is_none() && cb.on_blur.is_none()) {
                    reg.remove(&index);
                }
            }
        });
    }
}

/// Internal: Set focus and fire callbacks at the source
fn set_focus_with_callbacks(new_index: i32) {
    let old_index = get_focused_index();

    // No change, no callbacks
    if old_index == new_index {
        return;
    }

    // Fire onBlur for all callbacks on old focus
    if old_index >= 0 {
        FOCUS_CALLBACK_REGISTRY.with(|reg| {
            let reg = reg.borrow();
            if let Some(callbacks) = reg.get(&(old_index as usize)) {
                for cb in callbacks {
                    if let Some(ref on_blur) = cb.on_blur {
                        on_blur();
                    }
                }
            }
        });
    }

    // Update reactive state
    FOCUSED_INDEX.with(|s| s.set(new_index));

    // Fire onFocus for all callbacks on new focus
    if new_index >= 0 {
        FOCUS_CALLBACK_REGISTRY.with(|reg| {
            let reg = reg.borrow();
            if let Some(callbacks) = reg.get(&(new_index as usize)) {
                for cb in callbacks {
                    if let Some(ref on_focus) = cb.on_focus {
                        on_focus();
                    }
                }
            }
        });
    }
}

// =============================================================================
// FOCUSABLE QUERIES
// =============================================================================

/// Get all focusable component indices, sorted by tabIndex
pub fn get_focusable_indices() -> Vec<usize> {
    let indices = get_allocated_indices();
    let mut result: Vec<usize> = Vec::new();

    for i in indices {
        let is_focusable = interaction::get_focusable(i);
        let is_visible = core::get_visible(i);
        if is_focusable && is_visible {
            result.push(i);
        }
    }

    // Sort by tabIndex (components with same tabIndex keep allocation order)
    result.sort_by(|&a, &b| {
        let tab_a = interaction::get_tab_index(a);
        let tab_b = interaction::get_tab_index(b);
        if tab_a != tab_b {
            tab_a.cmp(&tab_b)
        } else {
            a.cmp(&b)
        }
    });

    result
}

// =============================================================================
// FOCUS NAVIGATION
// =============================================================================

/// Find next focusable component
fn find_next_focusable(from_index: i32, direction: i32) -> i32 {
    let focusables = get_focusable_indices();

    if focusables.is_empty() {
        return -1;
    }

    let current_pos = if from_index >= 0 {
        focusables.iter().position(|&i| i == from_index as usize)
    } else {
        None
    };

    match current_pos {
        None => {
            if direction == 1 {
                focusables[0] as i32
            } else {
                focusables[focusables.len() - 1] as i32
            }
        }
        Some(pos) => {
            // Move in direction with wrap
            let len = focusables.len() as i32;
            let next_pos = ((pos as i32 + direction) % len + len) % len;
            focusables[next_pos as usize] as i32
        }
    }
}

/// Move focus to next focusable component
pub fn focus_next() -> bool {
    let current = get_focused_index();
    let next = find_next_focusable(current, 1);
    if next != -1 && next != current {
        set_focus_with_callbacks(next);
        return true;
    }
    false
}

/// Move focus to previous focusable component
pub fn focus_previous() -> bool {
    let current = get_focused_index();
    let prev = find_next_focusable(current, -1);
    if prev != -1 && prev != current {
        set_focus_with_callbacks(prev);
        return true;
    }
    false
}

/// Focus a specific component by index
pub fn focus(index: usize) -> bool {
    let is_visible = core::get_visible(index);
    let is_focusable = interaction::get_focusable(index);

    if is_focusable && is_visible {
        set_focus_with_callbacks(index as i32);
        return true;
    }
    false
}

/// Clear focus (no component focused)
pub fn blur() {
    set_focus_with_callbacks(-1);
}

/// Focus the first focusable component
pub fn focus_first() -> bool {
    let focusables = get_focusable_indices();
    if !focusables.is_empty() {
        return focus(focusables[0]);
    }
    false
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Reset all focus state (for testing)
pub fn reset_focus_state() {
    FOCUSED_INDEX.with(|s| s.set(-1));
    FOCUS_CALLBACK_REGISTRY.with(|reg| reg.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================
