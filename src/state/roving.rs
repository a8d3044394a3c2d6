//! Roving Focus - Arrow-key navigation groups
//!
//! A roving focus group keeps a set of items of which only one is the
//! current tab stop. Arrow keys move focus between the items along the
//! group's orientation axis, wrapping at the ends when `loop_focus` is set
//! and skipping items that are not currently focusable.
//!
//! Consumers feed the group configuration (orientation, direction, loop)
//! and per-item flags (focusable, active); the group owns its traversal
//! logic and current tab-stop bookkeeping. Tabs components never move
//! focus themselves - they only register here.
//!
//! # Example
//!
//! ```ignore
//! use tabstrip::state::roving::{self, GroupOptions};
//!
//! let group = roving::create_group(GroupOptions::default());
//! let cleanup = roving::register_item(
//!     group,
//!     component_index,
//!     Rc::new(|| true),           // focusable
//!     Rc::new(move || selected()), // active (roving tab stop)
//! );
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::state::focus;
use crate::state::keyboard::KeyboardEvent;
use crate::types::{Direction, Orientation};

// =============================================================================
// TYPES
// =============================================================================

/// Configuration of one roving focus group.
#[derive(Debug, Clone, Copy)]
pub struct GroupOptions {
    /// Which arrow keys traverse the group.
    pub orientation: Orientation,
    /// Left/right polarity on horizontal groups.
    pub direction: Direction,
    /// Wrap from last to first item (and back).
    pub loop_focus: bool,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            direction: Direction::default(),
            loop_focus: true,
        }
    }
}

struct Item {
    /// Component index in the engine registry.
    index: usize,
    /// Whether the item can currently receive focus.
    focusable: Rc<dyn Fn() -> bool>,
    /// Whether the item is the current roving tab stop.
    active: Rc<dyn Fn() -> bool>,
}

struct Group {
    options: GroupOptions,
    /// Items in registration order (= visual order).
    items: Vec<(usize, Item)>,
}

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static GROUPS: RefCell<HashMap<usize, Group>> = RefCell::new(HashMap::new());

    static NEXT_GROUP_ID: RefCell<usize> = const { RefCell::new(0) };

    static NEXT_ITEM_ID: RefCell<usize> = const { RefCell::new(0) };

    /// Stack of group ids for nested item registration, mirroring the
    /// engine's parent context stack.
    static GROUP_STACK: RefCell<Vec<usize>> = RefCell::new(Vec::new());
}

// =============================================================================
// GROUP LIFECYCLE
// =============================================================================

/// Create a roving focus group. Returns the group id.
pub fn create_group(options: GroupOptions) -> usize {
    let id = NEXT_GROUP_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    });

    GROUPS.with(|groups| {
        groups.borrow_mut().insert(id, Group { options, items: Vec::new() });
    });

    id
}

/// Destroy a group and all its item registrations.
pub fn destroy_group(group: usize) {
    GROUPS.with(|groups| {
        groups.borrow_mut().remove(&group);
    });
}

/// Push a group id onto the registration stack.
pub fn push_group_context(group: usize) {
    GROUP_STACK.with(|stack| {
        stack.borrow_mut().push(group);
    });
}

/// Pop a group id from the registration stack.
pub fn pop_group_context() {
    GROUP_STACK.with(|stack| {
        stack.borrow_mut().pop();
    });
}

/// Get the group currently accepting item registrations.
pub fn current_group() -> Option<usize> {
    GROUP_STACK.with(|stack| stack.borrow().last().copied())
}

// =============================================================================
// ITEM REGISTRATION
// =============================================================================

/// Register an item in a group.
///
/// `focusable` and `active` are getters so the flags stay current without
/// re-registration (a trigger's disabled/selected state can change at any
/// time). Returns a cleanup that removes the item.
pub fn register_item(
    group: usize,
    index: usize,
    focusable: Rc<dyn Fn() -> bool>,
    active: Rc<dyn Fn() -> bool>,
) -> impl FnOnce() {
    let item_id = NEXT_ITEM_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    });

    GROUPS.with(|groups| {
        if let Some(g) = groups.borrow_mut().get_mut(&group) {
            g.items.push((item_id, Item { index, focusable, active }));
        }
    });

    move || {
        GROUPS.with(|groups| {
            if let Some(g) = groups.borrow_mut().get_mut(&group) {
                g.items.retain(|(id, _)| *id != item_id);
            }
        });
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// The group's current roving tab stop: the active item, or the first
/// focusable item when nothing is active.
pub fn primary_stop(group: usize) -> Option<usize> {
    GROUPS.with(|groups| {
        let groups = groups.borrow();
        let g = groups.get(&group)?;
        g.items
            .iter()
            .find(|(_, item)| (item.active)() && (item.focusable)())
            .or_else(|| g.items.iter().find(|(_, item)| (item.focusable)()))
            .map(|(_, item)| item.index)
    })
}

/// Number of items registered in a group. Returns None for unknown groups.
pub fn item_count(group: usize) -> Option<usize> {
    GROUPS.with(|groups| groups.borrow().get(&group).map(|g| g.items.len()))
}

// =============================================================================
// KEY HANDLING
// =============================================================================

/// Traversal step for a key in a group, or None if the group ignores it.
fn key_delta(options: &GroupOptions, key: &str) -> Option<i32> {
    match (options.orientation, key) {
        (Orientation::Horizontal, "ArrowRight") => Some(match options.direction {
            Direction::Ltr => 1,
            Direction::Rtl => -1,
        }),
        (Orientation::Horizontal, "ArrowLeft") => Some(match options.direction {
            Direction::Ltr => -1,
            Direction::Rtl => 1,
        }),
        (Orientation::Vertical, "ArrowDown") => Some(1),
        (Orientation::Vertical, "ArrowUp") => Some(-1),
        _ => None,
    }
}

/// Handle a key event for whichever group contains the focused component.
///
/// Returns true if the event was consumed (focus moved, or an axis key was
/// swallowed at a non-wrapping end).
pub fn handle_key(event: &KeyboardEvent) -> bool {
    let focused = focus::get_focused_index();
    if focused < 0 {
        return false;
    }
    let focused = focused as usize;

    // Resolve target outside the GROUPS borrow: focus() fires callbacks
    // which may re-enter this module.
    let target = GROUPS.with(|groups| {
        let groups = groups.borrow();
        let (group, position) = groups.values().find_map(|g| {
            g.items
                .iter()
                .position(|(_, item)| item.index == focused)
                .map(|pos| (g, pos))
        })?;

        match event.key.as_str() {
            "Home" => Some(first_focusable(group)),
            "End" => Some(last_focusable(group)),
            key => {
                let delta = key_delta(&group.options, key)?;
                Some(step_from(group, position, delta))
            }
        }
    });

    match target {
        None => false,
        Some(None) => true, // Axis key owned by the group, nowhere to go
        Some(Some(index)) => {
            focus::focus(index);
            true
        }
    }
}

fn first_focusable(group: &Group) -> Option<usize> {
    group
        .items
        .iter()
        .find(|(_, item)| (item.focusable)())
        .map(|(_, item)| item.index)
}

fn last_focusable(group: &Group) -> Option<usize> {
    group
        .items
        .iter()
        .rev()
        .find(|(_, item)| (item.focusable)())
        .map(|(_, item)| item.index)
}

/// Walk from `position` by `delta`, skipping unfocusable items, wrapping
/// when the group loops.
fn step_from(group: &Group, position: usize, delta: i32) -> Option<usize> {
    let len = group.items.len() as i32;
    if len == 0 {
        return None;
    }

    let mut pos = position as i32;
    for _ in 0..len - 1 {
        pos += delta;
        if group.options.loop_focus {
            pos = (pos % len + len) % len;
        } else if pos < 0 || pos >= len {
            return None;
        }

        let (_, item) = &group.items[pos as usize];
        if (item.focusable)() {
            return Some(item.index);
        }
    }
    None
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Reset all roving state (for testing)
pub fn reset_roving_state() {
    GROUPS.with(|groups| groups.borrow_mut().clear());
    GROUP_STACK.with(|stack| stack.borrow_mut().clear());
    NEXT_GROUP_ID.with(|next| *next.borrow_mut() = 0);
    NEXT_ITEM_ID.with(|next| *next.borrow_mut() = 0);
}

// =============================================================================
// TESTS
// =============================================================================
