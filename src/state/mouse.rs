//! Mouse Module - Mouse event state and handler registry
//!
//! State and handler registry for mouse events. Hit testing (coordinate to
//! component) belongs to the external rendering engine: events arrive here
//! with their target `component_index` already resolved.
//!
//! # Example
//!
//! ```ignore
//! use tabstrip::state::mouse::{self, MouseHandlers};
//!
//! let cleanup = mouse::on_component(component_index, MouseHandlers {
//!     on_mouse_down: Some(Rc::new(|event| {
//!         println!("Down at ({}, {})", event.x, event.y);
//!         false // Don't consume
//!     })),
//!     ..Default::default()
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::types::Modifiers;

// =============================================================================
// TYPES
// =============================================================================

/// Mouse action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Mouse event
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// Action type (down, up, move)
    pub action: MouseAction,
    /// Button pressed
    pub button: MouseButton,
    /// X coordinate (0-indexed)
    pub x: u16,
    /// Y coordinate (0-indexed)
    pub y: u16,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Component index at this position (resolved by the host)
    pub component_index: Option<usize>,
}

impl MouseEvent {
    /// Create a new mouse event
    pub fn new(action: MouseAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action,
            button,
            x,
            y,
            modifiers: Modifiers::empty(),
            component_index: None,
        }
    }

    /// Create a mouse down event
    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    /// Create a mouse up event
    pub fn up(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Up, button, x, y)
    }

    /// Create a mouse move event
    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(MouseAction::Move, MouseButton::None, x, y)
    }

    /// Primary-button press without the control modifier.
    ///
    /// Ctrl+click is the platform secondary-click gesture on some systems,
    /// so it never counts as a primary activation.
    pub fn is_primary_activation(&self) -> bool {
        self.action == MouseAction::Down
            && self.button == MouseButton::Left
            && !self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Mouse event callback. Return true to consume the event.
pub type MouseCallback = Rc<dyn Fn(&MouseEvent) -> bool>;

/// Per-component mouse handlers.
#[derive(Default, Clone)]
pub struct MouseHandlers {
    pub on_mouse_down: Option<MouseCallback>,
    pub on_mouse_up: Option<MouseCallback>,
}

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<MouseEvent>> = signal(None);

    static COMPONENT_HANDLERS: RefCell<HashMap<usize, Vec<(usize, MouseHandlers)>>> =
        RefCell::new(HashMap::new());

    static NEXT_HANDLER_ID: RefCell<usize> = const { RefCell::new(0) };
}

/// Get the last mouse event
pub fn last_event() -> Option<MouseEvent> {
    LAST_EVENT.with(|s| s.get())
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

/// Register mouse handlers for a component.
/// Returns cleanup function to unregister.
pub fn on_component(index: usize, handlers: MouseHandlers) -> impl FnOnce() {
    let id = NEXT_HANDLER_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    });

    COMPONENT_HANDLERS.with(|reg| {
        reg.borrow_mut().entry(index).or_default().push((id, handlers));
    });

    move || {
        COMPONENT_HANDLERS.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(list) = reg.get_mut(&index) {
                list.retain(|(handler_id, _)| *handler_id != id);
                if list.is_empty() {
                    reg.remove(&index);
                }
            }
        });
    }
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Dispatch a mouse event to the handlers of its target component.
/// Returns true if any handler consumed the event.
pub fn dispatch(event: MouseEvent) -> bool {
    LAST_EVENT.with(|s| s.set(Some(event.clone())));

    let Some(index) = event.component_index else {
        return false;
    };
    dispatch_to_component(index, &event)
}

/// Dispatch to a specific component's handlers.
pub fn dispatch_to_component(index: usize, event: &MouseEvent) -> bool {
    let handlers: Vec<MouseHandlers> = COMPONENT_HANDLERS.with(|reg| {
        reg.borrow()
            .get(&index)
            .map(|list| list.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default()
    });

    for h in handlers {
        let callback = match event.action {
            MouseAction::Down => h.on_mouse_down,
            MouseAction::Up => h.on_mouse_up,
            MouseAction::Move => None,
        };
        if let Some(callback) = callback {
            if callback(event) {
                return true;
            }
        }
    }
    false
}

/// Clean up all handlers for a component index.
pub fn cleanup_index(index: usize) {
    COMPONENT_HANDLERS.with(|reg| {
        reg.borrow_mut().remove(&index);
    });
}

/// Reset mouse state (for testing)
pub fn reset_mouse_state() {
    COMPONENT_HANDLERS.with(|reg| reg.borrow_mut().clear());
    NEXT_HANDLER_ID.with(|next| *next.borrow_mut() = 0);
    LAST_EVENT.with(|s| s.set(None));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_mouse_state();
    }

    #[test]
    fn test_dispatch_to_component() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = on_component(3, MouseHandlers {
            on_mouse_down: Some(Rc::new(move |_| {
                count_clone.set(count_clone.get() + 1);
                true
            })),
            ..Default::default()
        });

        let mut event = MouseEvent::down(MouseButton::Left, 1, 1);
        event.component_index = Some(3);
        assert!(dispatch(event.clone()));
        assert_eq!(count.get(), 1);
        assert_eq!(last_event(), Some(event.clone()));

        // Wrong target - not called
        event.component_index = Some(4);
        assert!(!dispatch(event.clone()));
        assert_eq!(count.get(), 1);

        cleanup();
        event.component_index = Some(3);
        assert!(!dispatch(event));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_up_not_routed_to_down_handler() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let _cleanup = on_component(0, MouseHandlers {
            on_mouse_down: Some(Rc::new(move |_| {
                count_clone.set(count_clone.get() + 1);
                false
            })),
            ..Default::default()
        });

        dispatch_to_component(0, &MouseEvent::up(MouseButton::Left, 0, 0));
        assert_eq!(count.get(), 0);

        dispatch_to_component(0, &MouseEvent::down(MouseButton::Left, 0, 0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_primary_activation() {
        let left = MouseEvent::down(MouseButton::Left, 0, 0);
        assert!(left.is_primary_activation());

        let right = MouseEvent::down(MouseButton::Right, 0, 0);
        assert!(!right.is_primary_activation());

        let mut ctrl_left = MouseEvent::down(MouseButton::Left, 0, 0);
        ctrl_left.modifiers = Modifiers::CTRL;
        assert!(!ctrl_left.is_primary_activation());

        let up = MouseEvent::up(MouseButton::Left, 0, 0);
        assert!(!up.is_primary_activation());
    }
}
