//! Tabs component props.
//!
//! All components take a props struct and return a [`Cleanup`]. Construct
//! props with struct literal syntax and `..Default::default()`.

use std::rc::Rc;

use crate::state::keyboard::KeyboardEvent;
use crate::state::mouse::MouseEvent;
use crate::types::{ActivationMode, Direction, Orientation, PropValue};

/// Composed keyboard handler. Return true to consume the event and
/// suppress the internal activation.
pub type TriggerKeyHandler = Rc<dyn Fn(&KeyboardEvent) -> bool>;

/// Composed mouse handler. Return true to consume the event and suppress
/// the internal activation.
pub type TriggerMouseHandler = Rc<dyn Fn(&MouseEvent) -> bool>;

/// Composed focus handler. Return true to suppress automatic activation.
pub type TriggerFocusHandler = Rc<dyn Fn() -> bool>;

/// Extra attributes passed through to the element.
pub type AttrList = Vec<(&'static str, String)>;

// =============================================================================
// Root Props
// =============================================================================

/// Props for [`tabs_root`](crate::tabs::tabs_root).
///
/// Supplying `value` makes the instance controlled: the prop is read on
/// every access and the crate never self-mutates the selection. Leaving it
/// `None` makes the instance uncontrolled, seeded from `default_value`.
#[derive(Default)]
pub struct TabsRootProps {
    /// External selection value (controlled mode).
    pub value: Option<PropValue<Option<String>>>,
    /// Initial selection for uncontrolled mode.
    pub default_value: Option<String>,
    /// Notified with the requested tab value on every change request.
    pub on_value_change: Option<Rc<dyn Fn(&str)>>,
    pub orientation: Orientation,
    pub direction: Direction,
    pub activation_mode: ActivationMode,
    /// Registry id passthrough.
    pub id: Option<String>,
    /// Extra attributes.
    pub attrs: AttrList,
    pub children: Option<Box<dyn FnOnce()>>,
}

// =============================================================================
// List Props
// =============================================================================

/// Props for [`tabs_list`](crate::tabs::tabs_list).
pub struct TabsListProps {
    /// Wrap arrow navigation from last trigger to first (and back).
    pub loop_focus: bool,
    pub attrs: AttrList,
    pub children: Option<Box<dyn FnOnce()>>,
}

impl Default for TabsListProps {
    fn default() -> Self {
        Self {
            loop_focus: true,
            attrs: Vec::new(),
            children: None,
        }
    }
}

// =============================================================================
// Trigger Props
// =============================================================================

/// Props for [`tabs_trigger`](crate::tabs::tabs_trigger).
///
/// `value` is required; it is the identity key linking this trigger to the
/// content panel with the same value.
#[derive(Default)]
pub struct TabsTriggerProps {
    /// Tab identity key.
    pub value: String,
    /// Disabled triggers render but are excluded from every interaction path.
    pub disabled: PropValue<bool>,
    /// Caller keyboard handler, runs before the internal one.
    pub on_key_down: Option<TriggerKeyHandler>,
    /// Caller mouse handler, runs before the internal one.
    pub on_mouse_down: Option<TriggerMouseHandler>,
    /// Caller focus handler, runs before automatic activation.
    pub on_focus: Option<TriggerFocusHandler>,
    pub attrs: AttrList,
    pub children: Option<Box<dyn FnOnce()>>,
}

// =============================================================================
// Content Props
// =============================================================================

/// Props for [`tabs_content`](crate::tabs::tabs_content).
///
/// `children` is re-callable: it runs on every transition to selected, and
/// the subtree it built is released on every transition away. Panel child
/// state is transient by design.
#[derive(Default)]
pub struct TabsContentProps {
    /// Tab identity key.
    pub value: String,
    pub attrs: AttrList,
    pub children: Option<Rc<dyn Fn()>>,
}
