//! Tabs Context - Shared selection state for one tabs instance.
//!
//! Every tabs instance shares a single [`TabsContext`] between its root,
//! list, triggers and contents. The root creates it and pushes it onto a
//! thread-local stack around its children; descendants grab it with
//! [`use_tabs_context`]. Nested instances shadow outer ones, so identical
//! tab values in different instances never interfere.
//!
//! The context also owns the one write path for selection:
//! [`TabsContext::set_value`]. In uncontrolled mode it mutates the owned
//! signal; in controlled mode it only notifies the caller and the external
//! value stays authoritative.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::Signal;

use crate::types::{ActivationMode, Direction, Orientation, PropValue};

// =============================================================================
// SELECTION OWNER
// =============================================================================

/// Who owns the selection value. Resolved once when the root is built;
/// switching modes mid-lifecycle is unsupported.
pub enum SelectionOwner {
    /// Uncontrolled: the root owns the value in a signal.
    Owned(Signal<Option<String>>),
    /// Controlled: the caller owns the value; reads go through the prop on
    /// every access and internal writes only notify.
    External(PropValue<Option<String>>),
}

// =============================================================================
// TABS CONTEXT
// =============================================================================

/// Per-instance shared record. Created by `tabs_root`, read-only for
/// descendants except through [`TabsContext::set_value`].
pub struct TabsContext {
    /// Instance-unique namespace for derived element ids.
    pub base_id: String,
    owner: SelectionOwner,
    on_value_change: Option<Rc<dyn Fn(&str)>>,
    pub orientation: Orientation,
    pub direction: Direction,
    pub activation_mode: ActivationMode,
}

impl TabsContext {
    pub fn new(
        base_id: String,
        owner: SelectionOwner,
        on_value_change: Option<Rc<dyn Fn(&str)>>,
        orientation: Orientation,
        direction: Direction,
        activation_mode: ActivationMode,
    ) -> Self {
        Self {
            base_id,
            owner,
            on_value_change,
            orientation,
            direction,
            activation_mode,
        }
    }

    /// Current selection value. None = nothing selected.
    pub fn value(&self) -> Option<String> {
        match &self.owner {
            SelectionOwner::Owned(signal) => signal.get(),
            SelectionOwner::External(prop) => prop.get(),
        }
    }

    /// Whether the given tab value is the current selection.
    pub fn is_selected(&self, value: &str) -> bool {
        self.value().as_deref() == Some(value)
    }

    /// Request a selection change. The single writer path.
    ///
    /// No-op when the value is already selected. Uncontrolled: the owned
    /// signal is updated and the change callback invoked for observability.
    /// Controlled: only the callback is invoked; the visible selection moves
    /// when the caller updates the external value.
    pub fn set_value(&self, value: &str) {
        if self.is_selected(value) {
            return;
        }

        if let SelectionOwner::Owned(signal) = &self.owner {
            signal.set(Some(value.to_string()));
        }

        if let Some(callback) = &self.on_value_change {
            callback(value);
        }
    }

    /// Derived trigger element id: `{base_id}-trigger-{value}`.
    pub fn trigger_id(&self, value: &str) -> String {
        format!("{}-trigger-{}", self.base_id, value)
    }

    /// Derived content element id: `{base_id}-content-{value}`.
    pub fn content_id(&self, value: &str) -> String {
        format!("{}-content-{}", self.base_id, value)
    }
}

// =============================================================================
// CONTEXT STACK
// =============================================================================

thread_local! {
    /// Stack of contexts for nested instances. Innermost last.
    static CONTEXT_STACK: RefCell<Vec<Rc<TabsContext>>> = RefCell::new(Vec::new());
}

/// Push a context for the duration of a root's children.
pub fn push_context(context: Rc<TabsContext>) {
    CONTEXT_STACK.with(|stack| {
        stack.borrow_mut().push(context);
    });
}

/// Pop the innermost context.
pub fn pop_context() {
    CONTEXT_STACK.with(|stack| {
        stack.borrow_mut().pop();
    });
}

/// Get the innermost tabs context.
///
/// Panics when called outside a `tabs_root`'s children; `consumer` names
/// the offending component in the message.
pub fn use_tabs_context(consumer: &str) -> Rc<TabsContext> {
    CONTEXT_STACK
        .with(|stack| stack.borrow().last().cloned())
        .unwrap_or_else(|| {
            panic!("{consumer} must be created inside the children of tabs_root")
        })
}

/// Reset the context stack (for testing).
pub fn reset_context_state() {
    CONTEXT_STACK.with(|stack| stack.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================
