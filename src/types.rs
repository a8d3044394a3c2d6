//! Core types for tabstrip.
//!
//! These types define the foundation that everything builds on: the
//! configuration enums shared through the tabs context, the reactive
//! prop wrapper, and the cleanup contract every component returns.

use std::rc::Rc;

use spark_signals::Signal;

// =============================================================================
// Component Type
// =============================================================================

/// What kind of component occupies an index in the parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentType {
    /// Unallocated slot.
    #[default]
    None,
    /// Tabs root container.
    Root,
    /// Trigger list container (role "tablist").
    List,
    /// Single tab trigger (role "tab").
    Trigger,
    /// Single tab panel (role "tabpanel").
    Content,
}

// =============================================================================
// Tabs Configuration
// =============================================================================

/// Axis of the trigger list. Decides which arrow keys move the roving focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Value emitted as `data-orientation`.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Reading direction. Flips left/right arrow polarity on horizontal lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Whether moving keyboard focus onto a trigger selects it by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationMode {
    /// Focus alone activates (arrow navigation switches panels immediately).
    #[default]
    Automatic,
    /// Focus alone does nothing; Space/Enter or a click is required.
    Manual,
}

/// Selection state of a trigger/content pair, emitted as `data-state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataState {
    Active,
    Inactive,
}

impl DataState {
    pub fn as_str(self) -> &'static str {
        match self {
            DataState::Active => "active",
            DataState::Inactive => "inactive",
        }
    }

    /// State for a given selection flag.
    pub fn from_selected(selected: bool) -> Self {
        if selected {
            DataState::Active
        } else {
            DataState::Inactive
        }
    }
}

// =============================================================================
// Modifiers (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Keyboard modifier state as a bitfield.
    ///
    /// Combine with bitwise OR: `Modifiers::CTRL | Modifiers::SHIFT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const CTRL = 1 << 0;
        const ALT = 1 << 1;
        const SHIFT = 1 << 2;
        const META = 1 << 3;
    }
}

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// This enables reactive props while maintaining type safety. When bound
/// into attribute or visibility slots, the reactive connection is preserved:
/// a `Signal` prop keeps propagating changes after the component is built.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time the value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<Option<String>> {
    fn from(value: &str) -> Self {
        PropValue::Static(Some(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_static() {
        let p: PropValue<bool> = true.into();
        assert!(p.get());
    }

    #[test]
    fn test_prop_value_signal_stays_connected() {
        let s = signal(false);
        let p: PropValue<bool> = s.clone().into();
        assert!(!p.get());

        s.set(true);
        assert!(p.get());
    }

    #[test]
    fn test_prop_value_getter() {
        let p: PropValue<String> = PropValue::Getter(Rc::new(|| "x".to_string()));
        assert_eq!(p.get(), "x");
    }

    #[test]
    fn test_data_state_strings() {
        assert_eq!(DataState::from_selected(true).as_str(), "active");
        assert_eq!(DataState::from_selected(false).as_str(), "inactive");
    }

    #[test]
    fn test_modifiers_bits() {
        let m = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(m.contains(Modifiers::CTRL));
        assert!(!m.contains(Modifiers::ALT));
    }
}
