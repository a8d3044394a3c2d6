//! # tabstrip
//!
//! Accessible tabbed-navigation primitives for reactive terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Components are indices into thread-local parallel arrays rather than
//! objects. A component constructor allocates an index, binds its state
//! into the arrays (attributes, visibility and focusability cells accept
//! getters so they derive from selection state), and returns a `Cleanup`.
//!
//! One tabs instance is four constructors sharing a [`tabs::TabsContext`]:
//!
//! ```text
//! tabs_root ── owns/proxies selection, provides context
//! ├── tabs_list ── role "tablist", one roving focus group
//! │   ├── tabs_trigger("a") ── role "tab", three activation paths
//! │   └── tabs_trigger("b")
//! ├── tabs_content("a") ── role "tabpanel", children mounted while selected
//! └── tabs_content("b")
//! ```
//!
//! Rendering, layout and hit testing belong to the host: it reads the
//! attribute and visibility arrays, and feeds events back through
//! [`state::input::route_event`] with target indices resolved.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Orientation, ActivationMode, PropValue, ...)
//! - [`engine`] - Component registry and parallel arrays
//! - [`state`] - Focus, keyboard/mouse dispatch, roving focus groups
//! - [`tabs`] - The four composition primitives

pub mod engine;
pub mod state;
pub mod tabs;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    allocate_index, get_allocated_count, get_allocated_indices, get_current_parent_index, get_id,
    get_index, is_allocated, on_destroy, pop_parent_context, push_parent_context,
    release_children, release_index, reset_registry,
};

pub use tabs::{
    tabs_content, tabs_list, tabs_root, tabs_trigger, use_tabs_context, SelectionOwner,
    TabsContentProps, TabsContext, TabsListProps, TabsRootProps, TabsTriggerProps,
};

pub use state::focus::{
    blur, focus, focus_first, focus_next, focus_previous, get_focusable_indices,
    get_focused_index, has_focus, is_focused, register_callbacks, reset_focus_state,
    FocusCallbacks,
};

pub use state::input::{poll_event, read_event, route_event, route_key_event, InputEvent};

pub use state::keyboard::{KeyHandler, KeyState, KeyboardEvent};

pub use state::mouse::{MouseAction, MouseButton, MouseEvent, MouseHandlers};

pub use state::roving::GroupOptions;
