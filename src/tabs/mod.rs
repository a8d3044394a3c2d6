//! Tabs - The four composition primitives.
//!
//! - [`tabs_root`] - Owns selection, provides the shared context
//! - [`tabs_list`] - Trigger container with one roving focus group
//! - [`tabs_trigger`] - Selectable control for one tab value
//! - [`tabs_content`] - Panel shown while its value is selected
//!
//! Compose them by nesting children closures; list/trigger/content panic
//! when created outside a root's children.

pub mod content;
pub mod context;
pub mod list;
pub mod root;
pub mod trigger;
pub mod types;

pub use content::tabs_content;
pub use context::{use_tabs_context, SelectionOwner, TabsContext};
pub use list::tabs_list;
pub use root::tabs_root;
pub use trigger::tabs_trigger;
pub use types::{
    AttrList, TabsContentProps, TabsListProps, TabsRootProps, TabsTriggerProps,
    TriggerFocusHandler, TriggerKeyHandler, TriggerMouseHandler,
};
