//! Tabs Root - Owns selection state and provides the shared context.
//!
//! # Example
//!
//! ```ignore
//! use tabstrip::tabs::{tabs_root, tabs_list, tabs_trigger, tabs_content};
//! use tabstrip::tabs::{TabsRootProps, TabsListProps, TabsTriggerProps, TabsContentProps};
//!
//! let cleanup = tabs_root(TabsRootProps {
//!     default_value: Some("general".to_string()),
//!     children: Some(Box::new(|| {
//!         tabs_list(TabsListProps {
//!             children: Some(Box::new(|| {
//!                 tabs_trigger(TabsTriggerProps {
//!                     value: "general".to_string(),
//!                     ..Default::default()
//!                 });
//!                 tabs_trigger(TabsTriggerProps {
//!                     value: "advanced".to_string(),
//!                     ..Default::default()
//!                 });
//!             })),
//!             ..Default::default()
//!         });
//!         tabs_content(TabsContentProps {
//!             value: "general".to_string(),
//!             ..Default::default()
//!         });
//!         tabs_content(TabsContentProps {
//!             value: "advanced".to_string(),
//!             ..Default::default()
//!         });
//!     })),
//!     ..Default::default()
//! });
//! ```

use std::rc::Rc;

use spark_signals::signal;

use super::context::{pop_context, push_context, SelectionOwner, TabsContext};
use super::types::TabsRootProps;
use crate::engine::arrays::{attrs, core};
use crate::engine::{
    allocate_index, next_base_id, pop_parent_context, push_parent_context, release_index,
};
use crate::types::{Cleanup, ComponentType};

/// Create a tabs root.
///
/// Resolves selection ownership once: a `value` prop makes the instance
/// controlled for its whole lifetime, otherwise an owned signal is seeded
/// from `default_value`. Renders children with the shared context and the
/// parent context pushed.
///
/// Returns a cleanup that unmounts the whole instance.
pub fn tabs_root(props: TabsRootProps) -> Cleanup {
    let index = allocate_index(props.id.as_deref());

    core::set_component_type(index, ComponentType::Root);

    let owner = match props.value {
        Some(external) => SelectionOwner::External(external),
        None => SelectionOwner::Owned(signal(props.default_value)),
    };

    let context = Rc::new(TabsContext::new(
        next_base_id(),
        owner,
        props.on_value_change,
        props.orientation,
        props.direction,
        props.activation_mode,
    ));

    attrs::set(index, "data-orientation", context.orientation.as_str());
    for (name, value) in props.attrs {
        attrs::set(index, name, value);
    }

    if let Some(children) = props.children {
        push_context(context);
        push_parent_context(index);
        children();
        pop_parent_context();
        pop_context();
    }

    Box::new(move || {
        release_index(index);
    })
}
