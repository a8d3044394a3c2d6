//! Tabs List - Trigger container with one roving focus group.
//!
//! Declares `role="tablist"` and creates the instance's roving focus group
//! from the context orientation and direction plus its own `loop_focus`
//! flag. Triggers created inside its children register with the group; the
//! list itself holds no state.

use super::context::use_tabs_context;
use super::types::TabsListProps;
use crate::engine::arrays::{attrs, core};
use crate::engine::{
    allocate_index, on_destroy, pop_parent_context, push_parent_context, release_index,
};
use crate::state::roving::{self, GroupOptions};
use crate::types::{Cleanup, ComponentType};

/// Create a tabs list. Must be inside a `tabs_root` (panics otherwise).
pub fn tabs_list(props: TabsListProps) -> Cleanup {
    let context = use_tabs_context("tabs_list");

    let index = allocate_index(None);

    core::set_component_type(index, ComponentType::List);

    attrs::set(index, "role", "tablist");
    attrs::set(index, "data-orientation", context.orientation.as_str());
    for (name, value) in props.attrs {
        attrs::set(index, name, value);
    }

    let group = roving::create_group(GroupOptions {
        orientation: context.orientation,
        direction: context.direction,
        loop_focus: props.loop_focus,
    });
    on_destroy(index, move || roving::destroy_group(group));

    if let Some(children) = props.children {
        push_parent_context(index);
        roving::push_group_context(group);
        children();
        roving::pop_group_context();
        pop_parent_context();
    }

    Box::new(move || {
        release_index(index);
    })
}
