//! Tabs Content - Panel for one tab value.
//!
//! The panel element itself stays allocated for the instance's lifetime so
//! its id and the trigger's `aria-controls` reference stay valid. Children
//! are another matter: they exist only while the panel is selected. On
//! deselection the whole child subtree is released, so panel child state is
//! transient and rebuilt fresh on re-selection.

use std::cell::Cell;
use std::mem::ManuallyDrop;
use std::rc::Rc;

use spark_signals::{effect, effect_scope};

use super::context::use_tabs_context;
use super::types::TabsContentProps;
use crate::engine::arrays::{attrs, core, interaction};
use crate::engine::{
    allocate_index, on_destroy, pop_parent_context, push_parent_context, release_children,
    release_index,
};
use crate::types::{Cleanup, ComponentType, DataState};

/// Create a tabs content panel. Must be inside a `tabs_root` (panics
/// otherwise).
///
/// A panel whose value matches no trigger is tolerated; it stays hidden
/// until some trigger with the same value appears and is selected.
pub fn tabs_content(props: TabsContentProps) -> Cleanup {
    let context = use_tabs_context("tabs_content");

    let index = allocate_index(None);
    let value = props.value;

    core::set_component_type(index, ComponentType::Content);

    let is_selected: Rc<dyn Fn() -> bool> = {
        let context = context.clone();
        let value = value.clone();
        Rc::new(move || context.is_selected(&value))
    };

    attrs::set(index, "role", "tabpanel");
    attrs::set(index, "id", context.content_id(&value));
    attrs::set(index, "aria-labelledby", context.trigger_id(&value));
    attrs::set(index, "data-orientation", context.orientation.as_str());

    {
        let selected = is_selected.clone();
        attrs::set_getter(index, "data-state", move || {
            Some(DataState::from_selected(selected()).as_str().to_string())
        });
    }
    {
        let selected = is_selected.clone();
        attrs::set_getter(index, "hidden", move || {
            if selected() {
                None
            } else {
                Some(String::new())
            }
        });
    }

    for (name, attr_value) in props.attrs {
        attrs::set(index, name, attr_value);
    }

    {
        let selected = is_selected.clone();
        core::set_visible_getter(index, move || selected());
    }

    // The panel is an ordinary tab stop
    interaction::set_focusable(index, true);

    // Mount children on selection, release the subtree on deselection
    if let Some(children) = props.children {
        let scope = effect_scope(false);
        let selected = is_selected.clone();
        let was_selected: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));

        scope.run(move || {
            let _effect_cleanup = effect(move || {
                let now = selected();
                if was_selected.get() == Some(now) {
                    return;
                }
                was_selected.set(Some(now));

                if now {
                    push_parent_context(index);
                    children();
                    pop_parent_context();
                } else {
                    release_children(index);
                }
            });
        });

        // The scope's destructor touches the signal runtime, so it must
        // never fire while the destroy-callback map is torn down at thread
        // exit. ManuallyDrop keeps an unrun callback inert; the scope is
        // only dropped through an explicit stop on release.
        let scope = ManuallyDrop::new(scope);
        on_destroy(index, move || {
            ManuallyDrop::into_inner(scope).stop();
        });
    }

    Box::new(move || {
        release_index(index);
    })
}
