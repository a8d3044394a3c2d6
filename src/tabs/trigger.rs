//! Tabs Trigger - Selectable control for one tab value.
//!
//! A trigger owns the three interaction paths that can activate its tab:
//!
//! 1. Keyboard: Space or Enter while focused.
//! 2. Pointer: primary-button press without Ctrl (Ctrl+click is the
//!    platform secondary-click gesture and never activates).
//! 3. Focus: gaining focus activates when the activation mode is Automatic.
//!
//! Every path is guarded by the disabled flag and funnels into the single
//! context write path. Caller handlers run first and may consume the event
//! to suppress the internal activation.

use std::rc::Rc;

use super::context::use_tabs_context;
use super::types::TabsTriggerProps;
use crate::engine::arrays::{attrs, core, interaction};
use crate::engine::{
    allocate_index, on_destroy, pop_parent_context, push_parent_context, release_index,
};
use crate::state::focus::{self, FocusCallbacks};
use crate::state::{keyboard, mouse, roving};
use crate::types::{ActivationMode, Cleanup, ComponentType, DataState};

/// Create a tabs trigger. Must be inside a `tabs_root` (panics otherwise).
///
/// A trigger whose value matches no content panel still renders and can be
/// selected; the dangling `aria-controls` reference is tolerated.
pub fn tabs_trigger(props: TabsTriggerProps) -> Cleanup {
    let context = use_tabs_context("tabs_trigger");

    let index = allocate_index(None);
    let value = props.value;
    let disabled = props.disabled;

    core::set_component_type(index, ComponentType::Trigger);

    // Selection derives from the context on every read, never cached
    let is_selected: Rc<dyn Fn() -> bool> = {
        let context = context.clone();
        let value = value.clone();
        Rc::new(move || context.is_selected(&value))
    };

    // Static attributes
    attrs::set(index, "role", "tab");
    attrs::set(index, "id", context.trigger_id(&value));
    attrs::set(index, "aria-controls", context.content_id(&value));
    attrs::set(index, "data-orientation", context.orientation.as_str());

    // State-derived attributes
    {
        let selected = is_selected.clone();
        attrs::set_getter(index, "aria-selected", move || {
            Some(if selected() { "true" } else { "false" }.to_string())
        });
    }
    {
        let selected = is_selected.clone();
        attrs::set_getter(index, "data-state", move || {
            Some(DataState::from_selected(selected()).as_str().to_string())
        });
    }
    {
        let disabled = disabled.clone();
        attrs::set_getter(index, "aria-disabled", move || {
            if disabled.get() {
                Some("true".to_string())
            } else {
                None
            }
        });
    }
    {
        let disabled = disabled.clone();
        attrs::set_getter(index, "data-disabled", move || {
            if disabled.get() {
                Some(String::new())
            } else {
                None
            }
        });
    }

    for (name, attr_value) in props.attrs {
        attrs::set(index, name, attr_value);
    }

    // Focusable iff not disabled
    {
        let disabled = disabled.clone();
        interaction::set_focusable_getter(index, move || !disabled.get());
    }

    // The one action all three paths funnel into
    let activate: Rc<dyn Fn()> = {
        let context = context.clone();
        let value = value.clone();
        let disabled = disabled.clone();
        Rc::new(move || {
            if !disabled.get() {
                context.set_value(&value);
            }
        })
    };

    // Path 1: keyboard while focused
    {
        let activate = activate.clone();
        let caller = props.on_key_down;
        let key_cleanup = keyboard::on_focused(index, move |event| {
            if let Some(handler) = &caller {
                if handler(event) {
                    return true;
                }
            }
            if event.is_activation_key() {
                activate();
                return true;
            }
            false
        });
        on_destroy(index, key_cleanup);
    }

    // Path 2: pointer
    {
        let activate = activate.clone();
        let disabled = disabled.clone();
        let caller = props.on_mouse_down;
        let mouse_cleanup = mouse::on_component(
            index,
            mouse::MouseHandlers {
                on_mouse_down: Some(Rc::new(move |event| {
                    if let Some(handler) = &caller {
                        if handler(event) {
                            return true;
                        }
                    }
                    if event.is_primary_activation() && !disabled.get() {
                        focus::focus(index);
                        activate();
                        return true;
                    }
                    false
                })),
                ..Default::default()
            },
        );
        on_destroy(index, mouse_cleanup);
    }

    // Path 3: focus (automatic activation)
    {
        let context = context.clone();
        let value = value.clone();
        let disabled = disabled.clone();
        let caller = props.on_focus;
        let focus_cleanup = focus::register_callbacks(
            index,
            FocusCallbacks {
                on_focus: Some(Box::new(move || {
                    if let Some(handler) = &caller {
                        if handler() {
                            return;
                        }
                    }
                    if context.activation_mode == ActivationMode::Manual {
                        return;
                    }
                    if disabled.get() || context.is_selected(&value) {
                        return;
                    }
                    context.set_value(&value);
                })),
                on_blur: None,
            },
        );
        on_destroy(index, focus_cleanup);
    }

    // Roving group registration. A trigger outside any list is tolerated;
    // it just takes no part in arrow navigation.
    if let Some(group) = roving::current_group() {
        let focusable = {
            let disabled = disabled.clone();
            Rc::new(move || !disabled.get())
        };
        let roving_cleanup = roving::register_item(group, index, focusable, is_selected);
        on_destroy(index, roving_cleanup);
    }

    on_destroy(index, move || {
        mouse::cleanup_index(index);
        keyboard::cleanup_index(index);
    });

    if let Some(children) = props.children {
        push_parent_context(index);
        children();
        pop_parent_context();
    }

    Box::new(move || {
        release_index(index);
    })
}
