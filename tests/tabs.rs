//! End-to-end tests for a complete tabs instance: selection exclusivity,
//! controlled/uncontrolled ownership, activation modes, disabled exclusion,
//! pointer gesture filtering, identifier determinism and instance isolation.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::signal;

use tabstrip::engine::arrays::attrs;
use tabstrip::engine::arrays::core;
use tabstrip::state::{focus, keyboard, mouse, roving};
use tabstrip::tabs::context::reset_context_state;
use tabstrip::types::{ActivationMode, Cleanup, PropValue};
use tabstrip::{
    allocate_index, get_allocated_indices, get_index, reset_registry, route_key_event,
    tabs_content, tabs_list, tabs_root, tabs_trigger, KeyboardEvent, MouseButton, MouseEvent,
    Orientation, TabsContentProps, TabsListProps, TabsRootProps, TabsTriggerProps,
};

fn setup() {
    reset_registry();
    reset_context_state();
    focus::reset_focus_state();
    keyboard::reset_keyboard_state();
    mouse::reset_mouse_state();
    roving::reset_roving_state();
}

/// Mount a root with triggers and contents for values a, b, c.
///
/// Each panel's children allocate a marker component with a stable registry
/// id (`child-a` etc.) so tests can observe mounting without caring about
/// index reuse.
fn mount_instance(mut root: TabsRootProps, disabled_values: &[&str]) -> Cleanup {
    let disabled: Vec<String> = disabled_values.iter().map(|s| s.to_string()).collect();
    root.children = Some(Box::new(move || {
        let disabled_for_list = disabled.clone();
        tabs_list(TabsListProps {
            children: Some(Box::new(move || {
                for value in ["a", "b", "c"] {
                    tabs_trigger(TabsTriggerProps {
                        value: value.to_string(),
                        disabled: PropValue::Static(
                            disabled_for_list.iter().any(|d| d.as_str() == value),
                        ),
                        ..Default::default()
                    });
                }
            })),
            ..Default::default()
        });
        for value in ["a", "b", "c"] {
            let child_id = format!("child-{value}");
            tabs_content(TabsContentProps {
                value: value.to_string(),
                children: Some(Rc::new(move || {
                    allocate_index(Some(child_id.as_str()));
                })),
                ..Default::default()
            });
        }
    }));
    tabs_root(root)
}

/// Find a component index by its element id attribute.
fn index_of(element_id: &str) -> usize {
    get_allocated_indices()
        .into_iter()
        .find(|&i| attrs::get(i, "id").as_deref() == Some(element_id))
        .unwrap_or_else(|| panic!("no element with id {element_id}"))
}

fn trigger_index(value: &str) -> usize {
    index_of(&format!("tabs-0-trigger-{value}"))
}

fn content_index(value: &str) -> usize {
    index_of(&format!("tabs-0-content-{value}"))
}

/// Primary left click on a component.
fn click(index: usize) -> bool {
    let mut event = MouseEvent::down(MouseButton::Left, 0, 0);
    event.component_index = Some(index);
    mouse::dispatch(event)
}

fn selected_value() -> Option<String> {
    for value in ["a", "b", "c"] {
        if attrs::get(trigger_index(value), "data-state").as_deref() == Some("active") {
            return Some(value.to_string());
        }
    }
    None
}

// =============================================================================
// Selection exclusivity and uncontrolled defaults
// =============================================================================

#[test]
fn selection_is_exclusive_across_contents() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            ..Default::default()
        },
        &[],
    );

    assert_eq!(selected_value(), Some("a".to_string()));
    assert!(!attrs::has(content_index("a"), "hidden"));
    assert!(attrs::has(content_index("b"), "hidden"));
    assert!(attrs::has(content_index("c"), "hidden"));

    click(trigger_index("b"));

    assert_eq!(selected_value(), Some("b".to_string()));
    assert!(attrs::has(content_index("a"), "hidden"));
    assert!(!attrs::has(content_index("b"), "hidden"));
    assert!(attrs::has(content_index("c"), "hidden"));

    // The selected trigger is the list's roving tab stop
    assert_eq!(roving::primary_stop(0), Some(trigger_index("b")));
}

#[test]
fn uncontrolled_default_mounts_only_selected_panel() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            ..Default::default()
        },
        &[],
    );

    // Panel a's children exist; b and c stay allocated but hidden and empty
    assert!(get_index("child-a").is_some());
    assert!(get_index("child-b").is_none());
    assert!(get_index("child-c").is_none());

    assert!(core::get_visible(content_index("a")));
    assert!(!core::get_visible(content_index("b")));

    // Selecting b swaps the mounted subtree
    click(trigger_index("b"));
    assert!(get_index("child-a").is_none());
    assert!(get_index("child-b").is_some());
}

#[test]
fn no_default_selects_nothing() {
    setup();

    let _cleanup = mount_instance(TabsRootProps::default(), &[]);

    assert_eq!(selected_value(), None);
    for value in ["a", "b", "c"] {
        assert!(attrs::has(content_index(value), "hidden"));
        assert!(get_index(&format!("child-{value}")).is_none());
    }
}

// =============================================================================
// Controlled mode
// =============================================================================

#[test]
fn controlled_static_value_pins_selection() {
    setup();

    let requests = Rc::new(RefCell::new(Vec::new()));
    let requests_clone = requests.clone();

    let _cleanup = mount_instance(
        TabsRootProps {
            value: Some(PropValue::Static(Some("b".to_string()))),
            on_value_change: Some(Rc::new(move |value: &str| {
                requests_clone.borrow_mut().push(value.to_string());
            })),
            ..Default::default()
        },
        &[],
    );

    assert_eq!(selected_value(), Some("b".to_string()));

    // Clicking a requests the change but the visible selection stays put
    click(trigger_index("a"));
    assert_eq!(*requests.borrow(), vec!["a".to_string()]);
    assert_eq!(selected_value(), Some("b".to_string()));
    assert!(get_index("child-b").is_some());
    assert!(get_index("child-a").is_none());
}

#[test]
fn controlled_signal_moves_selection_when_caller_updates() {
    setup();

    let external = signal(Some("a".to_string()));

    let _cleanup = mount_instance(
        TabsRootProps {
            value: Some(PropValue::Signal(external.clone())),
            ..Default::default()
        },
        &[],
    );

    assert_eq!(selected_value(), Some("a".to_string()));

    external.set(Some("c".to_string()));

    assert_eq!(selected_value(), Some("c".to_string()));
    assert!(get_index("child-a").is_none());
    assert!(get_index("child-c").is_some());
}

// =============================================================================
// Activation modes
// =============================================================================

#[test]
fn automatic_mode_selects_on_focus_move() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            ..Default::default()
        },
        &[],
    );

    focus::focus(trigger_index("a"));
    assert_eq!(selected_value(), Some("a".to_string()));

    // Arrow moves focus; automatic mode selects along the way
    assert!(route_key_event(KeyboardEvent::new("ArrowRight")));
    assert_eq!(focus::get_focused_index(), trigger_index("b") as i32);
    assert_eq!(selected_value(), Some("b".to_string()));

    assert!(route_key_event(KeyboardEvent::new("ArrowRight")));
    assert_eq!(selected_value(), Some("c".to_string()));

    // Wraps back to a
    assert!(route_key_event(KeyboardEvent::new("ArrowRight")));
    assert_eq!(selected_value(), Some("a".to_string()));
}

#[test]
fn manual_mode_requires_explicit_activation() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            activation_mode: ActivationMode::Manual,
            ..Default::default()
        },
        &[],
    );

    focus::focus(trigger_index("a"));
    assert!(route_key_event(KeyboardEvent::new("ArrowRight")));

    // Focus moved, selection did not
    assert_eq!(focus::get_focused_index(), trigger_index("b") as i32);
    assert_eq!(selected_value(), Some("a".to_string()));

    // Enter selects the focused trigger
    assert!(route_key_event(KeyboardEvent::new("Enter")));
    assert_eq!(selected_value(), Some("b".to_string()));

    // Space works the same way
    assert!(route_key_event(KeyboardEvent::new("ArrowRight")));
    assert_eq!(selected_value(), Some("b".to_string()));
    assert!(route_key_event(KeyboardEvent::new(" ")));
    assert_eq!(selected_value(), Some("c".to_string()));

    // And a primary click selects without focus help
    click(trigger_index("a"));
    assert_eq!(selected_value(), Some("a".to_string()));
}

#[test]
fn vertical_orientation_uses_up_down_arrows() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            orientation: Orientation::Vertical,
            ..Default::default()
        },
        &[],
    );

    focus::focus(trigger_index("a"));

    // Horizontal arrows fall through on a vertical list
    assert!(!route_key_event(KeyboardEvent::new("ArrowRight")));
    assert_eq!(selected_value(), Some("a".to_string()));

    assert!(route_key_event(KeyboardEvent::new("ArrowDown")));
    assert_eq!(selected_value(), Some("b".to_string()));
}

// =============================================================================
// Disabled triggers
// =============================================================================

#[test]
fn disabled_trigger_excluded_from_all_paths() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            ..Default::default()
        },
        &["b"],
    );

    // Pointer: click does nothing
    click(trigger_index("b"));
    assert_eq!(selected_value(), Some("a".to_string()));

    // Focus: not focusable, arrow navigation skips straight to c
    assert!(!focus::focus(trigger_index("b")));
    focus::focus(trigger_index("a"));
    assert!(route_key_event(KeyboardEvent::new("ArrowRight")));
    assert_eq!(focus::get_focused_index(), trigger_index("c") as i32);
    assert_eq!(selected_value(), Some("c".to_string()));
}

#[test]
fn disabled_trigger_excluded_in_manual_mode() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            activation_mode: ActivationMode::Manual,
            ..Default::default()
        },
        &["c"],
    );

    click(trigger_index("c"));
    assert_eq!(selected_value(), Some("a".to_string()));

    // End jumps to the last focusable trigger, which is b
    focus::focus(trigger_index("a"));
    assert!(route_key_event(KeyboardEvent::new("End")));
    assert_eq!(focus::get_focused_index(), trigger_index("b") as i32);
}

// =============================================================================
// Pointer gesture filtering
// =============================================================================

#[test]
fn secondary_click_does_not_activate() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            ..Default::default()
        },
        &[],
    );

    let target = trigger_index("b");

    let mut right = MouseEvent::down(MouseButton::Right, 0, 0);
    right.component_index = Some(target);
    mouse::dispatch(right);
    assert_eq!(selected_value(), Some("a".to_string()));

    let mut ctrl_left = MouseEvent::down(MouseButton::Left, 0, 0);
    ctrl_left.modifiers = tabstrip::Modifiers::CTRL;
    ctrl_left.component_index = Some(target);
    mouse::dispatch(ctrl_left);
    assert_eq!(selected_value(), Some("a".to_string()));

    // Button release alone is not an activation either
    let mut up = MouseEvent::up(MouseButton::Left, 0, 0);
    up.component_index = Some(target);
    mouse::dispatch(up);
    assert_eq!(selected_value(), Some("a".to_string()));
}

#[test]
fn caller_handler_can_consume_and_suppress_activation() {
    setup();

    let _cleanup = tabs_root(TabsRootProps {
        default_value: Some("a".to_string()),
        children: Some(Box::new(|| {
            tabs_list(TabsListProps {
                children: Some(Box::new(|| {
                    tabs_trigger(TabsTriggerProps {
                        value: "a".to_string(),
                        ..Default::default()
                    });
                    tabs_trigger(TabsTriggerProps {
                        value: "b".to_string(),
                        on_mouse_down: Some(Rc::new(|_| true)),
                        ..Default::default()
                    });
                })),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    click(trigger_index("b"));
    assert_eq!(selected_value(), Some("a".to_string()));
}

#[test]
fn caller_key_handler_runs_first_and_can_suppress() {
    setup();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();

    let _cleanup = tabs_root(TabsRootProps {
        default_value: Some("a".to_string()),
        activation_mode: ActivationMode::Manual,
        children: Some(Box::new(move || {
            tabs_list(TabsListProps {
                children: Some(Box::new(move || {
                    tabs_trigger(TabsTriggerProps {
                        value: "a".to_string(),
                        ..Default::default()
                    });
                    tabs_trigger(TabsTriggerProps {
                        value: "b".to_string(),
                        on_key_down: Some(Rc::new(move |event: &KeyboardEvent| {
                            seen_clone.borrow_mut().push(event.key.clone());
                            event.key == "Enter"
                        })),
                        ..Default::default()
                    });
                })),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    focus::focus(trigger_index("b"));

    // Consumed by the caller: Enter does not activate
    assert!(route_key_event(KeyboardEvent::new("Enter")));
    assert_eq!(selected_value(), Some("a".to_string()));

    // Not consumed: the caller saw Space first, then activation ran
    assert!(route_key_event(KeyboardEvent::new(" ")));
    assert_eq!(selected_value(), Some("b".to_string()));
    assert_eq!(*seen.borrow(), vec!["Enter".to_string(), " ".to_string()]);
}

#[test]
fn caller_focus_handler_can_suppress_automatic_activation() {
    setup();

    let _cleanup = tabs_root(TabsRootProps {
        default_value: Some("a".to_string()),
        children: Some(Box::new(|| {
            tabs_list(TabsListProps {
                children: Some(Box::new(|| {
                    tabs_trigger(TabsTriggerProps {
                        value: "a".to_string(),
                        ..Default::default()
                    });
                    tabs_trigger(TabsTriggerProps {
                        value: "b".to_string(),
                        on_focus: Some(Rc::new(|| true)),
                        ..Default::default()
                    });
                    tabs_trigger(TabsTriggerProps {
                        value: "c".to_string(),
                        ..Default::default()
                    });
                })),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    // Focus lands on b but the caller consumed the event, so automatic
    // activation is suppressed
    focus::focus(trigger_index("b"));
    assert_eq!(focus::get_focused_index(), trigger_index("b") as i32);
    assert_eq!(selected_value(), Some("a".to_string()));

    // An unhandled trigger still activates on focus
    focus::focus(trigger_index("c"));
    assert_eq!(selected_value(), Some("c".to_string()));
}

// =============================================================================
// Identifiers
// =============================================================================

#[test]
fn identifiers_are_deterministic_and_linked() {
    setup();

    let _cleanup = mount_instance(
        TabsRootProps {
            default_value: Some("a".to_string()),
            ..Default::default()
        },
        &[],
    );

    for value in ["a", "b", "c"] {
        let trigger = trigger_index(value);
        let content = content_index(value);

        let trigger_id = attrs::get(trigger, "id").unwrap();
        let content_id = attrs::get(content, "id").unwrap();

        assert_eq!(trigger_id, format!("tabs-0-trigger-{value}"));
        assert_eq!(content_id, format!("tabs-0-content-{value}"));
        assert_eq!(attrs::get(trigger, "aria-controls"), Some(content_id));
        assert_eq!(attrs::get(content, "aria-labelledby"), Some(trigger_id));
    }
}

// =============================================================================
// Instance isolation
// =============================================================================

#[test]
fn two_roots_with_identical_values_do_not_interfere() {
    setup();

    let build = |label: &'static str| {
        tabs_root(TabsRootProps {
            default_value: Some("x".to_string()),
            id: Some(label.to_string()),
            children: Some(Box::new(|| {
                tabs_list(TabsListProps {
                    children: Some(Box::new(|| {
                        for value in ["x", "y"] {
                            tabs_trigger(TabsTriggerProps {
                                value: value.to_string(),
                                ..Default::default()
                            });
                        }
                    })),
                    ..Default::default()
                });
                for value in ["x", "y"] {
                    tabs_content(TabsContentProps {
                        value: value.to_string(),
                        ..Default::default()
                    });
                }
            })),
            ..Default::default()
        })
    };

    let _first = build("first");
    let _second = build("second");

    let first_trigger_y = index_of("tabs-0-trigger-y");
    let second_trigger_x = index_of("tabs-1-trigger-x");
    let second_trigger_y = index_of("tabs-1-trigger-y");

    // Select y in the second instance only
    click(second_trigger_y);

    assert_eq!(
        attrs::get(index_of("tabs-0-trigger-x"), "data-state"),
        Some("active".to_string())
    );
    assert_eq!(
        attrs::get(first_trigger_y, "data-state"),
        Some("inactive".to_string())
    );
    assert_eq!(
        attrs::get(second_trigger_x, "data-state"),
        Some("inactive".to_string())
    );
    assert_eq!(
        attrs::get(second_trigger_y, "data-state"),
        Some("active".to_string())
    );

    assert!(attrs::has(index_of("tabs-1-content-x"), "hidden"));
    assert!(!attrs::has(index_of("tabs-1-content-y"), "hidden"));
    assert!(!attrs::has(index_of("tabs-0-content-x"), "hidden"));
}
